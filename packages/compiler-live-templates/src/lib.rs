mod collector;
mod context;
mod emitter;
mod props;
mod renderer;

pub use collector::{
    classify, collect, normalize_display_name, qualify_name, Classification,
    ComponentDescriptor, Registry,
};
pub use context::{TemplateContext, TemplateOptions, DEFAULT_GROUP};
pub use emitter::{emit, generate, EmitError, EmitSummary, GeneratedDocument};
pub use props::{quote_for_xml, serialize_props, PlaceholderValue, SerializedProps};
pub use renderer::{render_body, render_template, CONTEXT_BLOCK, CURSOR_PLACEHOLDER};

#[cfg(test)]
mod tests;
