use crate::collector::ComponentDescriptor;
use crate::context::{TemplateContext, TemplateOptions};
use crate::props::{quote_for_xml, serialize_props, SerializedProps};
use uxcore_manifest::{is_truthy, js_to_string};

/// Editor cursor position after the template is expanded
pub const CURSOR_PLACEHOLDER: &str = "$END$";

/// Contexts a generated template is offered in; the same for every template
pub const CONTEXT_BLOCK: &str = r#"        <context>
            <option name="HTML" value="true"/>
            <option name="HTML_TEXT" value="true"/>
            <option name="JAVASCRIPT" value="true"/>
            <option name="JAVASCRIPT_EXPRESSION" value="true"/>
            <option name="JAVASCRIPT_JSX_HTML" value="true"/>
            <option name="JAVASCRIPT_STATEMENT" value="true"/>
            <option name="JAVASCRIPT_OTHER" value="true"/>
            <option name="OTHER" value="true"/>
        </context>
     </template>"#;

/// JSX usage of a component, already escaped for an attribute value
pub fn render_body(key: &str, has_children: bool, props: &SerializedProps) -> String {
    let children = props
        .children
        .as_ref()
        .filter(|value| is_truthy(value))
        .map(|value| quote_for_xml(&js_to_string(value)))
        .unwrap_or_else(|| CURSOR_PLACEHOLDER.to_string());
    let markup = &props.props_markup;

    match (has_children, props.props_count) {
        (true, 0) => format!("&lt;{key}&gt;&#10;    {children}&#10;&lt;/{key}&gt;&#10;"),
        (true, 1) => format!("&lt;{key} {markup}&gt;&#10;    {children} &#10;&lt;/{key}&gt;&#10;"),
        (true, _) => format!(
            "&lt;{key}&#10;    {markup}&#10;&gt;&#10;    {children}&#10;&lt;/{key}&gt;&#10;"
        ),
        (false, 0) => format!("&lt;{key} /&gt;&#10;"),
        (false, _) => format!("&lt;{key}&#10;    {markup}&#10;/&gt;&#10;"),
    }
}

/// Render the `<template>` element for one collected component
pub fn render_template(
    key: &str,
    descriptor: &ComponentDescriptor,
    options: &TemplateOptions,
) -> String {
    let props = serialize_props(&descriptor.default_props);
    let body = render_body(key, descriptor.has_children, &props);

    let mut ctx = TemplateContext::new();
    ctx.add(format!(
        "\n    <template name=\"{prefix}{alias}\"\n              value=\"{body}\"\n              description=\"{group} {key}\" toReformat=\"true\" toShortenFQNames=\"true\">\n",
        prefix = options.prefix,
        alias = descriptor.alias,
        group = options.group,
    ));

    for (name, value) in &props.placeholders {
        ctx.add(format!(
            "        <variable name=\"{name}\" expression=\"\" defaultValue=\"&quot;{}&quot;\" alwaysStopAt=\"true\"/>",
            value.to_attribute()
        ));
    }

    ctx.add(CONTEXT_BLOCK);
    ctx.get_output()
}
