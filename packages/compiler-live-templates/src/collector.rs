use crate::context::TemplateOptions;
use indexmap::{IndexMap, IndexSet};
use serde_json::{map, Map, Value};
use tracing::{debug, info, instrument};
use uxcore_manifest::{is_truthy_member, starts_with_uppercase, Manifest};

/// Members that mark an object as a component
const COMPONENT_SIGNALS: [&str; 3] = ["propTypes", "displayName", "defaultProps"];

/// Everything needed to render one component's template
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    pub qualified_key: String,
    pub alias: String,
    pub has_children: bool,
    /// Declared prop names, without `children`
    pub prop_schema: IndexSet<String>,
    pub default_props: Map<String, Value>,
}

/// Collected components keyed by qualified key, in discovery order
pub type Registry = IndexMap<String, ComponentDescriptor>;

/// Outcome of inspecting one exported value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    NotComponent,
    Component(&'a Map<String, Value>),
}

fn has_component_signal(object: &Map<String, Value>) -> bool {
    COMPONENT_SIGNALS
        .iter()
        .any(|signal| is_truthy_member(object.get(*signal)))
}

/// Decide whether an exported value is a component.
///
/// A value without signals of its own still qualifies through a `default`
/// member that carries them, in which case that member is the component.
pub fn classify(value: &Value) -> Classification<'_> {
    let Some(object) = value.as_object() else {
        return Classification::NotComponent;
    };

    if has_component_signal(object) {
        return Classification::Component(object);
    }

    match object.get("default").and_then(Value::as_object) {
        Some(inner) if has_component_signal(inner) => Classification::Component(inner),
        _ => Classification::NotComponent,
    }
}

/// Key under which `name` is registered when found inside `parent_name`.
///
/// Qualification is suppressed when the parent is listed in
/// `skip_parent_name` or when `name` already contains the parent name
/// anywhere (not only as a prefix).
pub fn qualify_name(name: &str, parent_name: Option<&str>, options: &TemplateOptions) -> String {
    match parent_name {
        Some(parent)
            if !parent.is_empty()
                && !options.skip_parent_name.contains(parent)
                && !name.contains(parent) =>
        {
            format!("{}.{}", parent, name)
        }
        _ => name.to_string(),
    }
}

/// Turn a qualified key into a hyphenated lowercase alias: `Form.Item` -> `form-item`
pub fn normalize_display_name(name: &str) -> String {
    let name = name.replacen('.', "", 1);
    let mut alias = String::with_capacity(name.len() + 4);

    for (offset, c) in name.char_indices() {
        if c.is_ascii_uppercase() {
            if offset != 0 {
                alias.push('-');
            }
            alias.push(c.to_ascii_lowercase());
        } else {
            alias.push(c);
        }
    }

    alias
}

fn extract_prop_schema(component: &Map<String, Value>) -> (bool, IndexSet<String>) {
    let mut has_children = false;
    let mut schema = IndexSet::new();

    if let Some(prop_types) = component.get("propTypes").and_then(Value::as_object) {
        for name in prop_types.keys() {
            if name == "children" {
                has_children = true;
            } else {
                schema.insert(name.clone());
            }
        }
    }

    (has_children, schema)
}

/// One level of the walk: the remaining members of an object and the name
/// that object was found under
struct Frame<'a> {
    members: map::Iter<'a>,
    parent_name: Option<&'a str>,
}

/// Walk the manifest and collect every component, including static
/// sub-components such as `Form.Item`.
///
/// Members are visited depth-first in manifest order: a component's own
/// sub-components come before its next sibling. The first component found
/// under a key wins.
#[instrument(skip_all, fields(exports = manifest.len()))]
pub fn collect(manifest: &Manifest, options: &TemplateOptions) -> Registry {
    let mut registry = Registry::new();
    let mut stack = vec![Frame {
        members: manifest.exports().iter(),
        parent_name: None,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some((name, value)) = frame.members.next() else {
            stack.pop();
            continue;
        };
        let parent_name = frame.parent_name;

        let key = qualify_name(name, parent_name, options);
        if options.skip.contains(&key) {
            debug!(key = %key, "Skipping configured key");
            continue;
        }
        if registry.contains_key(&key) {
            debug!(key = %key, "Skipping duplicate key");
            continue;
        }
        if !starts_with_uppercase(name) {
            continue;
        }

        let component = match classify(value) {
            Classification::Component(component) => component,
            Classification::NotComponent => {
                debug!(key = %key, "Not a component");
                continue;
            }
        };

        let (has_children, prop_schema) = extract_prop_schema(component);
        let default_props = component
            .get("defaultProps")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        debug!(
            key = %key,
            has_children,
            props = prop_schema.len(),
            defaults = default_props.len(),
            "Registering component"
        );

        registry.insert(
            key.clone(),
            ComponentDescriptor {
                alias: normalize_display_name(&key),
                qualified_key: key,
                has_children,
                prop_schema,
                default_props,
            },
        );

        stack.push(Frame {
            members: component.iter(),
            parent_name: Some(name.as_str()),
        });
    }

    info!(components = registry.len(), "Component collection complete");
    registry
}
