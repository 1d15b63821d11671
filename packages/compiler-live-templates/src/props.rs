use indexmap::IndexMap;
use serde_json::{Map, Number, Value};
use uxcore_manifest::js_number_to_string;

/// Separator between prop fragments: an encoded newline plus indentation
pub const PROPS_SEPARATOR: &str = " &#10;    ";

/// Escape text for use inside an XML attribute.
///
/// `&` is replaced first so entities produced by the later replacements are
/// left alone.
pub fn quote_for_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('\'', "&apos;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Literal default value of a template placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceholderValue {
    Number(Number),
    Bool(bool),
    /// JSON text of an object default, already XML-escaped
    Json(String),
    /// Raw string default
    Text(String),
}

impl PlaceholderValue {
    /// Text for a `defaultValue` attribute
    pub fn to_attribute(&self) -> String {
        match self {
            PlaceholderValue::Number(n) => js_number_to_string(n),
            PlaceholderValue::Bool(b) => b.to_string(),
            PlaceholderValue::Json(escaped) => escaped.clone(),
            PlaceholderValue::Text(raw) => quote_for_xml(raw),
        }
    }
}

/// Default props turned into template markup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializedProps {
    pub props_count: usize,
    pub props_markup: String,
    /// Default value of `children`, if declared
    pub children: Option<Value>,
    pub placeholders: IndexMap<String, PlaceholderValue>,
}

/// Objects carrying `type`, `key` and `ref` are rendered elements, not
/// literals that can be written into a template
fn is_element_descriptor(object: &Map<String, Value>) -> bool {
    ["type", "key", "ref"]
        .iter()
        .all(|field| object.contains_key(*field))
}

/// Serialize default props in declaration order
pub fn serialize_props(default_props: &Map<String, Value>) -> SerializedProps {
    let mut markup = Vec::with_capacity(default_props.len());
    let mut placeholders = IndexMap::new();
    let mut children = None;

    for (key, value) in default_props {
        if key == "children" {
            children = Some(value.clone());
            continue;
        }

        match value {
            Value::Number(n) => {
                markup.push(format!("{key}={{${key}$}}"));
                placeholders.insert(key.clone(), PlaceholderValue::Number(n.clone()));
            }
            Value::Object(object) => {
                if is_element_descriptor(object) {
                    continue;
                }
                markup.push(format!("{key}={{${key}$}}"));
                // Serializing a `Value` cannot fail
                let json = serde_json::to_string(object).unwrap_or_default();
                placeholders.insert(key.clone(), PlaceholderValue::Json(quote_for_xml(&json)));
            }
            Value::Bool(true) => markup.push(key.clone()),
            Value::Bool(false) => {
                markup.push(format!("{key}={{${key}$}}"));
                placeholders.insert(key.clone(), PlaceholderValue::Bool(false));
            }
            Value::String(s) => {
                markup.push(format!("{key}=&quot;${key}$&quot;"));
                placeholders.insert(key.clone(), PlaceholderValue::Text(s.clone()));
            }
            Value::Null | Value::Array(_) => markup.push(format!("{key}={{}}")),
        }
    }

    SerializedProps {
        props_count: markup.len(),
        props_markup: markup.join(PROPS_SEPARATOR),
        children,
        placeholders,
    }
}
