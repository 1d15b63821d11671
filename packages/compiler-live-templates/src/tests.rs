use crate::{
    classify, collect, emit, generate, normalize_display_name, qualify_name, render_body,
    render_template, serialize_props, Classification, EmitError, TemplateOptions,
    CURSOR_PLACEHOLDER,
};
use serde_json::{json, Value};
use std::path::Path;
use uxcore_manifest::{Manifest, MockFileSystem};

fn manifest(value: Value) -> Manifest {
    Manifest::from_value(value).expect("manifest root must be an object")
}

fn keys(manifest: &Manifest, options: &TemplateOptions) -> Vec<String> {
    collect(manifest, options).keys().cloned().collect()
}

fn ui_library() -> Manifest {
    manifest(json!({
        "Button": {
            "displayName": "Button",
            "propTypes": { "type": null, "size": null, "children": null },
            "defaultProps": { "type": "secondary", "size": "large", "disabled": false }
        },
        "Form": {
            "displayName": "Form",
            "propTypes": { "children": null },
            "defaultProps": {},
            "Item": {
                "propTypes": { "label": null, "children": null },
                "defaultProps": { "label": "Name" }
            },
            "FormRow": {
                "propTypes": { "children": null }
            }
        },
        "Icon": {
            "propTypes": { "name": null },
            "defaultProps": {}
        },
        "version": "1.0.0",
        "utils": { "displayName": "utils" }
    }))
}

#[test]
fn test_normalize_display_name() {
    assert_eq!(normalize_display_name("Form.Item"), "form-item");
    assert_eq!(normalize_display_name("Button"), "button");
    assert_eq!(normalize_display_name(""), "");
    assert_eq!(normalize_display_name("Table.ColumnGroup"), "table-column-group");
    assert_eq!(normalize_display_name("A.B.C"), "a-b.-c");
}

#[test]
fn test_qualify_name_uses_substring_check() {
    let options = TemplateOptions::default();

    assert_eq!(qualify_name("Button", None, &options), "Button");
    assert_eq!(qualify_name("Item", Some("Form"), &options), "Form.Item");
    assert_eq!(qualify_name("FormRow", Some("Form"), &options), "FormRow");
    // Not a prefix, still contained
    assert_eq!(qualify_name("CheckboxGroup", Some("Group"), &options), "CheckboxGroup");
}

#[test]
fn test_qualify_name_respects_skip_parent_name() {
    let options = TemplateOptions {
        skip_parent_name: ["Layout".to_string()].into_iter().collect(),
        ..Default::default()
    };

    assert_eq!(qualify_name("Sider", Some("Layout"), &options), "Sider");
    assert_eq!(qualify_name("Sider", Some("Menu"), &options), "Menu.Sider");
}

#[test]
fn test_classify() {
    assert!(matches!(classify(&json!({ "propTypes": {} })), Classification::Component(_)));
    assert!(matches!(classify(&json!({ "displayName": "X" })), Classification::Component(_)));
    assert!(matches!(classify(&json!({ "defaultProps": {} })), Classification::Component(_)));
    assert_eq!(classify(&json!({ "displayName": "" })), Classification::NotComponent);
    assert_eq!(classify(&json!({ "propTypes": null })), Classification::NotComponent);
    assert_eq!(classify(&json!("Button")), Classification::NotComponent);
    assert_eq!(classify(&json!(null)), Classification::NotComponent);
}

#[test]
fn test_classify_unwraps_default_export() {
    let value = json!({
        "__esModule": true,
        "default": { "displayName": "Dialog", "defaultProps": { "visible": false } }
    });

    match classify(&value) {
        Classification::Component(component) => {
            assert_eq!(component.get("displayName"), Some(&json!("Dialog")));
        }
        Classification::NotComponent => panic!("default export should qualify"),
    }

    let empty_default = json!({ "default": { "name": "dialog" } });
    assert_eq!(classify(&empty_default), Classification::NotComponent);
}

#[test]
fn test_collect_discovers_nested_components() {
    let library = ui_library();
    let registry = collect(&library, &TemplateOptions::default());

    let found: Vec<&str> = registry.keys().map(String::as_str).collect();
    assert_eq!(found, vec!["Button", "Form", "Form.Item", "FormRow", "Icon"]);

    let item = &registry["Form.Item"];
    assert_eq!(item.alias, "form-item");
    assert!(item.has_children);
    assert!(item.prop_schema.contains("label"));
    assert!(!item.prop_schema.contains("children"));

    let icon = &registry["Icon"];
    assert!(!icon.has_children);
    assert_eq!(icon.prop_schema.len(), 1);
}

#[test]
fn test_collect_never_records_lowercase_names() {
    let library = manifest(json!({
        "utils": {
            "displayName": "utils",
            "Inner": { "displayName": "Inner" }
        },
        "Button": { "displayName": "Button" }
    }));

    let found = keys(&library, &TemplateOptions::default());
    assert_eq!(found, vec!["Button"]);
}

#[test]
fn test_collect_skips_values_without_signals() {
    let library = manifest(json!({
        "Config": {
            "Button": { "displayName": "Button" }
        },
        "Size": "large",
        "Empty": null
    }));

    // Non-components are not descended into either
    assert!(keys(&library, &TemplateOptions::default()).is_empty());
}

#[test]
fn test_collect_first_key_wins() {
    let library = manifest(json!({
        "Select": {
            "displayName": "Select",
            "Option": { "displayName": "First", "defaultProps": { "value": 1 } }
        },
        "Menu": {
            "displayName": "Menu",
            "SelectOption": { "displayName": "Second" }
        },
        "SelectOption": { "displayName": "Third" }
    }));
    let options = TemplateOptions {
        skip_parent_name: ["Menu".to_string()].into_iter().collect(),
        ..Default::default()
    };

    let registry = collect(&library, &options);
    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry["Select.Option"].default_props.get("value"),
        Some(&json!(1))
    );
    // Registered under Menu first, the top-level export is a duplicate
    let keys: Vec<&str> = registry.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Select", "Select.Option", "Menu", "SelectOption"]);
}

#[test]
fn test_collect_skip_list_prunes_subtree() {
    let library = ui_library();
    let options = TemplateOptions {
        skip: ["Form".to_string()].into_iter().collect(),
        ..Default::default()
    };

    let found = keys(&library, &options);
    assert_eq!(found, vec!["Button", "Icon"]);
}

#[test]
fn test_collect_uses_unwrapped_default_for_recursion() {
    let library = manifest(json!({
        "Tabs": {
            "default": {
                "displayName": "Tabs",
                "TabPane": { "displayName": "TabPane" }
            }
        }
    }));

    let found = keys(&library, &TemplateOptions::default());
    assert_eq!(found, vec!["Tabs", "Tabs.TabPane"]);
}

#[test]
fn test_collect_missing_default_props() {
    let library = manifest(json!({
        "Divider": { "displayName": "Divider", "defaultProps": null }
    }));

    let registry = collect(&library, &TemplateOptions::default());
    assert!(registry["Divider"].default_props.is_empty());
}

#[test]
fn test_render_self_closing_without_props() {
    let props = serialize_props(&serde_json::Map::new());
    assert_eq!(render_body("Icon", false, &props), "&lt;Icon /&gt;&#10;");
}

#[test]
fn test_render_self_closing_with_props() {
    let props = serialize_props(json!({ "name": "search" }).as_object().unwrap());
    assert_eq!(
        render_body("Icon", false, &props),
        "&lt;Icon&#10;    name=&quot;$name$&quot;&#10;/&gt;&#10;"
    );
}

#[test]
fn test_render_children_without_props() {
    let props = serialize_props(&serde_json::Map::new());
    assert_eq!(
        render_body("Form", true, &props),
        "&lt;Form&gt;&#10;    $END$&#10;&lt;/Form&gt;&#10;"
    );
}

#[test]
fn test_render_children_with_single_prop() {
    let props = serialize_props(json!({ "label": "Name" }).as_object().unwrap());
    assert_eq!(
        render_body("Form.Item", true, &props),
        "&lt;Form.Item label=&quot;$label$&quot;&gt;&#10;    $END$ &#10;&lt;/Form.Item&gt;&#10;"
    );
}

#[test]
fn test_render_children_with_multiple_props() {
    let props = serialize_props(json!({ "type": "primary", "size": 2 }).as_object().unwrap());
    let body = render_body("Button", true, &props);

    assert_eq!(
        body,
        "&lt;Button&#10;    type=&quot;$type$&quot; &#10;    size={$size$}&#10;&gt;&#10;    $END$&#10;&lt;/Button&gt;&#10;"
    );
}

#[test]
fn test_render_uses_captured_children() {
    let props = serialize_props(json!({ "children": "Submit" }).as_object().unwrap());
    let body = render_body("Button", true, &props);
    assert!(body.contains("    Submit&#10;"));
    assert!(!body.contains(CURSOR_PLACEHOLDER));

    let falsy = serialize_props(json!({ "children": "" }).as_object().unwrap());
    assert!(render_body("Button", true, &falsy).contains(CURSOR_PLACEHOLDER));
}

#[test]
fn test_render_template_block() {
    let library = ui_library();
    let options = TemplateOptions {
        prefix: "ux-".to_string(),
        ..Default::default()
    };
    let registry = collect(&library, &options);
    let block = render_template("Button", &registry["Button"], &options);

    println!("Generated template:\n{}", block);

    assert!(block.starts_with("\n    <template name=\"ux-button\"\n"));
    assert!(block.contains("description=\"UXCore Button\" toReformat=\"true\" toShortenFQNames=\"true\">"));
    assert!(block.contains(
        "        <variable name=\"type\" expression=\"\" defaultValue=\"&quot;secondary&quot;\" alwaysStopAt=\"true\"/>"
    ));
    assert!(block.contains("<variable name=\"disabled\" expression=\"\" defaultValue=\"&quot;false&quot;\""));
    assert!(block.contains("<option name=\"JAVASCRIPT_JSX_HTML\" value=\"true\"/>"));
    assert!(block.ends_with("     </template>"));

    let type_at = block.find("name=\"type\"").unwrap();
    let size_at = block.find("name=\"size\"").unwrap();
    assert!(type_at < size_at);
}

#[test]
fn test_generate_document_shape() {
    let document = generate(&ui_library(), &TemplateOptions::default());

    assert_eq!(document.component_count(), 5);
    assert!(document.xml.starts_with("<templateSet group=\"UXCore\">\n\n    <template"));
    assert!(document.xml.ends_with("     </template>\n</templateSet>"));
    assert_eq!(document.xml.matches("<template ").count(), 5);
    assert_eq!(document.xml.matches("<context>").count(), 5);
}

#[test]
fn test_generate_empty_library() {
    let document = generate(&manifest(json!({})), &TemplateOptions::default());
    assert_eq!(document.xml, "<templateSet group=\"UXCore\">\n</templateSet>");
}

#[test]
fn test_generate_is_deterministic() {
    let options = TemplateOptions::default();
    let first = generate(&ui_library(), &options);
    let second = generate(&ui_library(), &options);
    assert_eq!(first.xml, second.xml);
}

#[test]
fn test_emit_writes_document() {
    let fs = MockFileSystem::new();
    let path = Path::new("resources/liveTemplates/UXCore.xml");
    let options = TemplateOptions::default();

    let summary = emit(&ui_library(), &options, path, &fs).unwrap();

    assert_eq!(summary.component_count, 5);
    let written = fs.contents(path).unwrap();
    assert_eq!(summary.bytes_written, written.len());
    assert_eq!(written, generate(&ui_library(), &options).xml);
}

#[test]
fn test_emit_write_failure_is_fatal() {
    let fs = MockFileSystem::read_only();
    let err = emit(
        &ui_library(),
        &TemplateOptions::default(),
        Path::new("UXCore.xml"),
        &fs,
    )
    .unwrap_err();

    let EmitError::Write { path, .. } = err;
    assert_eq!(path, Path::new("UXCore.xml"));
}
