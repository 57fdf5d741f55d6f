//! Style schema model: the grouped declarations the quick-style tab renders.
//!
//! DESIGN
//! ======
//! Declarations are data, not code. A host can replace the built-in catalog
//! by deserializing its own `Vec<StyleGroup>` and providing that instead;
//! the reconciler and the panel only ever walk the declared structure.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Which leaf control edits a declared style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleControl {
    /// Free numeric value with stepper buttons.
    Number,
    /// CSS-style length: numeric magnitude plus a unit suffix.
    Size,
    /// One choice out of the declared option list.
    Select,
    /// Color picked from swatches or typed as a hex value.
    Color,
}

/// A single style property the panel can edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    /// Dotted path into the node's property tree. Unique across the catalog.
    pub path: String,
    /// Label shown next to the control.
    pub label: String,
    /// Leaf control used to edit the value.
    pub control: StyleControl,
    /// Value displayed (and written on toggle-on) while the path is unset.
    pub default_value: serde_json::Value,
    /// Choices for `Select` controls; empty for the other controls.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// A titled set of declarations rendered as one collapsible section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleGroup {
    /// Stable key the expansion state is stored under.
    pub key: String,
    /// Section title.
    pub title: String,
    /// Declarations in render order.
    pub styles: Vec<StyleDeclaration>,
}

/// The catalog a panel instance renders, provided through context. Defaults
/// to [`default_style_groups`]; hosts can provide a deserialized catalog of
/// their own instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleCatalog {
    /// Groups in render order.
    pub groups: Vec<StyleGroup>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            groups: default_style_groups(),
        }
    }
}

fn number(path: &str, label: &str, default_value: f64) -> StyleDeclaration {
    StyleDeclaration {
        path: path.to_owned(),
        label: label.to_owned(),
        control: StyleControl::Number,
        default_value: crate::util::prop_paths::number_scalar(default_value),
        options: Vec::new(),
    }
}

fn size(path: &str, label: &str, default_value: &str) -> StyleDeclaration {
    StyleDeclaration {
        path: path.to_owned(),
        label: label.to_owned(),
        control: StyleControl::Size,
        default_value: serde_json::Value::String(default_value.to_owned()),
        options: Vec::new(),
    }
}

fn select(path: &str, label: &str, default_value: &str, options: &[&str]) -> StyleDeclaration {
    StyleDeclaration {
        path: path.to_owned(),
        label: label.to_owned(),
        control: StyleControl::Select,
        default_value: serde_json::Value::String(default_value.to_owned()),
        options: options.iter().map(|&o| o.to_owned()).collect(),
    }
}

fn color(path: &str, label: &str, default_value: &str) -> StyleDeclaration {
    StyleDeclaration {
        path: path.to_owned(),
        label: label.to_owned(),
        control: StyleControl::Color,
        default_value: serde_json::Value::String(default_value.to_owned()),
        options: Vec::new(),
    }
}

/// The built-in catalog: the common CSS-flavored properties under the
/// node's nested `style` object, grouped the way the panel shows them.
pub fn default_style_groups() -> Vec<StyleGroup> {
    vec![
        StyleGroup {
            key: "layout".to_owned(),
            title: "Layout".to_owned(),
            styles: vec![
                select(
                    "style.display",
                    "Display",
                    "block",
                    &["block", "inline-block", "flex", "none"],
                ),
                select("style.flexDirection", "Direction", "row", &["row", "column"]),
                select(
                    "style.justifyContent",
                    "Justify",
                    "flex-start",
                    &["flex-start", "center", "flex-end", "space-between"],
                ),
                select(
                    "style.alignItems",
                    "Align",
                    "stretch",
                    &["stretch", "flex-start", "center", "flex-end"],
                ),
            ],
        },
        StyleGroup {
            key: "dimensions".to_owned(),
            title: "Dimensions".to_owned(),
            styles: vec![
                size("style.width", "Width", "100px"),
                size("style.height", "Height", "40px"),
                size("style.minHeight", "Min height", "0px"),
                size("style.maxWidth", "Max width", "1200px"),
            ],
        },
        StyleGroup {
            key: "spacing".to_owned(),
            title: "Spacing".to_owned(),
            styles: vec![
                number("style.marginTop", "Margin top", 0.0),
                number("style.marginRight", "Margin right", 0.0),
                number("style.marginBottom", "Margin bottom", 0.0),
                number("style.marginLeft", "Margin left", 0.0),
                number("style.paddingTop", "Padding top", 0.0),
                number("style.paddingRight", "Padding right", 0.0),
                number("style.paddingBottom", "Padding bottom", 0.0),
                number("style.paddingLeft", "Padding left", 0.0),
            ],
        },
        StyleGroup {
            key: "typography".to_owned(),
            title: "Typography".to_owned(),
            styles: vec![
                size("style.fontSize", "Font size", "16px"),
                select(
                    "style.fontWeight",
                    "Weight",
                    "400",
                    &["300", "400", "600", "700"],
                ),
                select(
                    "style.textAlign",
                    "Text align",
                    "left",
                    &["left", "center", "right", "justify"],
                ),
                color("style.color", "Text color", "#1f2933"),
            ],
        },
        StyleGroup {
            key: "decoration".to_owned(),
            title: "Decoration".to_owned(),
            styles: vec![
                color("style.backgroundColor", "Background", "#ffffff"),
                color("style.borderColor", "Border color", "#d3dce6"),
                number("style.borderWidth", "Border width", 0.0),
                size("style.borderRadius", "Corner radius", "0px"),
                number("style.opacity", "Opacity", 1.0),
            ],
        },
    ]
}
