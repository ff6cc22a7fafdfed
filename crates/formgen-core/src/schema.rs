//! The form-schema data model—the wire contract between the generation
//! pipeline and the rendering layer.
//!
//! A [`FormSchema`] serializes to exactly the JSON shape the renderer
//! consumes: a flat object per field, `"type"` as an inline tag, camelCase
//! attribute names, and no extra wrapping.
//!
//! Type-specific attributes live on [`FieldKind`], a sum type keyed by the
//! field's tag, so each variant carries only the attributes that are
//! meaningful for it. The enum is internally tagged on `"type"` and flattened
//! into [`FieldSpec`], which keeps the wire format flat while letting the
//! enrichment stage match exhaustively instead of probing an attribute bag.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete generated form: title, ordered fields and button labels.
///
/// Invariants (upheld by [`crate::validate::validate`], not by construction):
/// `fields` is non-empty and no two fields share a `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_text: Option<String>,
}

/// One field definition.
///
/// `name` is the stable key into submitted form data; `kind` carries the
/// field's tag plus its type-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Nested length/range/file constraints shared by several field types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<String>>,
}

/// The field's tag plus the attributes meaningful for that tag.
///
/// Variant tags are the wire names of [`crate::taxonomy::FieldType`]. Most
/// tags carry no extra attributes and are plain unit variants; the choice
/// family carries its options, and a handful of types carry cosmetic
/// attributes that [`crate::enrich::enrich`] defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    // Basic text
    Data,
    SmallText,
    LongText,
    Text,
    Markdown,
    Html,
    Code,
    // Numeric
    Int,
    Float,
    Currency {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        currency: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        precision: Option<u32>,
    },
    Percent,
    Rating {
        #[serde(
            default,
            rename = "maxStars",
            skip_serializing_if = "Option::is_none"
        )]
        max_stars: Option<u32>,
        #[serde(
            default,
            rename = "allowHalfRating",
            skip_serializing_if = "Option::is_none"
        )]
        allow_half_rating: Option<bool>,
    },
    // Date & time
    Date,
    Datetime,
    Time,
    Duration,
    // Relationships
    Link {
        #[serde(
            default,
            rename = "targetDocType",
            skip_serializing_if = "Option::is_none"
        )]
        target_doc_type: Option<String>,
        #[serde(
            default,
            rename = "linkFilters",
            skip_serializing_if = "Option::is_none"
        )]
        link_filters: Option<Value>,
    },
    DynamicLink {
        #[serde(
            default,
            rename = "targetDocType",
            skip_serializing_if = "Option::is_none"
        )]
        target_doc_type: Option<String>,
    },
    Table {
        #[serde(
            default,
            rename = "targetDocType",
            skip_serializing_if = "Option::is_none"
        )]
        target_doc_type: Option<String>,
    },
    TableMultiselect {
        #[serde(
            default,
            rename = "targetDocType",
            skip_serializing_if = "Option::is_none"
        )]
        target_doc_type: Option<String>,
    },
    // Choice — options guaranteed present and non-empty by the validator.
    Select { options: Vec<String> },
    Autocomplete { options: Vec<String> },
    Multiselect { options: Vec<String> },
    Radio { options: Vec<String> },
    Checkbox,
    // Files & media
    Attach {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        multiple: Option<bool>,
    },
    AttachImage {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<String>,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<String>,
    },
    Signature,
    Barcode,
    // Visual / layout
    Color,
    Heading,
    Button,
    ReadOnly,
    Icon,
    // Specialized
    Geolocation {
        #[serde(
            default,
            rename = "mapType",
            skip_serializing_if = "Option::is_none"
        )]
        map_type: Option<MapStyle>,
    },
    Json,
    Password,
    Phone,
    Email,
    Url,
    // Additional web types
    Number,
    Range,
    Search,
    Switch,
    Tags,
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accept: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        multiple: Option<bool>,
    },
}

/// Map rendering style for `geolocation` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl FieldSpec {
    /// Minimal constructor used by tests and programmatic schema assembly.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            placeholder: None,
            description: None,
            default_value: None,
            min: None,
            max: None,
            step: None,
            pattern: None,
            validation: None,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_deserializes_with_inline_type_tag() {
        let field: FieldSpec = serde_json::from_value(json!({
            "name": "email",
            "label": "Email",
            "type": "email",
            "required": true
        }))
        .unwrap();
        assert_eq!(field.kind, FieldKind::Email);
        assert!(field.required);
    }

    #[test]
    fn choice_field_carries_its_options() {
        let field: FieldSpec = serde_json::from_value(json!({
            "name": "color",
            "label": "Colour",
            "type": "select",
            "options": ["red", "green"]
        }))
        .unwrap();
        assert_eq!(
            field.kind,
            FieldKind::Select {
                options: vec!["red".into(), "green".into()]
            }
        );
    }

    #[test]
    fn type_specific_attributes_use_camel_case_wire_names() {
        let field: FieldSpec = serde_json::from_value(json!({
            "name": "score",
            "label": "Score",
            "type": "rating",
            "maxStars": 7
        }))
        .unwrap();
        assert_eq!(
            field.kind,
            FieldKind::Rating {
                max_stars: Some(7),
                allow_half_rating: None
            }
        );

        let back = serde_json::to_value(&field).unwrap();
        assert_eq!(back["type"], "rating");
        assert_eq!(back["maxStars"], 7);
    }

    #[test]
    fn unknown_extra_keys_are_ignored() {
        let field: FieldSpec = serde_json::from_value(json!({
            "name": "bio",
            "label": "Bio",
            "type": "long_text",
            "rows": 4
        }))
        .unwrap();
        assert_eq!(field.kind, FieldKind::LongText);
    }

    #[test]
    fn schema_serializes_flat_with_camel_case_buttons() {
        let schema = FormSchema {
            title: Some("Contact".into()),
            description: None,
            fields: vec![FieldSpec::new("email", "Email", FieldKind::Email)],
            submit_text: Some("Submit".into()),
            reset_text: Some("Reset".into()),
        };
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["submitText"], "Submit");
        assert_eq!(value["resetText"], "Reset");
        assert_eq!(value["fields"][0]["type"], "email");
        assert!(value.get("description").is_none());
    }
}
