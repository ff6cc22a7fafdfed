//! Structural and semantic validation of a candidate schema.
//!
//! The candidate originates from an unreliable generator, so validation is
//! exhaustive and field-indexed: every defect is accumulated into the report
//! rather than short-circuiting, which lets a caller decide to regenerate
//! with concrete feedback. The function is pure and never fails.

use serde_json::Value;
use tracing::warn;

use crate::taxonomy::FieldType;

/// Outcome of validating one candidate schema.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Defects that make the schema unusable.
    pub issues: Vec<ValidationIssue>,
    /// Non-fatal hints (e.g. a link field without a target doc type).
    pub advisories: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issue messages joined with `"; "`, for the caller-facing
    /// diagnostic payload.
    pub fn join_errors(&self) -> String {
        self.issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn push(&mut self, field_index: Option<usize>, field_name: Option<&str>, kind: IssueKind) {
        self.issues.push(ValidationIssue {
            field_index,
            field_name: field_name.map(str::to_owned),
            kind,
        });
    }
}

/// One validation defect, addressable by field position.
///
/// `field_index` is zero-based; the rendered message uses the 1-based
/// position ("Field 3: …") for humans.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field_index: Option<usize>,
    pub field_name: Option<String>,
    pub kind: IssueKind,
}

/// The closed set of defects the validator can report.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    NotAnObject,
    FieldsMissing,
    FieldsEmpty,
    NameMissing,
    LabelMissing,
    TypeMissing,
    DuplicateName { name: String },
    UnknownType { found: String },
    OptionsRequired { field_type: FieldType },
    MinAboveMax,
    MaxStarsOutOfRange,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(index) = self.field_index {
            write!(f, "Field {}: ", index + 1)?;
        }
        match &self.kind {
            IssueKind::NotAnObject => write!(f, "Schema must be an object"),
            IssueKind::FieldsMissing => write!(f, "Schema must contain a fields array"),
            IssueKind::FieldsEmpty => write!(f, "Schema must contain at least one field"),
            IssueKind::NameMissing => write!(f, "'name' is required and must be a string"),
            IssueKind::LabelMissing => write!(f, "'label' is required and must be a string"),
            IssueKind::TypeMissing => write!(f, "'type' is required and must be a string"),
            IssueKind::DuplicateName { name } => write!(f, "Duplicate field name '{name}'"),
            IssueKind::UnknownType { found } => write!(
                f,
                "Invalid field type '{found}'. Allowed types: {}",
                FieldType::allowed_names()
            ),
            IssueKind::OptionsRequired { field_type } => write!(
                f,
                "Field type '{field_type}' requires a non-empty options array"
            ),
            IssueKind::MinAboveMax => {
                write!(f, "'min' value cannot be greater than 'max' value")
            }
            IssueKind::MaxStarsOutOfRange => {
                write!(f, "'maxStars' must be between 1 and 10")
            }
        }
    }
}

/// Walk a candidate schema and accumulate every structural defect.
///
/// Two conditions terminate early with a single error each: a non-object
/// candidate, and a missing/empty `fields` array. Everything else is checked
/// per field, in order.
pub fn validate(candidate: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(schema) = candidate.as_object() else {
        report.push(None, None, IssueKind::NotAnObject);
        return report;
    };

    let Some(fields) = schema.get("fields").and_then(Value::as_array) else {
        report.push(None, None, IssueKind::FieldsMissing);
        return report;
    };

    if fields.is_empty() {
        report.push(None, None, IssueKind::FieldsEmpty);
        return report;
    }

    let mut seen_names: Vec<&str> = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let name = field.get("name").and_then(Value::as_str);
        let type_name = field.get("type").and_then(Value::as_str);

        if name.is_none() || name.is_some_and(str::is_empty) {
            report.push(Some(index), name, IssueKind::NameMissing);
        }
        if field
            .get("label")
            .and_then(Value::as_str)
            .is_none_or(str::is_empty)
        {
            report.push(Some(index), name, IssueKind::LabelMissing);
        }
        if type_name.is_none() || type_name.is_some_and(str::is_empty) {
            report.push(Some(index), name, IssueKind::TypeMissing);
        }

        // First occurrence wins; every later duplicate is flagged.
        if let Some(name) = name {
            if seen_names.contains(&name) {
                report.push(
                    Some(index),
                    Some(name),
                    IssueKind::DuplicateName { name: name.into() },
                );
            } else {
                seen_names.push(name);
            }
        }

        let field_type = match type_name {
            Some(t) if !t.is_empty() => match FieldType::from_name(t) {
                Some(field_type) => Some(field_type),
                None => {
                    report.push(Some(index), name, IssueKind::UnknownType { found: t.into() });
                    None
                }
            },
            _ => None,
        };

        if let Some(field_type) = field_type {
            if field_type.requires_options() {
                let has_options = field
                    .get("options")
                    .and_then(Value::as_array)
                    .is_some_and(|options| !options.is_empty());
                if !has_options {
                    report.push(Some(index), name, IssueKind::OptionsRequired { field_type });
                }
            }

            if field_type.is_link()
                && field.get("targetDocType").and_then(Value::as_str).is_none()
            {
                let advisory = format!(
                    "Field {}: Link field '{}' should specify targetDocType for better UX",
                    index + 1,
                    name.unwrap_or("<unnamed>")
                );
                warn!(field = index + 1, "{advisory}");
                report.advisories.push(advisory);
            }

            if field_type == FieldType::Rating {
                if let Some(max_stars) = field.get("maxStars").and_then(Value::as_f64) {
                    if !(1.0..=10.0).contains(&max_stars) {
                        report.push(Some(index), name, IssueKind::MaxStarsOutOfRange);
                    }
                }
            }
        }

        if let (Some(min), Some(max)) = (
            field.get("min").and_then(Value::as_f64),
            field.get("max").and_then(Value::as_f64),
        ) {
            if min > max {
                report.push(Some(index), name, IssueKind::MinAboveMax);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str, field_type: &str) -> Value {
        json!({ "name": name, "label": name, "type": field_type })
    }

    #[test]
    fn a_well_formed_schema_is_valid() {
        let candidate = json!({
            "title": "Contact",
            "fields": [
                field("email", "email"),
                { "name": "topic", "label": "Topic", "type": "select",
                  "options": ["sales", "support"] },
            ]
        });
        let report = validate(&candidate);
        assert!(report.is_valid(), "unexpected issues: {}", report.join_errors());
    }

    #[test]
    fn non_object_candidate_terminates_with_a_single_error() {
        let report = validate(&json!(["not", "a", "schema"]));
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::NotAnObject);
    }

    #[test]
    fn missing_and_empty_fields_arrays_each_yield_one_error() {
        let report = validate(&json!({ "title": "x" }));
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::FieldsMissing);

        let report = validate(&json!({ "fields": [] }));
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::FieldsEmpty);
    }

    #[test]
    fn missing_required_properties_are_accumulated_per_field() {
        let report = validate(&json!({ "fields": [{ "type": "text" }] }));
        let kinds: Vec<_> = report.issues.iter().map(|i| i.kind.clone()).collect();
        assert_eq!(kinds, vec![IssueKind::NameMissing, IssueKind::LabelMissing]);
    }

    #[test]
    fn duplicate_names_flag_every_later_occurrence() {
        let candidate = json!({
            "fields": [field("email", "email"), field("email", "text"), field("email", "text")]
        });
        let report = validate(&candidate);
        let duplicates: Vec<_> = report
            .issues
            .iter()
            .filter(|i| matches!(i.kind, IssueKind::DuplicateName { .. }))
            .map(|i| i.field_index)
            .collect();
        assert_eq!(duplicates, vec![Some(1), Some(2)]);
        assert!(report.join_errors().contains("Duplicate field name 'email'"));
    }

    #[test]
    fn unknown_types_name_the_offender_and_the_allowed_set() {
        let report = validate(&json!({ "fields": [field("x", "foo")] }));
        assert_eq!(
            report.issues[0].kind,
            IssueKind::UnknownType { found: "foo".into() }
        );
        let message = report.issues[0].to_string();
        assert!(message.starts_with("Field 1: Invalid field type 'foo'. Allowed types: data"));
    }

    #[test]
    fn empty_options_on_a_select_flags_exactly_that_field() {
        let candidate = json!({
            "fields": [
                field("email", "email"),
                { "name": "topic", "label": "Topic", "type": "select", "options": [] },
            ]
        });
        let report = validate(&candidate);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].field_index, Some(1));
        assert_eq!(
            report.issues[0].kind,
            IssueKind::OptionsRequired { field_type: FieldType::Select }
        );
    }

    #[test]
    fn min_above_max_is_an_error() {
        let candidate = json!({
            "fields": [{ "name": "n", "label": "N", "type": "number", "min": 10, "max": 3 }]
        });
        let report = validate(&candidate);
        assert_eq!(report.issues[0].kind, IssueKind::MinAboveMax);
    }

    #[test]
    fn out_of_range_max_stars_is_rejected_not_clamped() {
        let candidate = json!({
            "fields": [{ "name": "r", "label": "R", "type": "rating", "maxStars": 15 }]
        });
        let report = validate(&candidate);
        assert!(!report.is_valid());
        assert_eq!(report.issues[0].kind, IssueKind::MaxStarsOutOfRange);

        // Absence is not an error; the enrichment stage fills the default.
        let candidate = json!({
            "fields": [{ "name": "r", "label": "R", "type": "rating" }]
        });
        assert!(validate(&candidate).is_valid());
    }

    #[test]
    fn link_without_target_doc_type_is_an_advisory_not_an_error() {
        let candidate = json!({
            "fields": [field("owner", "link")]
        });
        let report = validate(&candidate);
        assert!(report.is_valid());
        assert_eq!(report.advisories.len(), 1);
        assert!(report.advisories[0].contains("targetDocType"));
    }
}
