//! The fixed prompt pair sent for every generation request.
//!
//! The system instruction describes the full field-type taxonomy, the
//! required JSON shape and the formatting rules; the user message embeds the
//! caller's description verbatim. Both are deterministic—the only variable
//! content is the caller's prompt text.

use formgen_core::taxonomy::FieldType;

use crate::builder::PromptBuilder;

/// Exemplar of the required reply shape, shown to the model verbatim.
const SCHEMA_EXEMPLAR: &str = r#"{
  "title": "Form Title",
  "description": "Optional form description",
  "fields": [
    {
      "name": "field_name",
      "label": "Field Label",
      "type": "field_type",
      "required": true,
      "placeholder": "optional placeholder",
      "options": ["option1", "option2"],
      "validation": {
        "minLength": 0,
        "maxLength": 100
      }
    }
  ],
  "submitText": "Submit",
  "resetText": "Reset"
}"#;

/// Build the fixed system instruction.
///
/// The taxonomy section is generated from [`FieldType::ALL`], so prompt and
/// validator can never disagree about the allowed tags.
pub fn system_prompt() -> String {
    PromptBuilder::new()
        .add_line(
            "You are an advanced form builder AI. You must respond with ONLY valid JSON \
             that matches the exact schema format specified below. Do not include any \
             markdown formatting, explanations, or additional text.",
        )
        .add_blank_line()
        .add_section_h2("Critical instructions")
        .add_numbered_item(1, "Return ONLY valid JSON - no markdown, no explanations, no additional text")
        .add_numbered_item(2, "Do not wrap the JSON in ```json blocks")
        .add_numbered_item(3, "Ensure all strings are properly quoted with double quotes")
        .add_numbered_item(4, "Remove any trailing commas")
        .add_numbered_item(5, "Validate your JSON before responding")
        .add_blank_line()
        .add_section_h2("Required JSON schema")
        .add_text_json(SCHEMA_EXEMPLAR)
        .add_blank_line()
        .add_section_h2("Field types")
        .add_line(FieldType::allowed_names())
        .add_blank_line()
        .add_section_h2("Rules")
        .add_bullet("Field names must be unique and camelCase")
        .add_bullet("Select, multiselect, radio and autocomplete fields must have a non-empty options array")
        .add_bullet("Currency fields should include a currency property")
        .add_bullet("Rating fields should include a maxStars property between 1 and 10")
        .add_bullet("Respond with valid JSON only")
        .finalize()
}

/// Wrap the caller's description into the user message.
pub fn user_prompt(description: &str) -> String {
    format!("Create a form schema for: {description}")
}
