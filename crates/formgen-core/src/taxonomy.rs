//! The closed taxonomy of form-field types understood by the generator.
//!
//! The enum is fixed at compile time—the generation prompt, the validator and
//! the rendering contract all agree on exactly this set of tags, so a schema
//! that survives [`crate::validate::validate`] can never carry a type the
//! renderer does not know.
//!
//! # Adding a field type
//!
//! 1. Add a row to the `field_types!` table below (variant + wire name).
//! 2. Extend [`crate::schema::FieldKind`] if the new type carries
//!    type-specific attributes.
//! 3. The compiler will point at every match that needs updating.

macro_rules! field_types {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// One tag from the closed set of supported field types.
        ///
        /// Wire names are snake_case (`attach_image`, `read_only`, …) and are
        /// the exact strings the model is instructed to emit.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum FieldType {
            $($variant),*
        }

        impl FieldType {
            /// Every supported tag, in taxonomy order.
            pub const ALL: &'static [FieldType] = &[$(FieldType::$variant),*];

            /// The wire name of this tag.
            pub fn name(self) -> &'static str {
                match self {
                    $(FieldType::$variant => $name),*
                }
            }

            /// Look a tag up by its wire name.
            pub fn from_name(name: &str) -> Option<FieldType> {
                match name {
                    $($name => Some(FieldType::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

field_types! {
    // Basic text
    Data => "data",
    SmallText => "small_text",
    LongText => "long_text",
    Text => "text",
    Markdown => "markdown",
    Html => "html",
    Code => "code",
    // Numeric
    Int => "int",
    Float => "float",
    Currency => "currency",
    Percent => "percent",
    Rating => "rating",
    // Date & time
    Date => "date",
    Datetime => "datetime",
    Time => "time",
    Duration => "duration",
    // Relationships
    Link => "link",
    DynamicLink => "dynamic_link",
    Table => "table",
    TableMultiselect => "table_multiselect",
    // Choice
    Select => "select",
    Autocomplete => "autocomplete",
    Multiselect => "multiselect",
    Radio => "radio",
    Checkbox => "checkbox",
    // Files & media
    Attach => "attach",
    AttachImage => "attach_image",
    Image => "image",
    Signature => "signature",
    Barcode => "barcode",
    // Visual / layout
    Color => "color",
    Heading => "heading",
    Button => "button",
    ReadOnly => "read_only",
    Icon => "icon",
    // Specialized
    Geolocation => "geolocation",
    Json => "json",
    Password => "password",
    Phone => "phone",
    Email => "email",
    Url => "url",
    // Additional web types
    Number => "number",
    Range => "range",
    Search => "search",
    Switch => "switch",
    Tags => "tags",
    File => "file",
}

impl FieldType {
    /// Choice-family tags that must carry a non-empty `options` array.
    pub fn requires_options(self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Multiselect | FieldType::Radio | FieldType::Autocomplete
        )
    }

    /// Link-family tags that should name a `targetDocType` for a usable UI.
    pub fn is_link(self) -> bool {
        matches!(self, FieldType::Link | FieldType::DynamicLink)
    }

    /// All wire names joined with `", "`, used in validator messages.
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &t in FieldType::ALL {
            assert_eq!(FieldType::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(FieldType::from_name("foo"), None);
        assert_eq!(FieldType::from_name("Select"), None);
    }

    #[test]
    fn choice_family_requires_options() {
        assert!(FieldType::Select.requires_options());
        assert!(FieldType::Multiselect.requires_options());
        assert!(FieldType::Radio.requires_options());
        assert!(FieldType::Autocomplete.requires_options());
        assert!(!FieldType::Checkbox.requires_options());
        assert!(!FieldType::Tags.requires_options());
    }

    #[test]
    fn allowed_names_lists_the_whole_taxonomy() {
        let listed = FieldType::allowed_names();
        assert!(listed.starts_with("data, small_text"));
        assert!(listed.ends_with("tags, file"));
        assert_eq!(listed.split(", ").count(), FieldType::ALL.len());
    }
}
