//! Deterministic default-filling for an already-valid schema.
//!
//! The model frequently omits low-stakes cosmetic attributes. Every such
//! default lives here, so the rendering layer never needs type-specific
//! fallback logic. Enrichment fires only on *absence*—it never overrides an
//! explicit value (out-of-range values were already rejected by validation)—
//! which makes the function idempotent.

use crate::schema::{FieldKind, FormSchema, MapStyle};

/// Title used when the model supplies none.
pub const DEFAULT_TITLE: &str = "Generated Form";
/// Submit-button label used when the model supplies none.
pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
/// Reset-button label used when the model supplies none.
pub const DEFAULT_RESET_TEXT: &str = "Reset";
/// ISO currency code applied to `currency` fields without one.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Star count applied to `rating` fields without one.
pub const DEFAULT_MAX_STARS: u32 = 5;
/// Accepted extensions applied to `attach_image` fields without any.
pub const DEFAULT_IMAGE_ACCEPT: &str = ".jpg,.jpeg,.png,.gif,.webp";

/// Fill schema- and field-level defaults on a validated schema.
pub fn enrich(mut schema: FormSchema) -> FormSchema {
    if schema.title.is_none() {
        schema.title = Some(DEFAULT_TITLE.to_string());
    }
    if schema.submit_text.is_none() {
        schema.submit_text = Some(DEFAULT_SUBMIT_TEXT.to_string());
    }
    if schema.reset_text.is_none() {
        schema.reset_text = Some(DEFAULT_RESET_TEXT.to_string());
    }

    for field in &mut schema.fields {
        match &mut field.kind {
            FieldKind::Currency { currency, .. } if currency.is_none() => {
                *currency = Some(DEFAULT_CURRENCY.to_string());
            }
            FieldKind::Rating { max_stars, .. } if max_stars.is_none() => {
                *max_stars = Some(DEFAULT_MAX_STARS);
            }
            FieldKind::AttachImage { accept } if accept.is_none() => {
                *accept = Some(DEFAULT_IMAGE_ACCEPT.to_string());
            }
            FieldKind::Geolocation { map_type } if map_type.is_none() => {
                *map_type = Some(MapStyle::Roadmap);
            }
            _ => {}
        }
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    fn bare_schema(kind: FieldKind) -> FormSchema {
        FormSchema {
            title: None,
            description: None,
            fields: vec![FieldSpec::new("f", "F", kind)],
            submit_text: None,
            reset_text: None,
        }
    }

    #[test]
    fn fills_schema_level_placeholders() {
        let enriched = enrich(bare_schema(FieldKind::Text));
        assert_eq!(enriched.title.as_deref(), Some(DEFAULT_TITLE));
        assert_eq!(enriched.submit_text.as_deref(), Some(DEFAULT_SUBMIT_TEXT));
        assert_eq!(enriched.reset_text.as_deref(), Some(DEFAULT_RESET_TEXT));
    }

    #[test]
    fn fills_type_specific_defaults_only_when_absent() {
        let enriched = enrich(bare_schema(FieldKind::Rating {
            max_stars: None,
            allow_half_rating: None,
        }));
        assert_eq!(
            enriched.fields[0].kind,
            FieldKind::Rating {
                max_stars: Some(DEFAULT_MAX_STARS),
                allow_half_rating: None,
            }
        );

        let explicit = enrich(bare_schema(FieldKind::Rating {
            max_stars: Some(3),
            allow_half_rating: None,
        }));
        assert_eq!(
            explicit.fields[0].kind,
            FieldKind::Rating {
                max_stars: Some(3),
                allow_half_rating: None,
            }
        );
    }

    #[test]
    fn fills_currency_image_and_map_defaults() {
        let enriched = enrich(bare_schema(FieldKind::Currency {
            currency: None,
            precision: Some(2),
        }));
        assert_eq!(
            enriched.fields[0].kind,
            FieldKind::Currency {
                currency: Some(DEFAULT_CURRENCY.into()),
                precision: Some(2),
            }
        );

        let enriched = enrich(bare_schema(FieldKind::AttachImage { accept: None }));
        assert_eq!(
            enriched.fields[0].kind,
            FieldKind::AttachImage {
                accept: Some(DEFAULT_IMAGE_ACCEPT.into())
            }
        );

        let enriched = enrich(bare_schema(FieldKind::Geolocation { map_type: None }));
        assert_eq!(
            enriched.fields[0].kind,
            FieldKind::Geolocation {
                map_type: Some(MapStyle::Roadmap)
            }
        );
    }

    #[test]
    fn enrichment_is_idempotent() {
        let schema = bare_schema(FieldKind::Rating {
            max_stars: None,
            allow_half_rating: None,
        });
        let once = enrich(schema);
        let twice = enrich(once.clone());
        assert_eq!(once, twice);
    }
}
