//! Core of the **formgen** workspace: the schema data model and the pipeline
//! stages that turn unreliable model text into a validated, enriched
//! [`FormSchema`](schema::FormSchema).
//!
//! The stages compose linearly and each is independently testable:
//!
//! 1. [`sanitize`] — repair conversational/markdown wrapping and relaxed
//!    JSON syntax (total, never fails);
//! 2. [`parse`] — extract a candidate JSON value, or a
//!    [`ParseError`](error::ParseError);
//! 3. [`validate`] — accumulate field-indexed structural defects;
//! 4. [`enrich`] — fill cosmetic defaults on a valid schema.
//!
//! The [`provider`] module defines the seam to the external completion
//! service; the orchestrator that drives the whole chain lives in the
//! umbrella `formgen` crate.

pub mod enrich;
pub mod error;
pub mod model;
pub mod parse;
pub mod provider;
pub mod sanitize;
pub mod schema;
pub mod taxonomy;
pub mod validate;

pub use error::{CompletionError, GenerateError, ParseError, Result};
pub use schema::{FieldKind, FieldSpec, FieldValidation, FormSchema, MapStyle};
pub use taxonomy::FieldType;
