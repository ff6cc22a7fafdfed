//! # `formgen` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                 | What it provides                                                              |
//! |-----------------------|-------------------------------------------------------------------------------|
//! | **`formgen-core`**    | Schema data model, sanitizer, parser, validator, enricher, provider seam      |
//! | **`formgen-prompt`**  | Markdown prompt builder and the form-generation prompt pair                   |
//! | **`formgen-openai`**  | Thin HTTP client implementing `CompletionProvider` for OpenAI *v1* *(optional)*|
//!
//! On top of the re-exports it contributes the [`FormGenerator`]: the
//! orchestrator that turns one natural-language description into a validated,
//! enriched [`FormSchema`](formgen_core::schema::FormSchema), with bounded
//! retries against the completion backend.
//!
//! By default the `openai` Cargo feature is enabled so a single dependency
//! line is enough to access the whole stack:
//!
//! ```toml
//! [dependencies]
//! formgen = "0.1"
//! ```
//!
//! Disable default features to stay provider-agnostic (e.g. to plug in your
//! own `CompletionProvider` without pulling in `reqwest` and TLS).
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use formgen::FormGenerator;
//! use formgen::openai::OpenAiAdapterBuilder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OpenAiAdapterBuilder::new_from_env().build()?;
//!     let generator = FormGenerator::new(backend);
//!
//!     let schema = generator
//!         .generate("a contact form with name, email and a message box")
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&schema)?);
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/formgen/latest")]

pub mod generator;

pub use formgen_core::*;
pub use formgen_prompt as prompt;
pub use generator::{FormGenerator, Sleeper, TokioSleeper};

#[cfg(feature = "openai")]
pub use formgen_openai as openai;
