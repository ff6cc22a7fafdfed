//! Prompt construction for the **formgen** workspace: a fluent markdown
//! [`builder::PromptBuilder`] plus the fixed system/user pair in
//! [`form_prompt`].

pub mod builder;
pub mod form_prompt;
