use formgen::FormGenerator;
use formgen::openai::OpenAiAdapterBuilder;

/// # Contact form – description in, schema out
///
/// This example is the "smallest viable program" that
///
/// 1. **Builds** an OpenAI backend (`OpenAiAdapter`).
/// 2. **Creates** a generator around it (defaults: `gpt-4`, three attempts,
///    linear backoff on rate limits).
/// 3. **Asks** for a form schema from a one-line description.
/// 4. **Prints** the validated, enriched schema as pretty JSON.
///
/// ## How to run
///
/// ```bash
/// export OPENAI_API_KEY=sk-…          # your key
/// cargo run -p formgen --example generate_contact_form
/// ```
///
/// You should see output similar to:
///
/// ```text
/// {
///   "title": "Contact Us",
///   "fields": [
///     { "name": "full_name", "label": "Full Name", "type": "text", "required": true },
///     …
///   ],
///   "submitText": "Submit",
///   "resetText": "Reset"
/// }
/// ```
///
/// The response already carries the enrichment defaults (button labels,
/// currency code, star counts, …), so it can be fed straight into a renderer.
////////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Build the backend from the environment (needs OPENAI_API_KEY).
    let backend = OpenAiAdapterBuilder::new_from_env().build()?;

    // 2. Wrap it inside the generator.
    let generator = FormGenerator::new(backend);

    // 3. Describe the form in plain language and await the typed schema.
    let schema = generator
        .generate("a contact form with name, email, a topic dropdown and a message box")
        .await?;

    // 4. Done – print the renderer-ready schema.
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
