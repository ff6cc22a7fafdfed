use formgen_core::model::{Model, OpenAiModel};

pub const GPT4: &str = "gpt-4";
pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";

pub(crate) fn map_model(model: &Model) -> &'static str {
    match model {
        Model::Custom(custom) => custom,
        Model::OpenAi(OpenAiModel::Gpt4) => GPT4,
        Model::OpenAi(OpenAiModel::Gpt4o) => GPT4_O,
        Model::OpenAi(OpenAiModel::Gpt4oMini) => GPT4_O_MINI,
    }
}
