use serde::{Deserialize, Serialize};

fn default_model_name() -> String {
    "gpt-4o-mini".into()
}

fn default_provider() -> String {
    "openai_chat_completion".into()
}

#[derive(Debug, Deserialize)]
pub struct CaptionRequest {
    pub input_text: String,
    pub topic: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub input_text: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub input_text: String,
    pub target_language: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

#[derive(Debug, Serialize)]
pub struct TaskOutput {
    pub output_text: String,
}
