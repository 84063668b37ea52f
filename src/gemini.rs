use color_eyre::Result;
use log::debug;

pub mod gemini_api;
pub use gemini_api::GeminiApiError;

use gemini_api::GenerateResponse;

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    client: reqwest::Client,
}

impl Gemini {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate_image(&self, prompt: &str) -> Result<GenerateResponse> {
        let response = gemini_api::generate_content(prompt, &self.api_key, &self.client).await?;
        debug!("Generate response: {response:#?}");
        Ok(response)
    }
}
