use color_eyre::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

mod error;
pub use error::GeminiApiError;

use crate::MODEL;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestBody {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestPart {
    pub text: String,
}

impl RequestBody {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// base64 encoded image bytes
    pub data: String,
}

impl GenerateResponse {
    /// All parts across all candidates, in response order
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
    }
}

/// Sends a single generateContent request and returns the parsed response
pub async fn generate_content(
    prompt: &str,
    api_key: &str,
    client: &Client,
) -> Result<GenerateResponse> {
    let resp = client
        .post(format!("{API_BASE}/{MODEL}:generateContent"))
        .query(&[("key", api_key)])
        .json(&RequestBody::from_prompt(prompt))
        .send()
        .await?;

    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        Err(GeminiApiError::from_response(status, &text))?;
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    #[test]
    fn request_serialization() {
        let body = RequestBody::from_prompt("A snowy mountain");

        let expect =
            expect![[r#"{"contents":[{"parts":[{"text":"A snowy mountain"}]}]}"#]];
        expect.assert_eq(&serde_json::to_string(&body).unwrap());
    }

    #[test]
    fn response_with_text_and_image_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your image"},
                        {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                    ]
                }
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        let parts: Vec<_> = response.parts().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("Here is your image"));
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aGVsbG8=");
    }

    #[test]
    fn response_without_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.parts().count(), 0);
    }

    #[test]
    fn response_candidate_without_content() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.parts().count(), 0);
    }
}
