use crate::error::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use uuid::Uuid;

const GEMINI_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
const FALLBACK_IMAGE: &str = "/static/images/fallback/cosmic_default.webp";

/// Generates scenario illustrations through Gemini and stores them under the
/// static directory. Image generation is decorative: every failure path
/// resolves to the shared fallback URL and never propagates upward.
#[derive(Clone)]
pub struct ImageService {
    client: Client,
    api_key: Option<String>,
    enabled: bool,
    static_dir: String,
    base_url: String,
    timeout: Duration,
}

impl ImageService {
    pub fn new(
        api_key: Option<String>,
        client: Client,
        enabled: bool,
        static_dir: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            api_key,
            enabled,
            static_dir,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn fallback_url(&self) -> String {
        format!("{}{}", self.base_url, FALLBACK_IMAGE)
    }

    /// Returns a URL for an image illustrating the scenario. Disabled service,
    /// missing key, API failure and undecodable payloads all yield the
    /// fallback URL.
    pub async fn generate_context_image(&self, scenario_description: &str) -> String {
        if !self.enabled {
            return self.fallback_url();
        }
        let Some(api_key) = &self.api_key else {
            tracing::warn!("Image generation enabled but GEMINI_API_KEY is not set");
            return self.fallback_url();
        };

        match self.request_image(api_key, scenario_description).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Image generation failed, using fallback: {:?}", e);
                self.fallback_url()
            }
        }
    }

    async fn request_image(&self, api_key: &str, scenario_description: &str) -> Result<String> {
        let prompt = format!(
            "Create a detailed, vibrant digital image for the following science fiction scenario:\n\n\
             {scenario_description}\n\n\
             Style: high-quality sci-fi illustration, futuristic aesthetic, vibrant colors, cosmic atmosphere.\n\
             Format: visually striking, readable as a context image, no overlaid text."
        );

        let payload = serde_json::json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"]
            }
        });

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            GEMINI_MODEL, api_key
        );

        let res = self
            .client
            .post(&url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Gemini API Error {}: {}", status, text).into());
        }

        let body: JsonValue = res.json().await?;
        let parts = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| anyhow::anyhow!("No content parts in Gemini response"))?;

        for part in parts {
            let Some(inline) = part.get("inlineData").or_else(|| part.get("inline_data")) else {
                continue;
            };
            let Some(data) = inline.get("data").and_then(|d| d.as_str()) else {
                continue;
            };
            let mime_type = inline
                .get("mimeType")
                .and_then(|m| m.as_str())
                .unwrap_or("image/png");
            let bytes = BASE64
                .decode(data)
                .map_err(|e| anyhow::anyhow!("Invalid base64 image data: {}", e))?;
            return self.save_image(&bytes, mime_type).await;
        }

        Err(anyhow::anyhow!("No image found in Gemini response").into())
    }

    async fn save_image(&self, bytes: &[u8], mime_type: &str) -> Result<String> {
        let extension = match mime_type {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        };
        let filename = format!("scenario_{}.{}", Uuid::new_v4().simple(), extension);

        let dir = Path::new(&self.static_dir).join("images").join("generated");
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join(&filename), bytes).await?;

        Ok(format!(
            "{}/static/images/generated/{}",
            self.base_url, filename
        ))
    }
}
