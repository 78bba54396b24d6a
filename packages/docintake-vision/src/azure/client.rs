use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::analysis::AnalyzedImage;
use crate::config::VisionConfig;
use crate::service::{OcrWord, VisionError, VisionService};

use super::wire;

const API_PATH: &str = "vision/v3.2";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Features requested on every scene analysis call.
const VISUAL_FEATURES: &str = "Categories,Description,Faces,ImageType,Tags,Adult,Color,Brands,Objects";

/// Client for a Computer Vision REST endpoint.
///
/// Build it once per process and share it; the underlying connection pool is reused
/// across calls.
pub struct AzureVisionClient {
    http: reqwest::Client,
    config: VisionConfig,
}

impl AzureVisionClient {
    pub fn new(config: VisionConfig) -> Result<Self, VisionError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Uses a caller-provided `reqwest::Client`, e.g. one carrying timeouts or a proxy.
    pub fn with_http_client(
        config: VisionConfig,
        http: reqwest::Client,
    ) -> Result<Self, VisionError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    fn url(&self, operation: &str) -> String {
        format!("{}/{}/{}", self.config.base_url(), API_PATH, operation)
    }

    async fn post_image(
        &self,
        operation: &str,
        query: &[(&str, &str)],
        image: &[u8],
    ) -> Result<String, VisionError> {
        let response = self
            .http
            .post(self.url(operation))
            .query(query)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(VisionError::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!(operation, bytes = body.len(), "vision service responded");
        Ok(body)
    }
}

#[async_trait]
impl VisionService for AzureVisionClient {
    #[instrument(skip(self, image), fields(image_len = image.len()))]
    async fn analyze_scene(&self, image: &[u8]) -> Result<AnalyzedImage, VisionError> {
        let body = self
            .post_image("analyze", &[("visualFeatures", VISUAL_FEATURES)], image)
            .await?;
        wire::parse_analysis(&body)
    }

    #[instrument(skip(self, image), fields(image_len = image.len()))]
    async fn recognize_text(&self, image: &[u8]) -> Result<Vec<OcrWord>, VisionError> {
        let body = self
            .post_image(
                "ocr",
                &[("language", "unk"), ("detectOrientation", "true")],
                image,
            )
            .await?;
        wire::parse_ocr(&body)
    }
}
