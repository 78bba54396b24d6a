use crate::service::VisionError;

pub const ENDPOINT_ENV: &str = "COGNITIVE_SERVICES_ENDPOINT";
pub const API_KEY_ENV: &str = "COMPUTER_VISION_KEY";

/// Connection settings for the remote vision service.
#[derive(Clone)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl VisionConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads `COGNITIVE_SERVICES_ENDPOINT` and `COMPUTER_VISION_KEY`.
    pub fn from_env() -> Result<Self, VisionError> {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .map_err(|_| VisionError::Config(format!("{ENDPOINT_ENV} is not set")))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| VisionError::Config(format!("{API_KEY_ENV} is not set")))?;
        let config = Self::new(endpoint, api_key);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VisionError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(VisionError::Config("endpoint is empty".into()));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(VisionError::Config(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(VisionError::Config("api key is empty".into()));
        }
        Ok(())
    }

    /// Endpoint without trailing slashes, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim().trim_end_matches('/')
    }
}

impl std::fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
