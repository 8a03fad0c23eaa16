use std::time::Duration;

use scan_logging::{input_preview, scan_debug, scan_warn, PREVIEW_CHARS};
use shield_core::{ScanMode, ScanOutcome, ScanPayload, ScanResult};
use url::Url;

use crate::{FailureKind, ScanError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_PREFIX: &str = "/api";
const ANALYZE_TEXT_PATH: &str = "analyze-text";
const ANALYZE_URL_PATH: &str = "analyze-url";
const HEALTH_PATH: &str = "health";

#[derive(Debug, Clone)]
pub struct ScannerSettings {
    pub base_url: String,
    pub api_prefix: String,
    pub connect_timeout: Duration,
    /// Whole-request limit. `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ScannerSettings {
    /// The analyze operation for `mode`.
    pub fn endpoint(&self, mode: ScanMode) -> Result<Url, ScanError> {
        let path = match mode {
            ScanMode::Text => ANALYZE_TEXT_PATH,
            ScanMode::Url => ANALYZE_URL_PATH,
        };
        join_url(&self.base_url, &[&self.api_prefix, path])
    }

    /// Health check lives at the service root, outside the API prefix.
    pub fn health_url(&self) -> Result<Url, ScanError> {
        join_url(&self.base_url, &[HEALTH_PATH])
    }
}

fn join_url(base: &str, segments: &[&str]) -> Result<Url, ScanError> {
    let mut joined = base.trim().trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            joined.push('/');
            joined.push_str(segment);
        }
    }
    Url::parse(&joined)
        .map_err(|err| ScanError::new(FailureKind::InvalidEndpoint, format!("{joined}: {err}")))
}

/// Remote scoring collaborator.
#[async_trait::async_trait]
pub trait Scanner: Send + Sync {
    /// Performs exactly one call to the analyze operation matching the payload's mode.
    async fn scan(&self, payload: &ScanPayload) -> Result<ScanResult, ScanError>;

    async fn health(&self) -> Result<(), ScanError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScanner {
    settings: ScannerSettings,
}

impl ReqwestScanner {
    pub fn new(settings: ScannerSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScanError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.settings.connect_timeout);
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ScanError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Scanner for ReqwestScanner {
    async fn scan(&self, payload: &ScanPayload) -> Result<ScanResult, ScanError> {
        let endpoint = self.settings.endpoint(payload.mode())?;
        let client = self.build_client()?;
        scan_debug!(
            "POST {} mode={} input={}",
            endpoint,
            payload.mode(),
            input_preview(payload.input(), PREVIEW_CHARS)
        );

        let response = client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice::<ScanResult>(&body)
            .map_err(|err| ScanError::new(FailureKind::Decode, err.to_string()))
    }

    async fn health(&self) -> Result<(), ScanError> {
        let url = self.settings.health_url()?;
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ScanError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ))
        }
    }
}

/// Runs one scan and folds every error into [`ScanOutcome::Failure`].
pub async fn execute(scanner: &dyn Scanner, payload: &ScanPayload) -> ScanOutcome {
    match scanner.scan(payload).await {
        Ok(result) => ScanOutcome::Success(result),
        Err(err) => {
            scan_warn!("{} scan failed: {}", payload.mode(), err);
            ScanOutcome::Failure(err.user_message())
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ScanError {
    if err.is_timeout() {
        return ScanError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ScanError::new(FailureKind::Decode, err.to_string());
    }
    ScanError::new(FailureKind::Network, err.to_string())
}
