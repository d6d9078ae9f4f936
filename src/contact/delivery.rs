use async_trait::async_trait;
use serde::Serialize;

use super::config::{EmailJsConfig, EMAILJS_API_BASE};
use super::ContactSubmission;

/// Template variables sent to the email service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    #[must_use]
    pub fn new(submission: &ContactSubmission, destination: &str) -> Self {
        Self {
            from_name: submission.full_name(),
            from_email: submission.email.clone(),
            phone: phone_or_placeholder(&submission.phone).to_string(),
            message: submission.message.clone(),
            to_email: destination.to_string(),
        }
    }
}

pub(crate) fn phone_or_placeholder(phone: &str) -> &str {
    let phone = phone.trim();
    if phone.is_empty() {
        "Not provided"
    } else {
        phone
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email service answered with status {0}")]
    UnexpectedStatus(u16),

    #[error("email service credentials are not configured")]
    NotConfigured,

    #[error("{0}")]
    Other(String),
}

/// A remote capability that sends a templated email.
///
/// Implementations return the HTTP status the service answered with; the
/// caller decides what counts as delivered.
#[async_trait(?Send)]
pub trait EmailSender {
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns an error when no request could be made or no response arrived.
    async fn send(&self, params: &TemplateParams) -> Result<u16, DeliveryError>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsClient {
    client: reqwest::Client,
    base_url: String,
    config: EmailJsConfig,
}

impl EmailJsClient {
    #[must_use]
    pub fn new(config: EmailJsConfig) -> Self {
        Self::with_base_url(config, EMAILJS_API_BASE)
    }

    #[must_use]
    pub fn with_base_url(config: EmailJsConfig, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            config,
        }
    }

    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(EmailJsConfig::from_build_env())
    }
}

#[async_trait(?Send)]
impl EmailSender for EmailJsClient {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    #[tracing::instrument(skip(self, params), fields(service_id = %self.config.service_id))]
    async fn send(&self, params: &TemplateParams) -> Result<u16, DeliveryError> {
        if self.config.is_placeholder() {
            return Err(DeliveryError::NotConfigured);
        }

        let url = format!("{}/api/v1.0/email/send", self.base_url.trim_end_matches('/'));

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!(status, "email service responded");
        Ok(status)
    }
}
