use serde::{Deserialize, Serialize};

/// Address every contact message is delivered to
pub const CONTACT_ADDRESS: &str = match option_env!("PORTFOLIO_CONTACT_EMAIL") {
    Some(address) => address,
    None => "hello@example.com",
};

pub const EMAILJS_API_BASE: &str = "https://api.emailjs.com";

/// EmailJS credentials, baked in at build time.
///
/// Supports the following env vars:
/// - PORTFOLIO_EMAILJS_SERVICE_ID
/// - PORTFOLIO_EMAILJS_TEMPLATE_ID
/// - PORTFOLIO_EMAILJS_PUBLIC_KEY
///
/// Unset values fall back to placeholder strings. A client holding any
/// placeholder refuses to send, so the form takes the mail client route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or("your_service_id")
                .to_string(),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or("your_template_id")
                .to_string(),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or("your_public_key")
                .to_string(),
        }
    }

    /// True while any value is still the placeholder default
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.service_id.starts_with("your_")
            || self.template_id.starts_with("your_")
            || self.public_key.starts_with("your_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_detection() {
        let config = EmailJsConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "your_public_key".to_string(),
        };
        assert!(config.is_placeholder());

        let config = EmailJsConfig {
            public_key: "pk_123".to_string(),
            ..config
        };
        assert!(!config.is_placeholder());
    }

    #[test]
    fn contact_address_is_set() {
        assert!(CONTACT_ADDRESS.contains('@'));
    }
}
