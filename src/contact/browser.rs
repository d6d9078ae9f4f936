//! Browser-backed implementations of the contact workflow seams.
//!
//! Outside a hydrated build there is no window; navigation reports an
//! error and acknowledgements go to the log.

use leptos::prelude::*;
use url::Url;

use super::coordinator::{FormStore, Notifier};
use super::mailto::{FallbackError, MailClient};
use super::{ContactField, ContactSubmission};

/// Contact form state held in reactive signals
#[derive(Debug, Clone, Copy)]
pub struct SignalForm {
    pub submission: RwSignal<ContactSubmission>,
    pub in_flight: RwSignal<bool>,
}

impl SignalForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            submission: RwSignal::new(ContactSubmission::default()),
            in_flight: RwSignal::new(false),
        }
    }

    /// Replaces one field, reading the rest from the current state
    pub fn update_field(&self, field: ContactField, value: String) {
        self.submission
            .update(|current| *current = current.with_field(field, value));
    }

    #[must_use]
    pub fn field(&self, field: ContactField) -> String {
        self.submission.with(|s| s.get(field).to_string())
    }
}

impl Default for SignalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore for SignalForm {
    fn snapshot(&self) -> ContactSubmission {
        self.submission.get_untracked()
    }

    fn reset(&self) {
        self.submission.set(ContactSubmission::default());
    }

    fn in_flight(&self) -> bool {
        self.in_flight.get_untracked()
    }

    fn set_in_flight(&self, in_flight: bool) {
        self.in_flight.set(in_flight);
    }
}

/// Opens `mailto:` links by navigating the current window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMailClient;

impl MailClient for BrowserMailClient {
    #[cfg(feature = "hydrate")]
    fn open(&self, uri: &Url) -> Result<(), FallbackError> {
        let window =
            web_sys::window().ok_or_else(|| FallbackError::Navigation("no window".to_string()))?;
        window
            .location()
            .set_href(uri.as_str())
            .map_err(|e| FallbackError::Navigation(format!("{e:?}")))
    }

    #[cfg(not(feature = "hydrate"))]
    fn open(&self, uri: &Url) -> Result<(), FallbackError> {
        tracing::debug!(%uri, "no browser to open mail client");
        Err(FallbackError::Navigation("no window".to_string()))
    }
}

/// Shows acknowledgements with `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn acknowledge(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.alert_with_message(message).is_ok() {
                    return;
                }
            }
        }

        tracing::info!(message, "acknowledgement");
    }
}
