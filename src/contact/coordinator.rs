use url::Url;

use super::delivery::{DeliveryError, EmailSender, TemplateParams};
use super::mailto::{build_mailto, FallbackError, MailClient};
use super::ContactSubmission;

/// Owner of the contact form values and the in-flight flag
pub trait FormStore {
    fn snapshot(&self) -> ContactSubmission;

    /// Clears every field back to an empty string
    fn reset(&self);

    fn in_flight(&self) -> bool;

    fn set_in_flight(&self, in_flight: bool);
}

/// A blocking acknowledgement shown to the visitor
pub trait Notifier {
    fn acknowledge(&self, message: &str);
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The email service accepted the message
    Delivered,
    /// The email service failed and the visitor's mail client was opened instead
    FellBackToMailClient { uri: String },
    /// Neither path worked; the form keeps its values
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
}

#[must_use]
pub fn success_message(first_name: &str, destination: &str) -> String {
    format!(
        "Thank you, {first_name}! Your message has been sent to {destination}. I'll get back to you soon."
    )
}

#[must_use]
pub fn fallback_message() -> String {
    "Your email client has been opened with your message pre-filled. \
     Please press send there to complete your request."
        .to_string()
}

#[must_use]
pub fn failure_message(destination: &str) -> String {
    format!("Sorry, something went wrong sending your message. Please email me directly at {destination}.")
}

/// Clears the in-flight flag when dropped, so every exit path re-enables
/// the submit control.
struct InFlightGuard<'a, F: FormStore> {
    form: &'a F,
}

impl<'a, F: FormStore> InFlightGuard<'a, F> {
    fn acquire(form: &'a F) -> Result<Self, SubmitError> {
        if form.in_flight() {
            return Err(SubmitError::InFlight);
        }
        form.set_in_flight(true);
        Ok(Self { form })
    }
}

impl<F: FormStore> Drop for InFlightGuard<'_, F> {
    fn drop(&mut self) {
        self.form.set_in_flight(false);
    }
}

pub struct SubmissionCoordinator<S, M, N> {
    sender: S,
    mail_client: M,
    notifier: N,
    destination: String,
}

impl<S, M, N> SubmissionCoordinator<S, M, N>
where
    S: EmailSender,
    M: MailClient,
    N: Notifier,
{
    #[must_use]
    pub fn new(sender: S, mail_client: M, notifier: N, destination: impl Into<String>) -> Self {
        Self {
            sender,
            mail_client,
            notifier,
            destination: destination.into(),
        }
    }

    /// Runs one submission to a terminal outcome.
    ///
    /// The form is cleared after delivery or fallback and kept as-is when
    /// both paths fail.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] without side effects while another
    /// submission on `form` is running.
    #[tracing::instrument(skip_all, fields(sender = self.sender.name()))]
    pub async fn submit<F: FormStore>(&self, form: &F) -> Result<SubmissionOutcome, SubmitError> {
        let _guard = InFlightGuard::acquire(form)?;
        let submission = form.snapshot();

        let outcome = self.deliver(&submission).await;

        match &outcome {
            SubmissionOutcome::Delivered | SubmissionOutcome::FellBackToMailClient { .. } => {
                form.reset();
            }
            SubmissionOutcome::Failed { .. } => {}
        }

        Ok(outcome)
    }

    async fn deliver(&self, submission: &ContactSubmission) -> SubmissionOutcome {
        match self.send_primary(submission).await {
            Ok(()) => {
                tracing::info!("message delivered");
                self.notifier
                    .acknowledge(&success_message(&submission.first_name, &self.destination));
                return SubmissionOutcome::Delivered;
            }
            Err(e) => {
                tracing::warn!(error = %e, "primary delivery failed, falling back to mail client");
            }
        }

        match self.open_fallback(submission) {
            Ok(uri) => {
                tracing::info!("opened mail client");
                self.notifier.acknowledge(&fallback_message());
                SubmissionOutcome::FellBackToMailClient {
                    uri: uri.to_string(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "fallback delivery failed");
                self.notifier.acknowledge(&failure_message(&self.destination));
                SubmissionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn send_primary(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        let params = TemplateParams::new(submission, &self.destination);
        match self.sender.send(&params).await? {
            200 => Ok(()),
            status => Err(DeliveryError::UnexpectedStatus(status)),
        }
    }

    fn open_fallback(&self, submission: &ContactSubmission) -> Result<Url, FallbackError> {
        let uri = build_mailto(submission, &self.destination)?;
        self.mail_client.open(&uri)?;
        Ok(uri)
    }
}
