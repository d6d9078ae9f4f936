//! Fallback delivery: a pre-filled `mailto:` link opened in the visitor's
//! mail client.

use url::Url;

use super::delivery::phone_or_placeholder;
use super::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("invalid mailto link: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("not a single mail address: {0:?}")]
    InvalidDestination(String),

    #[error("could not open mail client: {0}")]
    Navigation(String),
}

/// Something that can hand a `mailto:` link to the user's mail client.
///
/// Delivery cannot be confirmed; `Ok` only means the navigation happened.
pub trait MailClient {
    /// # Errors
    ///
    /// Returns an error when the link could not be handed over.
    fn open(&self, uri: &Url) -> Result<(), FallbackError>;
}

#[must_use]
pub fn subject(submission: &ContactSubmission) -> String {
    format!("Portfolio Contact: {}", submission.full_name())
}

#[must_use]
pub fn body(submission: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        submission.full_name(),
        submission.email,
        phone_or_placeholder(&submission.phone),
        submission.message
    )
}

/// A bare `local@domain` address, with nothing that would end the path or
/// start extra headers.
fn is_plain_address(destination: &str) -> bool {
    let Some((local, domain)) = destination.split_once('@') else {
        return false;
    };
    let forbidden =
        |c: char| c.is_whitespace() || c.is_control() || matches!(c, '?' | '&' | '#' | '%' | ',' | ';' | '@');

    !local.is_empty()
        && !domain.is_empty()
        && !local.contains(forbidden)
        && !domain.contains(forbidden)
}

/// Builds `mailto:<destination>?subject=..&body=..` with both parameters
/// percent-encoded.
///
/// # Errors
///
/// Returns [`FallbackError::InvalidDestination`] unless `destination` is one
/// plain address, and [`FallbackError::InvalidUri`] if the result does not parse.
pub fn build_mailto(
    submission: &ContactSubmission,
    destination: &str,
) -> Result<Url, FallbackError> {
    if !is_plain_address(destination) {
        return Err(FallbackError::InvalidDestination(destination.to_string()));
    }

    let raw = format!(
        "mailto:{}?subject={}&body={}",
        destination,
        urlencoding::encode(&subject(submission)),
        urlencoding::encode(&body(submission))
    );

    Ok(Url::parse(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            message: "Hi".to_string(),
        }
    }

    fn query_value(uri: &Url, key: &str) -> Option<String> {
        uri.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn encodes_subject() {
        let uri = build_mailto(&jane(), "owner@example.com").unwrap();

        assert!(uri.as_str().starts_with("mailto:owner@example.com?"));
        assert!(uri
            .as_str()
            .contains("subject=Portfolio%20Contact%3A%20Jane%20Doe"));
    }

    #[test]
    fn body_lists_every_field() {
        let uri = build_mailto(&jane(), "owner@example.com").unwrap();
        let body = query_value(&uri, "body").unwrap();

        assert!(body.contains("Name: Jane Doe"));
        assert!(body.contains("Email: jane@x.com"));
        assert!(body.contains("Phone: Not provided"));
        assert!(body.ends_with("Message:\nHi"));
    }

    #[test]
    fn reserved_characters_in_message_stay_inside_body() {
        let mut submission = jane();
        submission.message = "a&b=c?d #1 100%".to_string();

        let uri = build_mailto(&submission, "owner@example.com").unwrap();

        assert_eq!(uri.query_pairs().count(), 2);
        let body = query_value(&uri, "body").unwrap();
        assert!(body.ends_with("a&b=c?d #1 100%"));
    }

    #[test]
    fn rejects_empty_destination() {
        let err = build_mailto(&jane(), "").unwrap_err();
        assert!(matches!(err, FallbackError::InvalidDestination(_)));
    }

    #[test]
    fn rejects_destination_that_is_not_one_address() {
        for destination in [
            "a b@x.com",
            "x@y.com?cc=evil@z.com",
            "x@y.com&bcc=evil@z.com",
            "x@y.com,evil@z.com",
            "x@y@z.com",
            "owner",
            "@example.com",
            "owner@",
        ] {
            let err = build_mailto(&jane(), destination).unwrap_err();
            assert!(
                matches!(err, FallbackError::InvalidDestination(_)),
                "{destination} was accepted"
            );
        }
    }

    #[test]
    fn destination_ends_at_the_query() {
        let uri = build_mailto(&jane(), "owner@example.com").unwrap();

        assert_eq!(uri.path(), "owner@example.com");
        let keys: Vec<String> = uri.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["subject", "body"]);
    }
}
