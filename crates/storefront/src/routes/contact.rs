//! Contact form route handler.
//!
//! Pure validation glue: submissions are acknowledged and logged, nothing
//! is persisted.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response for form submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn failure(message: &str) -> (StatusCode, Json<ContactResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ContactResponse {
            success: false,
            message: Some(message.to_string()),
        }),
    )
}

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Json(form): Json<ContactForm>) -> impl IntoResponse {
    let name = form.name.trim();
    let email = form.email.trim().to_lowercase();
    let message = form.message.trim();

    if !is_valid_name(name) {
        return failure("Please enter a valid name.");
    }
    if !is_valid_email(&email) {
        return failure("Please enter a valid email address.");
    }
    if message.chars().count() < 10 {
        return failure("Your message must be at least 10 characters.");
    }

    tracing::info!(name = %name, "Contact form received");
    (
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: Some("Thanks for your message. We will reply soon.".to_string()),
        }),
    )
}

/// A name is at least three characters, letters and spaces only.
fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= 3 && name.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// Structural email check: one `@` with a non-empty local part and a
/// dotted, non-empty domain. Nothing fancier is needed here.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.split_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_names() {
        assert!(is_valid_name("Ana María"));
        assert!(is_valid_name("Bob"));
        assert!(!is_valid_name("Al"));
        assert!(!is_valid_name("x99"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn validates_email_structure() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name+tag@domain.co.uk"));
        assert!(!is_valid_email("no-at-symbol"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }
}
