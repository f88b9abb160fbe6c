//! Contact form submission record.
//!
//! The page has no backend: a submission is assembled, serialized for the
//! log, acknowledged with a toast and the form is reset. The only check is
//! that the form actually has the fields being read.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// Shown in place of an empty project title.
pub const PROJECT_TITLE_FALLBACK: &str = "Not specified";

/// Error returned by [`ContactSubmission::from_fields`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("contact form has no {0} field")]
    MissingField(&'static str),
}

/// Raw field values read from the form. `None` means the field element is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_title: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_title: String,
    pub message: String,
    /// ISO-8601 submission time supplied by the host clock.
    pub timestamp: String,
}

impl ContactSubmission {
    /// Build a submission from form values.
    ///
    /// Empty values are accepted as-is, except an empty or missing project
    /// title which becomes [`PROJECT_TITLE_FALLBACK`].
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingField`] if the name, email or message field is absent.
    pub fn from_fields(fields: ContactFields, timestamp: impl Into<String>) -> Result<Self, ContactError> {
        let name = fields.name.ok_or(ContactError::MissingField("name"))?;
        let email = fields.email.ok_or(ContactError::MissingField("email"))?;
        let message = fields.message.ok_or(ContactError::MissingField("message"))?;
        let project_title = fields
            .project_title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| PROJECT_TITLE_FALLBACK.to_owned());
        Ok(Self { name, email, project_title, message, timestamp: timestamp.into() })
    }

    /// Serialize for logging.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
