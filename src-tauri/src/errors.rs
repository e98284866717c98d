//! Error taxonomy for portal actions.
//!
//! Every variant is handled at the point of the user action and rendered as a
//! dismissible notice; none of them ends the session.

use thiserror::Error;

use crate::views::View;

pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    /// A required form field was left empty.
    #[error("Please enter at least {0}.")]
    Validation(String),

    /// A broadcast was requested with nobody to send it to.
    #[error("No neighbors to alert.")]
    NoRecipients,

    #[error("Local storage unavailable for '{key}': {reason}")]
    StorageUnavailable { key: String, reason: String },

    #[error("Neighbor {0} not found")]
    NeighborNotFound(i64),

    #[error("Unknown view path: {0}")]
    UnknownView(String),

    #[error("{0} view is not active")]
    ViewInactive(View),
}

impl PortalError {
    /// Builds a validation error naming the missing fields, e.g. "Name and Phone".
    pub fn missing_fields(fields: &[&str]) -> Self {
        let joined = match fields {
            [] => String::from("the required fields"),
            [only] => (*only).to_string(),
            [init @ .., last] => format!("{} and {}", init.join(", "), last),
        };
        PortalError::Validation(joined)
    }

    pub(crate) fn storage(key: &str, reason: impl ToString) -> Self {
        PortalError::StorageUnavailable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_reads_like_a_sentence() {
        assert_eq!(
            PortalError::missing_fields(&["Name", "Phone"]).to_string(),
            "Please enter at least Name and Phone."
        );
        assert_eq!(
            PortalError::missing_fields(&["Name", "Phone", "Location"]).to_string(),
            "Please enter at least Name, Phone and Location."
        );
        assert_eq!(
            PortalError::missing_fields(&["Phone"]).to_string(),
            "Please enter at least Phone."
        );
    }

    #[test]
    fn inactive_view_names_the_view() {
        let err = PortalError::ViewInactive(View::Neighbors);
        assert_eq!(err.to_string(), "Neighbors view is not active");
    }
}
