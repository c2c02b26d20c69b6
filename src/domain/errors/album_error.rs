//! Album loading error types.

use thiserror::Error;

/// Failures raised while loading album data for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum AlbumError {
    #[error("invalid request: {message}")]
    Validation { message: String },

    #[error("album not found or deleted")]
    NotFound,

    #[error("you are not authorized to view this album")]
    Forbidden,

    #[error("upstream error: {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

impl AlbumError {
    /// Creates validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates upstream error carrying the response status verbatim.
    #[must_use]
    pub fn upstream(status: u16, status_text: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            status_text: status_text.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Classifies an HTTP response status.
    ///
    /// Returns `None` when the response carries a usable body. `204 No Content`
    /// is treated like `404`: an album without content has been deleted.
    #[must_use]
    pub fn from_status(status: u16, status_text: &str) -> Option<Self> {
        match status {
            204 | 404 => Some(Self::NotFound),
            403 => Some(Self::Forbidden),
            200..=299 => None,
            _ => Some(Self::upstream(status, status_text)),
        }
    }

    /// Classifies a public feed response status.
    ///
    /// The album-specific `NotFound` and `Forbidden` messages do not apply
    /// to the feed, so every failure, including an empty 204, is `Upstream`.
    #[must_use]
    pub fn from_feed_status(status: u16, status_text: &str) -> Option<Self> {
        if status != 204 && (200..=299).contains(&status) {
            None
        } else {
            Some(Self::upstream(status, status_text))
        }
    }

    /// Returns the status code presented alongside the message.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound => 404,
            Self::Forbidden => 403,
            Self::Upstream { status, .. } => *status,
            Self::Decode { .. } => 502,
            Self::Network { .. } => 503,
        }
    }

    /// Returns whether the failure came from the transport rather than the API.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(200, None ; "ok")]
    #[test_case(201, None ; "created")]
    #[test_case(204, Some(AlbumError::NotFound) ; "no_content")]
    #[test_case(404, Some(AlbumError::NotFound) ; "not_found")]
    #[test_case(403, Some(AlbumError::Forbidden) ; "forbidden")]
    #[test_case(500, Some(AlbumError::upstream(500, "Internal Server Error")) ; "server_error")]
    #[test_case(401, Some(AlbumError::upstream(401, "Internal Server Error")) ; "unauthorized_is_generic")]
    fn test_from_status(status: u16, expected: Option<AlbumError>) {
        assert_eq!(
            AlbumError::from_status(status, "Internal Server Error"),
            expected
        );
    }

    #[test_case(200, None ; "ok")]
    #[test_case(204, Some(AlbumError::upstream(204, "Not Found")) ; "no_content")]
    #[test_case(404, Some(AlbumError::upstream(404, "Not Found")) ; "not_found")]
    #[test_case(403, Some(AlbumError::upstream(403, "Not Found")) ; "forbidden")]
    fn test_from_feed_status(status: u16, expected: Option<AlbumError>) {
        assert_eq!(AlbumError::from_feed_status(status, "Not Found"), expected);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AlbumError::validation("missing id").status(), 400);
        assert_eq!(AlbumError::NotFound.status(), 404);
        assert_eq!(AlbumError::Forbidden.status(), 403);
        assert_eq!(AlbumError::upstream(502, "Bad Gateway").status(), 502);
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(AlbumError::NotFound.to_string(), "album not found or deleted");
        assert_eq!(
            AlbumError::Forbidden.to_string(),
            "you are not authorized to view this album"
        );
        assert_eq!(
            AlbumError::upstream(500, "Internal Server Error").to_string(),
            "upstream error: 500 Internal Server Error"
        );
    }
}
