use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to a node's daemon.
///
/// Transport problems and non-2xx responses are kept distinct so callers
/// can tell "never reached the daemon" apart from "the daemon refused".
#[derive(Error, Debug)]
pub enum DaemonError {
    /// The request never completed: connection refused, DNS failure,
    /// timeout, or a dropped connection.
    #[error("failed to reach the daemon: {0}")]
    Connection(#[source] reqwest::Error),

    /// The daemon answered with a non-2xx status.
    #[error("daemon responded with status {status}: {body}")]
    Http {
        status: StatusCode,
        /// Daemon-supplied error body, possibly empty.
        body: String,
    },
}

impl DaemonError {
    /// Whether the daemon reported the target resource as already absent.
    ///
    /// This is the only failure the deletion path treats as success.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DaemonError::Http { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_http_404_counts_as_not_found() {
        let not_found = DaemonError::Http {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };
        let server_error = DaemonError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };

        assert!(not_found.is_not_found());
        assert!(!server_error.is_not_found());
    }
}
