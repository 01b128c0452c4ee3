use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the external generation service.
///
/// Every variant results in a 500 Internal Server Error for the caller; the detail
/// is only written to the server log.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request could not be sent, timed out, or the body could not be read.
    #[error("Generation service request to {endpoint} failed: {source}")]
    Transport {
        /// Path of the generation endpoint that was called
        endpoint: &'static str,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The generation service answered with a non-success status code.
    #[error("Generation service {endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The service answered with a success status but the body is not the expected JSON.
    #[error("Generation service {endpoint} returned an undecodable body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The response decoded but did not have the expected shape.
    ///
    /// Produced by validation of generated records before they are persisted or
    /// returned, e.g. a quiz question without any answer options.
    #[error("Generation service {endpoint} returned a malformed record: {reason}")]
    Malformed {
        endpoint: &'static str,
        reason: String,
    },
}
