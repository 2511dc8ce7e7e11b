use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored pilotes number is not one of the known variants
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown pilotes number '{value}' stored for order {order_number}")]
    UnknownPilotesNumber {
        /// The order whose row holds the value
        order_number: String,
        /// The value that failed to parse
        value: String,
    },

    /// Failure to encode or sign a token
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}
