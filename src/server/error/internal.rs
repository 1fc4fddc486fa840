use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not recognise.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} value '{value}' stored in database")]
    UnknownEnumValue {
        /// Name of the enum being parsed, e.g. `car status`
        kind: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// Failure to hash a password with argon2.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
