//! Errors produced by the registry and by chain capabilities.

/// Configuration defects detected while initializing the registry.
///
/// Any of these aborts initialization and leaves the previous set of
/// active currencies in place.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("currency definition has an empty code")]
    EmptyCode,
    #[error("currency {code} is malformed: {reason}")]
    MalformedDefinition { code: String, reason: &'static str },
    #[error("currency {0} has no chain capabilities attached")]
    MissingCapabilities(String),
}

impl RegistryError {
    pub(crate) fn malformed(code: &str, reason: &'static str) -> Self {
        Self::MalformedDefinition {
            code: code.to_owned(),
            reason,
        }
    }
}

/// Reasons an address could not be checked.
///
/// These mean "validity could not be determined", not "invalid".
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address validation is not supported for this currency")]
    Unsupported,
    #[error("unsupported address kind: {0}")]
    UnsupportedKind(&'static str),
}
