//! Router error types

use thiserror::Error;

/// Errors crossing `PanelRouter::dispatch`
///
/// A missing credential is not an error: it is a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The label matches no registered panel. Navigation only offers
    /// registered labels, so reaching this means the caller is out of sync.
    #[error("unknown panel: '{0}'")]
    UnknownPanel(String),
}

/// Errors building the panel table at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate panel label: '{0}'")]
    DuplicateLabel(String),

    #[error("no '{0}' panel registered")]
    MissingSettings(&'static str),

    #[error("the '{0}' panel must not require a credential")]
    GatedSettings(&'static str),
}
