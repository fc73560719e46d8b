//! Draw-tool specific errors, layered over the framework's.

use creational_framework::FrameworkError;

/// Errors surfaced by the draw tool itself.
#[derive(Debug, thiserror::Error)]
pub enum DrawToolError {
    /// The shared config names a theme no family is registered under. Kept
    /// separate from the raw framework error so the message can point the
    /// user at their configuration rather than at a factory call.
    #[error("configured theme {0:?} is not registered")]
    UnknownConfiguredTheme(String),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
