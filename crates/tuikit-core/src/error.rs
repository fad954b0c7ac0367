//! The shared [`Error`] type.

use thiserror::Error;

/// Errors surfaced by the toolkit.
///
/// User navigation mistakes (out-of-range indices, moving past an end,
/// activating with nothing selected) are never errors; they are silently
/// dropped by the state machine.
#[derive(Debug, Error)]
pub enum Error {
    /// A page lookup by label matched nothing.
    #[error("no page labelled {0:?}")]
    NotFound(String),

    /// An element's payload does not fit its action's arity.
    #[error("action takes {expected} argument(s) but payload supplies {found}")]
    InvalidInvocation { expected: usize, found: usize },

    /// The interrupt byte was read from the terminal.
    #[error("interrupted")]
    Interrupted,

    /// Terminal unavailable or read failure.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is the user interrupt.
    #[inline]
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}
