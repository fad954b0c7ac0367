//! Core types for tuikit, a paged terminal menu toolkit.
//!
//! Semantic keys and the byte decoder that produces them, SGR styles, the
//! shared error type, and the render/input loop that the UI and back-end
//! crates plug into.

pub mod app;
pub mod decode;
pub mod error;
pub mod messages;
pub mod style;

pub use app::{App, AppConfig, Driver, Effect, Model};
pub use decode::{ByteSource, KeyProfile, ReadSource, decode, read_key};
pub use error::{Error, Result};
pub use messages::Key;
pub use style::{RESET, Style, style_to_code};
