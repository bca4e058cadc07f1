//! # jsonpad-core - Core Domain Types
//!
//! Foundation crate for jsonpad. Provides the JSON codec, domain types, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Codec (`codec`)
//! - [`parse()`] - Raw text to [`JsonValue`] or [`SyntaxError`]
//! - [`render()`] - [`JsonValue`] to text in a [`RenderMode`]
//! - [`transform()`] - Parse + render in one step, yielding [`SENTINEL`] on failure
//!
//! ### Domain Types (`types`)
//! - [`PageMode`] - Light/Dark page-wide mode
//! - [`SurfaceRole`] - Input or Output editor surface
//! - [`ThemePreference`], [`PersistedSession`] - Durable session snapshot
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with user-facing alert text
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use jsonpad_core::prelude::*;
//! ```

pub mod codec;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use codec::{
    parse, render, transform, JsonValue, RenderMode, SyntaxError, Transform, SENTINEL,
};
pub use error::{Error, Result, ResultExt};
pub use types::{
    PageMode, PersistedSession, SurfaceRole, ThemePreference, DEFAULT_DARK_EDITOR_THEME,
    DEFAULT_LIGHT_EDITOR_THEME,
};
