//! jsonpad-app - Application state and orchestration for jsonpad
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the paired editor surfaces, the format/validate controller,
//! theme coordination, transient labels, the session store and configuration.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod feedback;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod store;
pub mod surface;
pub mod theme;

// Re-export primary types
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, UiMode};
pub use store::{FileStore, MemoryStore, SessionStore};
pub use surface::{EditorSurface, TextSurface};
