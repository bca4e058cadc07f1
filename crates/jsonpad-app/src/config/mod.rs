//! Configuration file parsing for jsonpad
//!
//! Supports:
//! - `~/.config/jsonpad/config.toml` - Editor, UI, download and storage settings

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, save_settings,
};
pub use types::*;
