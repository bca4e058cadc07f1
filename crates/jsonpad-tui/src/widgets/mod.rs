//! Custom widget components

mod alert;
pub mod editor_pane;
mod header;
pub mod modal;
mod status_bar;
mod theme_list;
mod toolbar;
mod upload_prompt;

pub use alert::AlertDialog;
pub use editor_pane::EditorPane;
pub use header::Header;
pub use status_bar::StatusBar;
pub use theme_list::ThemeList;
pub use toolbar::Toolbar;
pub use upload_prompt::UploadPrompt;
