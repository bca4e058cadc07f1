//! jsonpad - format, minify and validate JSON in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use jsonpad_app::config::{self, Settings};
use jsonpad_app::store::{FileStore, MemoryStore, SessionStore};
use jsonpad_core::logging;
use jsonpad_core::prelude::*;
use jsonpad_tui::RunOptions;

/// jsonpad - format, minify and validate JSON in the terminal
#[derive(Parser, Debug)]
#[command(name = "jsonpad")]
#[command(about = "Format, minify and validate JSON in the terminal", long_about = None)]
struct Args {
    /// JSON file to upload on start
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file (default: <config_dir>/jsonpad/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session file, overriding [storage] session_file
    #[arg(long, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Directory downloads are written to, overriding [download] directory
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,

    /// Start empty instead of restoring the last session
    #[arg(long)]
    no_restore: bool,

    /// Keep the session in memory only
    #[arg(long, conflicts_with = "session")]
    ephemeral: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Write the effective settings (file plus flags) to the config file and exit
    #[arg(long, conflicts_with = "init_config")]
    save_config: bool,
}

/// Settings from the config file with command-line overrides applied
fn resolve_settings(args: &Args, config_path: &Path) -> Settings {
    let mut settings = config::load_settings_from(config_path);

    if let Some(dir) = &args.download_dir {
        settings.download.directory = dir.display().to_string();
    }
    if let Some(session) = &args.session {
        settings.storage.session_file = session.display().to_string();
    }
    settings
}

fn open_store(args: &Args, settings: &Settings) -> Box<dyn SessionStore + Send> {
    if args.ephemeral {
        info!("Using in-memory session store");
        Box::new(MemoryStore::new())
    } else {
        let path = settings.storage.resolve_session_file();
        info!("Session file: {}", path.display());
        Box::new(FileStore::open(path))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    logging::init()?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    if args.init_config {
        config::init_config_file(&config_path)
            .with_context(|| format!("Failed to create {}", config_path.display()))?;
        eprintln!("✅ Config file: {}", config_path.display());
        return Ok(());
    }

    let settings = resolve_settings(&args, &config_path);

    if args.save_config {
        config::save_settings(&config_path, &settings).context("Failed to save settings")?;
        eprintln!("✅ Saved settings to {}", config_path.display());
        return Ok(());
    }

    let store = open_store(&args, &settings);
    let result = jsonpad_tui::run(RunOptions {
        settings,
        store,
        restore: !args.no_restore,
        upload: args.file,
    })
    .await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = logging::get_current_log_file() {
            eprintln!("❌ {}", e);
            eprintln!("   See {} for details.", log_file.display());
        }
    }

    info!("jsonpad exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["jsonpad"]).unwrap();
        assert!(args.file.is_none());
        assert!(!args.no_restore);
        assert!(!args.ephemeral);
    }

    #[test]
    fn test_parse_file_and_flags() {
        let args = Args::try_parse_from([
            "jsonpad",
            "--no-restore",
            "--download-dir",
            "/tmp/out",
            "in.json",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("in.json")));
        assert_eq!(args.download_dir, Some(PathBuf::from("/tmp/out")));
        assert!(args.no_restore);
    }

    #[test]
    fn test_ephemeral_conflicts_with_session() {
        let parsed = Args::try_parse_from(["jsonpad", "--ephemeral", "--session", "s.toml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[download]\ndirectory = \"/from/file\"\n[ui]\nfeedback_ms = 500\n",
        )
        .unwrap();

        let args = Args::try_parse_from(["jsonpad", "--download-dir", "/from/flag"]).unwrap();
        let settings = resolve_settings(&args, &config_path);

        assert_eq!(settings.download.directory, "/from/flag");
        assert_eq!(settings.ui.feedback_ms, 500);
    }

    #[test]
    fn test_session_flag_sets_store_path() {
        let temp = tempdir().unwrap();
        let session = temp.path().join("s.toml");
        let args = Args::try_parse_from(["jsonpad", "--session", session.to_str().unwrap()])
            .unwrap();

        let settings = resolve_settings(&args, &temp.path().join("missing.toml"));
        assert_eq!(settings.storage.resolve_session_file(), session);
    }
}
