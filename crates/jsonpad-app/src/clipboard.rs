//! System clipboard through the platform's copy command
//!
//! The command is picked once, from the environment and the binaries found on
//! `PATH`, and the copied text is written to its stdin.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use jsonpad_core::prelude::*;

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: String) -> Result<()>;
}

/// A copy command that reads the text from stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const PBCOPY: CopyCommand = CopyCommand {
    program: "pbcopy",
    args: &[],
};

const WL_COPY: CopyCommand = CopyCommand {
    program: "wl-copy",
    args: &["--type", "text/plain"],
};

const XCLIP: CopyCommand = CopyCommand {
    program: "xclip",
    args: &["-i", "-selection", "clipboard"],
};

const XSEL: CopyCommand = CopyCommand {
    program: "xsel",
    args: &["-i", "-b"],
};

const TERMUX: CopyCommand = CopyCommand {
    program: "termux-clipboard-set",
    args: &[],
};

const TMUX: CopyCommand = CopyCommand {
    program: "tmux",
    args: &["load-buffer", "-w", "-"],
};

/// Windows, and WSL through interop
const CLIP_EXE: CopyCommand = CopyCommand {
    program: "clip.exe",
    args: &[],
};

/// Candidates in priority order, each gated on an optional environment variable
const CANDIDATES: &[(Option<&str>, CopyCommand)] = &[
    (None, PBCOPY),
    (Some("WAYLAND_DISPLAY"), WL_COPY),
    (Some("DISPLAY"), XCLIP),
    (Some("DISPLAY"), XSEL),
    (None, TERMUX),
    (Some("TMUX"), TMUX),
    (None, CLIP_EXE),
];

/// Pick the first usable copy command
pub fn select_command(
    has_env: impl Fn(&str) -> bool,
    has_binary: impl Fn(&str) -> bool,
) -> Option<CopyCommand> {
    CANDIDATES
        .iter()
        .find(|(var, command)| var.map_or(true, &has_env) && has_binary(command.program))
        .map(|(_, command)| *command)
}

fn env_is_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|value| !value.is_empty())
}

fn binary_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Clipboard backed by the detected copy command
#[derive(Debug, Default)]
pub struct SystemClipboard {
    command: OnceLock<Option<CopyCommand>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn command(&self) -> Option<CopyCommand> {
        *self.command.get_or_init(|| {
            let command = select_command(env_is_set, binary_exists);
            match command {
                Some(c) => info!("Clipboard command: {}", c.program),
                None => warn!("No clipboard command found on PATH"),
            }
            command
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: String) -> Result<()> {
        let command = self.command().ok_or_else(|| {
            Error::clipboard("no clipboard command found (install wl-clipboard, xclip or xsel)")
        })?;
        run_copy(command, &text)
    }
}

/// Blocks until the command exits
fn run_copy(command: CopyCommand, text: &str) -> Result<()> {
    let mut child = Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::clipboard(format!("failed to run {}: {}", command.program, e)))?;

    // stdin is closed when it drops, which ends the command's input
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            // Reap the child so a failed copy leaves no zombie behind
            let _ = child.kill();
            let _ = child.wait();
            return Err(Error::clipboard(format!(
                "failed to write to {}: {}",
                command.program, e
            )));
        }
    }

    let status = child
        .wait()
        .map_err(|e| Error::clipboard(format!("{} did not finish: {}", command.program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::clipboard(format!(
            "{} exited with {}",
            command.program, status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_prefers_wayland_over_x11() {
        let command = select_command(
            |var| var == "WAYLAND_DISPLAY" || var == "DISPLAY",
            |program| program == "wl-copy" || program == "xclip",
        );
        assert_eq!(command, Some(WL_COPY));
    }

    #[test]
    fn test_select_skips_display_tools_without_display() {
        let command = select_command(|_| false, |program| program == "xclip" || program == "clip.exe");
        assert_eq!(command, Some(CLIP_EXE));
    }

    #[test]
    fn test_select_falls_back_to_xsel() {
        let command = select_command(|var| var == "DISPLAY", |program| program == "xsel");
        assert_eq!(command, Some(XSEL));
    }

    #[test]
    fn test_select_none_when_nothing_installed() {
        assert_eq!(select_command(|_| true, |_| false), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_copy_pipes_text() {
        let cat = CopyCommand {
            program: "cat",
            args: &[],
        };
        assert!(run_copy(cat, "{\"a\": 1}").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_copy_reports_failure_status() {
        let fails = CopyCommand {
            program: "false",
            args: &[],
        };
        let err = run_copy(fails, "x").unwrap_err();
        assert!(err.to_string().contains("false"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_copy_reaps_child_when_stdin_closes_early() {
        // `true` exits without reading, so a large write hits a closed pipe
        let exits_early = CopyCommand {
            program: "true",
            args: &[],
        };
        let text = "x".repeat(4 * 1024 * 1024);

        let err = run_copy(exits_early, &text).unwrap_err();
        assert!(err.to_string().contains("failed to write to true"));
    }

    #[test]
    fn test_run_copy_missing_program() {
        let missing = CopyCommand {
            program: "jsonpad-no-such-clipboard-tool",
            args: &[],
        };
        assert!(run_copy(missing, "x").is_err());
    }
}
