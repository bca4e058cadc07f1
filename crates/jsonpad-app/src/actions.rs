//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs as a tokio task and reports back through the message
//! channel; state is only ever touched by the TEA loop.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use jsonpad_core::prelude::*;
use tokio::sync::mpsc;

use crate::clipboard::ClipboardSink;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    clipboard: Arc<dyn ClipboardSink>,
) {
    match action {
        UpdateAction::ReadFile { path } => {
            tokio::spawn(async move {
                let msg = read_upload(path).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::WriteDownload { path, contents } => {
            tokio::spawn(async move {
                let msg = write_download(path, contents).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CopyToClipboard { text } => {
            tokio::spawn(async move {
                let msg = copy_to_clipboard(clipboard, text).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ScheduleLabelRevert {
            control,
            generation,
            delay_ms,
        } => {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                let _ = msg_tx
                    .send(Message::RevertLabel {
                        control,
                        generation,
                    })
                    .await;
            });
        }
    }
}

/// Read an uploaded file as UTF-8
pub(crate) async fn read_upload(path: PathBuf) -> Message {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Message::FileLoaded { path, content },
        Err(e) => {
            warn!("Failed to read upload {:?}: {}", path, e);
            Message::FileReadFailed {
                path,
                error: e.to_string(),
            }
        }
    }
}

/// Write a download artifact, creating the directory if needed
pub(crate) async fn write_download(path: PathBuf, contents: String) -> Message {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = tokio::fs::create_dir_all(dir).await {
            return Message::DownloadFailed {
                path,
                error: e.to_string(),
            };
        }
    }

    match tokio::fs::write(&path, contents).await {
        Ok(()) => Message::DownloadSaved { path },
        Err(e) => {
            warn!("Failed to write download {:?}: {}", path, e);
            Message::DownloadFailed {
                path,
                error: e.to_string(),
            }
        }
    }
}

/// Copy on a blocking thread; the copy command is waited on synchronously
pub(crate) async fn copy_to_clipboard(clipboard: Arc<dyn ClipboardSink>, text: String) -> Message {
    let result = tokio::task::spawn_blocking(move || clipboard.set_text(text)).await;
    match result {
        Ok(Ok(())) => Message::ClipboardCopied,
        Ok(Err(e)) => {
            warn!("{}", e);
            Message::ClipboardFailed {
                error: e.to_string(),
            }
        }
        Err(e) => Message::ClipboardFailed {
            error: format!("clipboard task failed: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardSink;
    use crate::feedback::Control;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_upload_success() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("in.json");
        std::fs::write(&path, "{\"a\":1}").unwrap();

        match read_upload(path.clone()).await {
            Message::FileLoaded { path: p, content } => {
                assert_eq!(p, path);
                assert_eq!(content, "{\"a\":1}");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_upload_missing_file() {
        let temp = tempdir().unwrap();
        let msg = read_upload(temp.path().join("missing.json")).await;
        assert!(matches!(msg, Message::FileReadFailed { .. }));
    }

    #[tokio::test]
    async fn test_read_upload_rejects_invalid_utf8() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bin.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            read_upload(path).await,
            Message::FileReadFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_write_download_creates_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out").join("formatted1.json");

        let msg = write_download(path.clone(), "{\n    \"a\": 1\n}".to_string()).await;

        assert!(matches!(msg, Message::DownloadSaved { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_copy_to_clipboard_success() {
        let mut sink = MockClipboardSink::new();
        sink.expect_set_text()
            .withf(|text| text == "[1]")
            .times(1)
            .returning(|_| Ok(()));

        let msg = copy_to_clipboard(Arc::new(sink), "[1]".to_string()).await;
        assert!(matches!(msg, Message::ClipboardCopied));
    }

    #[tokio::test]
    async fn test_copy_to_clipboard_failure() {
        let mut sink = MockClipboardSink::new();
        sink.expect_set_text()
            .returning(|_| Err(Error::clipboard("no display")));

        match copy_to_clipboard(Arc::new(sink), "x".to_string()).await {
            Message::ClipboardFailed { error } => assert!(error.contains("no display")),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_label_revert_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let sink: Arc<dyn ClipboardSink> = Arc::new(MockClipboardSink::new());

        handle_action(
            UpdateAction::ScheduleLabelRevert {
                control: Control::Copy,
                generation: 3,
                delay_ms: 2000,
            },
            tx,
            sink,
        );

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            Message::RevertLabel {
                control: Control::Copy,
                generation: 3
            }
        ));
    }
}
