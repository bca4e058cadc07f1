//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::clipboard::ClipboardSink;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up it produces.
///
/// Actions are handed to background tasks; their results come back later
/// through `msg_tx`.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    clipboard: &Arc<dyn ClipboardSink>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(clipboard));
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardSink;
    use crate::input_key::InputKey;
    use crate::store::{SessionStore, KEY_JSON_INPUT};
    use crate::surface::EditorSurface;
    use tempfile::tempdir;

    fn sink() -> Arc<dyn ClipboardSink> {
        Arc::new(MockClipboardSink::new())
    }

    #[tokio::test]
    async fn test_key_chain_updates_output_and_store() {
        let mut state = AppState::new();
        let (tx, _rx) = mpsc::channel(8);
        let clipboard = sink();

        for c in "[1,2]".chars() {
            process_message(&mut state, Message::Key(InputKey::Char(c)), &tx, &clipboard);
        }

        assert_eq!(state.output.get_value(), "[\n    1,\n    2\n]");
        assert_eq!(state.store.get(KEY_JSON_INPUT).as_deref(), Some("[1,2]"));
    }

    #[tokio::test]
    async fn test_upload_round_trip_through_channel() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("in.json");
        std::fs::write(&path, "{\"a\":1}").unwrap();

        let mut state = AppState::new();
        let (tx, mut rx) = mpsc::channel(8);
        let clipboard = sink();

        process_message(&mut state, Message::UploadFile { path }, &tx, &clipboard);
        let loaded = rx.recv().await.unwrap();
        assert!(matches!(loaded, Message::FileLoaded { .. }));

        process_message(&mut state, loaded, &tx, &clipboard);
        assert_eq!(state.input.get_value(), "{\"a\":1}");
        assert_eq!(state.output.get_value(), "{\n    \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_copy_reports_back_and_flashes() {
        let mut mock = MockClipboardSink::new();
        mock.expect_set_text()
            .withf(|text| text.is_empty())
            .times(1)
            .returning(|_| Ok(()));
        let clipboard: Arc<dyn ClipboardSink> = Arc::new(mock);

        let mut state = AppState::new();
        let (tx, mut rx) = mpsc::channel(8);

        process_message(&mut state, Message::Copy, &tx, &clipboard);
        let copied = rx.recv().await.unwrap();
        assert!(matches!(copied, Message::ClipboardCopied));

        process_message(&mut state, copied, &tx, &clipboard);
        assert!(state
            .feedback
            .is_flashing(crate::feedback::Control::Copy));
    }
}
