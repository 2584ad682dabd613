#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::BackendHandle;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /upload (/u) [PATH] - Uploads a PDF, Word (.docx), or text file and starts a new conversation about it.
- /new (/n) - Forgets the current document and conversation so another one can be uploaded.
- /dismiss (/d) - Hides the current error message.
- /quit /exit (/q) - Exit docchat.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+N - New document, same as /new.
- CTRL+E - Dismiss the current error, same as /dismiss.
- CTRL+C - Exit docchat.
        "#;

    return text.trim().to_string();
}

fn send_event(tx: &mpsc::UnboundedSender<Event>, event: Event) {
    if tx.send(event).is_err() {
        tracing::warn!("UI stopped listening before a service response arrived");
    }
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs each request on its own task and reports the outcome back to the
    /// UI loop, which owns all conversation state.
    pub async fn start(
        backend: BackendHandle,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_backend = backend.clone();
            let worker_tx = tx.clone();

            match action {
                Action::HealthCheck() => {
                    tokio::spawn(async move {
                        let res = worker_backend
                            .health_check()
                            .await
                            .map_err(|err| return err.to_string());

                        send_event(&worker_tx, Event::ServiceHealth(res));
                    });
                }
                Action::Upload(ticket, file) => {
                    tokio::spawn(async move {
                        let res = worker_backend.upload(&file).await;
                        send_event(&worker_tx, Event::UploadResponse(ticket, res));
                    });
                }
                Action::Chat(ticket, prompt) => {
                    tokio::spawn(async move {
                        let res = worker_backend.chat(&prompt).await;
                        send_event(&worker_tx, Event::ChatResponse(ticket, res));
                    });
                }
            }
        }

        return Ok(());
    }
}
