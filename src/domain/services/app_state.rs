#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::path;

use ratatui::prelude::Rect;

use super::BubbleList;
use super::ErrorSurface;
use super::MessageLog;
use super::Scroll;
use super::ValidationGate;
use crate::domain::models::Action;
use crate::domain::models::ChatPrompt;
use crate::domain::models::ChatReply;
use crate::domain::models::Message;
use crate::domain::models::PendingFile;
use crate::domain::models::RequestTicket;
use crate::domain::models::Sender;
use crate::domain::models::ServiceError;
use crate::domain::models::Session;
use crate::domain::models::UploadReceipt;

pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload document. Please try again.";
pub const CHAT_FAILED_MESSAGE: &str = "Failed to get response. Please try again.";

/// Session controller. Every trigger (key press, service response) maps to
/// one method that runs to completion; requests leave as `Action`s and their
/// results come back through `complete_upload` and `complete_chat`.
pub struct AppState {
    pub bubble_list: BubbleList,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub scroll: Scroll,
    /// Bumped by every reset and whenever a new session replaces the current
    /// one. Responses tagged with an older epoch belong to a conversation that
    /// no longer exists.
    epoch: u64,
    error: ErrorSurface,
    input: String,
    messages: MessageLog,
    pending_file: Option<PendingFile>,
    sending: bool,
    session: Option<Session>,
    uploading: bool,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState {
            bubble_list: BubbleList::default(),
            last_known_height: 0,
            last_known_width: 0,
            scroll: Scroll::default(),
            epoch: 0,
            error: ErrorSurface::default(),
            input: "".to_string(),
            messages: MessageLog::default(),
            pending_file: None,
            sending: false,
            session: None,
            uploading: false,
        };
    }
}

impl AppState {
    pub fn session(&self) -> Option<&Session> {
        return self.session.as_ref();
    }

    pub fn messages(&self) -> &MessageLog {
        return &self.messages;
    }

    pub fn error(&self) -> Option<&str> {
        return self.error.get();
    }

    pub fn input(&self) -> &str {
        return &self.input;
    }

    pub fn pending_file(&self) -> Option<&PendingFile> {
        return self.pending_file.as_ref();
    }

    pub fn is_uploading(&self) -> bool {
        return self.uploading;
    }

    pub fn is_sending(&self) -> bool {
        return self.sending;
    }

    pub fn can_upload(&self) -> bool {
        return !self.uploading;
    }

    pub fn can_send(&self) -> bool {
        return self.session.is_some() && !self.sending;
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Validates the file and, when accepted, marks the upload as in flight.
    /// The returned action carries the request to the worker.
    pub fn begin_upload(&mut self, file_path: &path::Path) -> Option<Action> {
        if !self.can_upload() {
            return None;
        }

        let file = PendingFile::from_path(file_path);
        if let Err(message) = ValidationGate::check_file(&file) {
            self.error.set(&message);
            return None;
        }

        tracing::info!(file = %file.name, media_type = %file.media_type, "Uploading document");

        self.uploading = true;
        self.error.clear();
        self.pending_file = Some(file.clone());

        return Some(Action::Upload(self.ticket(), file));
    }

    pub fn complete_upload(
        &mut self,
        ticket: RequestTicket,
        result: Result<UploadReceipt, ServiceError>,
    ) {
        self.uploading = false;
        if self.is_stale(ticket) {
            tracing::debug!(epoch = ticket.epoch, "Discarding upload response from a previous conversation");
            return;
        }

        match result {
            Ok(receipt) => {
                tracing::info!(
                    session_id = %receipt.session_id,
                    filename = %receipt.filename,
                    "Document uploaded"
                );
                self.epoch += 1;
                self.session = Some(Session::new(&receipt.session_id, &receipt.filename));
                self.add_message(Message::new(
                    Sender::Assistant,
                    &format!(
                        "✅ Document \"{}\" uploaded successfully! You can now ask me questions about its content.",
                        receipt.filename
                    ),
                ));
            }
            Err(err) => {
                self.error.report(&err, UPLOAD_FAILED_MESSAGE);
            }
        }
    }

    /// Echoes the input into the log and builds the chat request. A no-op
    /// when the input is blank, no document is loaded, or a reply is still
    /// outstanding.
    pub fn submit(&mut self) -> Option<Action> {
        if self.input.trim().is_empty() || self.sending {
            return None;
        }

        let session_id = self.session.as_ref()?.session_id.to_string();
        let text = self.input.to_string();

        self.add_message(Message::new(Sender::User, &text));
        self.input.clear();
        self.sending = true;
        self.error.clear();

        return Some(Action::Chat(
            self.ticket(),
            ChatPrompt::new(&text, &session_id),
        ));
    }

    pub fn complete_chat(&mut self, ticket: RequestTicket, result: Result<ChatReply, ServiceError>) {
        self.sending = false;
        if self.is_stale(ticket) {
            tracing::debug!(epoch = ticket.epoch, "Discarding chat response from a previous conversation");
            return;
        }

        match result {
            Ok(reply) => {
                tracing::debug!(
                    is_related = ?reply.is_related,
                    confidence = ?reply.confidence,
                    "Chat response"
                );
                self.add_message(Message::from_reply(&reply));
            }
            Err(err) => {
                self.error.report(&err, CHAT_FAILED_MESSAGE);
            }
        }
    }

    /// Starts over with a new document. The error surface is left alone.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.session = None;
        self.pending_file = None;
        self.messages = MessageLog::default();
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn dismiss_error(&mut self) {
        self.error.clear();
    }

    pub fn show_error(&mut self, message: &str) {
        self.error.set(message);
    }

    pub fn handle_health(&mut self, result: Result<(), String>) {
        if let Err(err) = result {
            self.error.set(&format!(
                "Unable to reach the document service, uploads and questions will fail until it is running. ({err})"
            ));
        }
    }

    /// Whether the input box may hold `text`. Questions need a session and no
    /// outstanding reply; slash commands can always be typed.
    pub fn can_edit_input(&self, text: &str) -> bool {
        return self.can_send() || text.is_empty() || text.trim_start().starts_with('/');
    }

    /// Text shown above the input box while a request is in flight.
    pub fn status_text(&self) -> Option<&'static str> {
        if self.is_sending() {
            return Some("AI is thinking...");
        }
        if self.is_uploading() {
            return Some("Uploading...");
        }

        return None;
    }

    pub fn input_title(&self) -> &'static str {
        if self.session.is_some() {
            return "Ask me about the document...";
        }

        return "Upload a document first... (/upload PATH)";
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn ticket(&self) -> RequestTicket {
        return RequestTicket { epoch: self.epoch };
    }

    fn is_stale(&self, ticket: RequestTicket) -> bool {
        return ticket.epoch != self.epoch;
    }

    fn add_message(&mut self, message: Message) {
        self.messages.append(message);
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        if self.last_known_width == 0 {
            return;
        }

        self.bubble_list
            .set_messages(self.messages.as_slice(), self.last_known_width.into());

        self.scroll.set_state(
            self.bubble_list.len().try_into().unwrap_or(u16::MAX),
            self.last_known_height,
        );
    }
}
