use super::ChatPrompt;
use super::PendingFile;

/// Identifies which reset epoch a request was issued in, so late responses
/// from before a reset can be told apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub epoch: u64,
}

pub enum Action {
    HealthCheck(),
    Upload(RequestTicket, PendingFile),
    Chat(RequestTicket, ChatPrompt),
}
