use tui_textarea::Input;

use super::ChatReply;
use super::RequestTicket;
use super::ServiceError;
use super::UploadReceipt;

pub enum Event {
    ChatResponse(RequestTicket, Result<ChatReply, ServiceError>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLE(),
    KeyboardCTRLN(),
    KeyboardEnter(),
    KeyboardPaste(String),
    ServiceHealth(Result<(), String>),
    UIResize(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
    UploadResponse(RequestTicket, Result<UploadReceipt, ServiceError>),
}
