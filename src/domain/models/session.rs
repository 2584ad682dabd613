/// Server-issued handle binding chat requests to a previously uploaded
/// document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    /// Canonical name reported by the service, which may differ from the
    /// name of the file that was picked.
    pub filename: String,
}

impl Session {
    pub fn new(session_id: &str, filename: &str) -> Session {
        return Session {
            session_id: session_id.to_string(),
            filename: filename.to_string(),
        };
    }
}
