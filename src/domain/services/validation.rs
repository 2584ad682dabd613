#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;

use crate::domain::models::DocumentType;
use crate::domain::models::PendingFile;

pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Please upload a PDF, Word document, or text file.";

/// Client side allow-list check on the declared media type of a file. The
/// service remains the authority and may still reject the bytes.
pub struct ValidationGate {}

impl ValidationGate {
    pub fn check(media_type: &str) -> Result<DocumentType, String> {
        if let Some(document_type) = DocumentType::from_mime(media_type) {
            return Ok(document_type);
        }

        tracing::debug!(media_type = media_type, "Rejected unsupported media type");
        return Err(UNSUPPORTED_TYPE_MESSAGE.to_string());
    }

    pub fn check_file(file: &PendingFile) -> Result<DocumentType, String> {
        return ValidationGate::check(&file.media_type);
    }
}
