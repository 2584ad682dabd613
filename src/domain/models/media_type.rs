#[cfg(test)]
#[path = "media_type_test.rs"]
mod tests;

use strum::EnumIter;
use strum::IntoEnumIterator;

/// Document formats the service is expected to understand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum DocumentType {
    Pdf,
    Word,
    PlainText,
}

impl DocumentType {
    pub fn mime(&self) -> &'static str {
        match self {
            DocumentType::Pdf => return "application/pdf",
            DocumentType::Word => {
                return "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentType::PlainText => return "text/plain",
        }
    }

    /// Matches on the essence of a media type, ignoring case and any
    /// parameters such as `charset`.
    pub fn from_mime(media_type: &str) -> Option<DocumentType> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        return DocumentType::iter().find(|e| return e.mime() == essence);
    }
}
