use std::path;

use super::ValidationGate;
use super::UNSUPPORTED_TYPE_MESSAGE;
use crate::domain::models::DocumentType;
use crate::domain::models::PendingFile;

#[test]
fn it_accepts_pdf() {
    assert_eq!(
        ValidationGate::check("application/pdf"),
        Ok(DocumentType::Pdf)
    );
}

#[test]
fn it_accepts_word() {
    assert_eq!(
        ValidationGate::check(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Ok(DocumentType::Word)
    );
}

#[test]
fn it_accepts_plain_text() {
    assert_eq!(
        ValidationGate::check("text/plain"),
        Ok(DocumentType::PlainText)
    );
}

#[test]
fn it_rejects_images() {
    let res = ValidationGate::check("image/png");
    assert_eq!(res, Err(UNSUPPORTED_TYPE_MESSAGE.to_string()));
    insta::assert_snapshot!(res.unwrap_err(), @"Please upload a PDF, Word document, or text file.");
}

#[test]
fn it_checks_files_by_extension() {
    let accepted = PendingFile::from_path(path::Path::new("notes.txt"));
    assert!(ValidationGate::check_file(&accepted).is_ok());

    let rejected = PendingFile::from_path(path::Path::new("photo.jpg"));
    assert!(ValidationGate::check_file(&rejected).is_err());
}
