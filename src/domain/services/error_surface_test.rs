use super::ErrorSurface;
use crate::domain::models::ServiceError;

#[test]
fn it_starts_empty() {
    let surface = ErrorSurface::default();
    assert!(!surface.is_set());
    assert_eq!(surface.get(), None);
}

#[test]
fn it_overwrites_previous_error() {
    let mut surface = ErrorSurface::default();
    surface.set("first");
    surface.set("second");
    assert_eq!(surface.get(), Some("second"));
}

#[test]
fn it_clears() {
    let mut surface = ErrorSurface::default();
    surface.set("first");
    surface.clear();
    assert_eq!(surface.get(), None);
}

#[test]
fn it_reports_service_detail() {
    let mut surface = ErrorSurface::default();
    surface.report(
        &ServiceError::Rejected {
            status: 400,
            detail: Some("Unsupported file type".to_string()),
        },
        "fallback",
    );
    assert_eq!(surface.get(), Some("Unsupported file type"));
}

#[test]
fn it_reports_fallback_without_detail() {
    let mut surface = ErrorSurface::default();
    surface.report(
        &ServiceError::Rejected {
            status: 500,
            detail: None,
        },
        "fallback",
    );
    assert_eq!(surface.get(), Some("fallback"));

    surface.report(&ServiceError::Transport("timed out".to_string()), "other");
    assert_eq!(surface.get(), Some("other"));
}
