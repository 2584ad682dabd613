use super::ChatPrompt;
use super::ServiceError;

#[test]
fn it_builds_prompts() {
    let prompt = ChatPrompt::new("What is this about?", "s1");
    assert_eq!(prompt.message, "What is this about?");
    assert_eq!(prompt.session_id, "s1");
}

#[test]
fn it_returns_service_detail() {
    let err = ServiceError::Rejected {
        status: 404,
        detail: Some("Session not found".to_string()),
    };
    assert_eq!(err.detail(), Some("Session not found"));
}

#[test]
fn it_ignores_blank_detail() {
    let err = ServiceError::Rejected {
        status: 500,
        detail: Some("  ".to_string()),
    };
    assert_eq!(err.detail(), None);
}

#[test]
fn it_has_no_detail_for_transport_errors() {
    let err = ServiceError::Transport("connection refused".to_string());
    assert_eq!(err.detail(), None);
    insta::assert_snapshot!(err.to_string(), @"unable to reach the document service: connection refused");
}
