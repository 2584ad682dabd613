pub fn upload_response_fixture() -> &'static str {
    return r#"{"session_id":"s1","filename":"notes.txt","message":"Document uploaded successfully"}"#;
}

pub fn chat_response_fixture() -> &'static str {
    return r#"{"response":"It's about X.","is_related":true,"confidence":0.9}"#;
}

pub fn long_reply_fixture() -> &'static str {
    return r#"
The document describes a quarterly planning process.

It covers three areas: hiring, infrastructure spend, and the roadmap for the next two releases. This paragraph is intentionally long so that it wraps across several lines in a narrow bubble.
"#
    .trim();
}
