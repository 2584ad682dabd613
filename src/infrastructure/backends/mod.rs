pub mod http;

use std::sync::Arc;

use crate::domain::models::BackendHandle;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> BackendHandle {
        return Arc::new(http::HttpBackend::default());
    }
}
