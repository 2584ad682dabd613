#[cfg(test)]
#[path = "error_surface_test.rs"]
mod tests;

use crate::domain::models::ServiceError;

/// Single slot, last write wins.
#[derive(Default)]
pub struct ErrorSurface {
    current: Option<String>,
}

impl ErrorSurface {
    pub fn get(&self) -> Option<&str> {
        return self.current.as_deref();
    }

    pub fn is_set(&self) -> bool {
        return self.current.is_some();
    }

    pub fn set(&mut self, message: &str) {
        self.current = Some(message.to_string());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Prefers the detail supplied by the service over `fallback`.
    pub fn report(&mut self, err: &ServiceError, fallback: &str) {
        tracing::error!(error = %err, "Document service request failed");
        self.set(err.detail().unwrap_or(fallback));
    }
}
