//! [`Navigator`] for server-rendered pages.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::Navigator;

/// Records the navigation target so the handler can answer with a redirect.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    target: Mutex<Option<String>>,
}

impl RedirectNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last requested path and forgets it.
    pub fn take_target(&self) -> Option<String> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for RedirectNavigator {
    fn go_to(&self, path: &str) {
        *self.lock() = Some(path.to_string());
    }
}
