//! In-flight markers shared by the controllers of one account.
//!
//! Every `POST /login` builds a fresh controller, so the in-flight flag has to
//! live outside it for overlapping submissions of the same email to see each
//! other.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct InFlightLogins {
    flags: Arc<Mutex<HashMap<String, Arc<AtomicBool>>>>,
}

impl InFlightLogins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the flag shared by every submission for `email`.
    ///
    /// Flags nobody holds any more are dropped on the way.
    pub fn flag_for(&self, email: &str) -> Arc<AtomicBool> {
        let mut flags = self.lock();
        flags.retain(|_, flag| Arc::strong_count(flag) > 1 || flag.load(Ordering::SeqCst));

        Arc::clone(
            flags
                .entry(email.trim().to_lowercase())
                .or_insert_with(|| Arc::new(AtomicBool::new(false))),
        )
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<AtomicBool>>> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_email_shares_flag() {
        let logins = InFlightLogins::new();

        let first = logins.flag_for("a@b.com");
        let second = logins.flag_for(" A@B.com");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &logins.flag_for("c@d.com")));
    }

    #[test]
    fn test_unused_flags_are_pruned() {
        let logins = InFlightLogins::new();

        drop(logins.flag_for("a@b.com"));
        let held = logins.flag_for("c@d.com");

        assert_eq!(logins.len(), 1);
        drop(held);
    }

    #[test]
    fn test_set_flag_survives_pruning() {
        let logins = InFlightLogins::new();
        logins.flag_for("a@b.com").store(true, Ordering::SeqCst);

        assert!(logins.flag_for("a@b.com").load(Ordering::SeqCst));
    }
}
