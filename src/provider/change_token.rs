use std::fmt;

use crate::core::ChangeToken;

/// Handle to a callback registered on a [`ChangeToken`].
///
/// Dropping the handle unregisters the callback.
pub struct ChangeRegistration {
    unregister: Option<Box<dyn FnOnce() + Send>>,
}

impl ChangeRegistration {
    /// A registration that runs `unregister` when dropped.
    pub fn new(unregister: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unregister: Some(Box::new(unregister)),
        }
    }

    /// A registration with nothing to undo.
    pub fn inert() -> Self {
        Self { unregister: None }
    }

    pub fn is_inert(&self) -> bool {
        self.unregister.is_none()
    }
}

impl Drop for ChangeRegistration {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl fmt::Debug for ChangeRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeRegistration")
            .field("inert", &self.is_inert())
            .finish()
    }
}

/// A change token that never changes.
///
/// Embedded resources are fixed when the binary is built, so every watch over them
/// gets the same process-wide [`NULL_CHANGE_TOKEN`].
#[derive(Debug)]
pub struct NullChangeToken {
    _private: (),
}

pub static NULL_CHANGE_TOKEN: NullChangeToken = NullChangeToken { _private: () };

impl NullChangeToken {
    pub fn singleton() -> &'static NullChangeToken {
        &NULL_CHANGE_TOKEN
    }
}

impl ChangeToken for NullChangeToken {
    fn has_changed(&self) -> bool {
        false
    }

    fn active_change_callbacks(&self) -> bool {
        false
    }

    /// The callback is dropped without ever being called.
    fn register_change_callback(&self, _callback: Box<dyn FnOnce() + Send>) -> ChangeRegistration {
        ChangeRegistration::inert()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[test]
    fn test_null_token_never_changes() {
        let token = NullChangeToken::singleton();
        assert!(!token.has_changed());
        assert!(!token.active_change_callbacks());
    }

    #[test]
    fn test_null_token_is_a_singleton() {
        assert!(std::ptr::eq(NullChangeToken::singleton(), &NULL_CHANGE_TOKEN));
    }

    #[test]
    fn test_null_token_never_invokes_callback() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);

        let registration = NULL_CHANGE_TOKEN.register_change_callback(Box::new(move || {
            flag.store(true, Ordering::SeqCst);
        }));
        assert!(registration.is_inert());
        drop(registration);

        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_registration_runs_unregister_on_drop() {
        let unregistered = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&unregistered);

        let registration = ChangeRegistration::new(move || flag.store(true, Ordering::SeqCst));
        assert!(!registration.is_inert());
        assert!(!unregistered.load(Ordering::SeqCst));

        drop(registration);
        assert!(unregistered.load(Ordering::SeqCst));
    }
}
