//! Process-wide holder for a value that is created lazily and released on
//! demand, such as a class promoted to a global reference.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct RefSlot<T> {
    inner: Mutex<Option<T>>,
}

impl<T> RefSlot<T> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    /// Returns a clone of the held value, filling the slot with `init` first
    /// if it is empty. The lock is held across `init`, so concurrent callers
    /// never create two values.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<T, E>
    where
        T: Clone,
        F: FnOnce() -> Result<T, E>,
    {
        let mut guard = self.lock();
        if let Some(value) = guard.as_ref() {
            return Ok(value.clone());
        }
        let value = init()?;
        *guard = Some(value.clone());
        Ok(value)
    }

    /// Empties the slot and hands back what it held. The value is dropped by
    /// the caller, outside the lock.
    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }
}

impl<T> Default for RefSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
