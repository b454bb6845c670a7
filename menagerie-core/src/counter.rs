//! Per-registration operation counter.
//!
//! A [`RegistrationCounter`] only exists inside [`RegistrationCounter::scoped`].
//! A guard borrowing the counter closes it exactly once when the closure
//! finishes, whether it returned `Ok`, `Err`, or unwound.
//! Callers never hold an unscoped counter and never close one themselves.

use crate::error::StoreError;

#[derive(Debug)]
pub struct RegistrationCounter {
    count: usize,
    closed: bool,
}

/// Closes the borrowed counter when dropped.
struct CloseOnDrop<'a>(&'a mut RegistrationCounter);

impl Drop for CloseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.close();
    }
}

impl RegistrationCounter {
    fn open() -> Self {
        Self {
            count: 0,
            closed: false,
        }
    }

    /// Run `f` with a fresh counter and return its result alongside the final
    /// count. The counter is closed once `f` returns or unwinds.
    pub fn scoped<T>(f: impl FnOnce(&mut RegistrationCounter) -> T) -> (T, usize) {
        let mut counter = Self::open();
        let out = run_scope(&mut counter, f);
        (out, counter.count)
    }

    /// Record one completed operation.
    pub fn add(&mut self) -> Result<usize, StoreError> {
        if self.closed {
            return Err(StoreError::IllegalState("registration counter is already closed"));
        }
        self.count += 1;
        Ok(self.count)
    }

    #[cfg(test)]
    fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self) {
        debug_assert!(!self.closed, "registration counter closed twice");
        self.closed = true;
        tracing::trace!(count = self.count, "registration counter closed");
    }
}

/// Hand `counter` to `f` behind a guard that closes it on the way out.
fn run_scope<T>(
    counter: &mut RegistrationCounter,
    f: impl FnOnce(&mut RegistrationCounter) -> T,
) -> T {
    let mut guard = CloseOnDrop(counter);
    f(&mut *guard.0)
}
