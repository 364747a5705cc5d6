//! Per-request cancellation handle.

use std::{cell::Cell, cell::RefCell, fmt, rc::Rc};

type CancelListener = Box<dyn FnOnce()>;

#[derive(Default)]
struct CancellationInner {
    cancelled: Cell<bool>,
    listeners: RefCell<Vec<CancelListener>>,
}

#[derive(Clone, Default)]
/// Cancellation handle associated 1:1 with an in-flight request.
///
/// Clones share state. Transports register an abort hook with [`CancellationToken::on_cancel`];
/// the UI calls [`CancellationToken::cancel`] when the user removes an in-flight upload and lets
/// the request's completion observe the cancellation. Tokens are single-threaded (UI event loop).
pub struct CancellationToken {
    inner: Rc<CancellationInner>,
}

impl CancellationToken {
    /// Creates a fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation and runs every registered hook once. Repeated calls are no-ops.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let listeners = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        for listener in listeners {
            listener();
        }
    }

    /// Returns `true` once [`CancellationToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Registers a hook that runs on cancellation, immediately if already cancelled.
    pub fn on_cancel(&self, listener: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            listener();
            return;
        }
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Returns `true` when both handles refer to the same token.
    pub fn same_token(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for CancellationToken {
    fn eq(&self, other: &Self) -> bool {
        self.same_token(other)
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_runs_hooks_once_and_is_shared_across_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        token.on_cancel(move || counter.set(counter.get() + 1));

        clone.cancel();
        clone.cancel();

        assert!(token.is_cancelled());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn late_hook_runs_immediately_after_cancel() {
        let token = CancellationToken::new();
        token.cancel();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        token.on_cancel(move || flag.set(true));
        assert!(ran.get());
    }

    #[test]
    fn independent_tokens_do_not_affect_each_other() {
        let first = CancellationToken::new();
        let second = CancellationToken::new();
        first.cancel();
        assert!(!second.is_cancelled());
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
