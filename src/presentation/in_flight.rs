use futures::future::{AbortHandle, Abortable};
use std::future::Future;

/// Holds the abort handle of the latest fetch a view started. Starting a new
/// fetch aborts the previous one, so a superseded response never resolves.
#[derive(Debug, Default)]
pub struct InFlight {
    handle: Option<AbortHandle>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future`, aborting whatever was started before.
    pub fn start<F: Future>(&mut self, future: F) -> Abortable<F> {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.handle = Some(handle);
        Abortable::new(future, registration)
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_aborted())
    }
}
