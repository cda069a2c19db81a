use futures::future::{AbortHandle, Abortable};
use leptos::*;
use std::{cell::Cell, cell::RefCell, collections::HashMap, future::Future, rc::Rc};

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cancelled")]
pub struct Cancelled;

impl From<Cancelled> for ApiError {
    fn from(_: Cancelled) -> Self {
        ApiError::cancelled()
    }
}

/// Tracks async work started by a component so it can be dropped when the
/// component unmounts. Results of cancelled work never reach signals.
#[derive(Clone, Default)]
pub struct ComponentLifetime {
    handles: Rc<RefCell<HashMap<u64, AbortHandle>>>,
    next_id: Rc<Cell<u64>>,
    cancelled: Rc<Cell<bool>>,
}

impl ComponentLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lifetime cancelled by the current reactive owner's cleanup.
    pub fn bind() -> Self {
        let lifetime = Self::new();
        let on_unmount = lifetime.clone();
        on_cleanup(move || on_unmount.cancel());
        lifetime
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Cancelled> {
        if self.is_cancelled() {
            return Err(Cancelled);
        }
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        let (handle, registration) = AbortHandle::new_pair();
        self.handles.borrow_mut().insert(id, handle);
        let result = Abortable::new(future, registration).await;
        self.handles.borrow_mut().remove(&id);
        result.map_err(|_| Cancelled)
    }

    /// Work started through `run` that has not finished yet.
    pub fn in_flight(&self) -> usize {
        self.handles.borrow().len()
    }

    pub fn spawn(&self, future: impl Future<Output = ()> + 'static) {
        let lifetime = self.clone();
        spawn_local(async move {
            if lifetime.run(future).await.is_err() {
                log::debug!("dropped work of an unmounted component");
            }
        });
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        for (_, handle) in self.handles.borrow_mut().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{executor::block_on, future::pending, pin_mut, poll};

    #[test]
    fn run_passes_output_through() {
        let lifetime = ComponentLifetime::new();
        assert_eq!(block_on(lifetime.run(async { 7 })), Ok(7));
    }

    #[test]
    fn finished_work_releases_its_handle() {
        let lifetime = ComponentLifetime::new();
        for n in 0..5 {
            assert_eq!(block_on(lifetime.run(async move { n })), Ok(n));
        }
        assert_eq!(lifetime.in_flight(), 0);

        block_on(async {
            let work = lifetime.run(pending::<()>());
            pin_mut!(work);
            assert!(poll!(work.as_mut()).is_pending());
            assert_eq!(lifetime.in_flight(), 1);
        });
    }

    #[test]
    fn cancel_aborts_in_flight_work() {
        let lifetime = ComponentLifetime::new();
        block_on(async {
            let work = lifetime.run(pending::<()>());
            pin_mut!(work);
            assert!(poll!(work.as_mut()).is_pending());
            lifetime.cancel();
            assert_eq!(work.await, Err(Cancelled));
        });
    }

    #[test]
    fn work_started_after_cancel_never_runs() {
        let lifetime = ComponentLifetime::new();
        lifetime.cancel();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let result = block_on(lifetime.run(async move { flag.set(true) }));
        assert_eq!(result, Err(Cancelled));
        assert!(!ran.get());
        assert_eq!(ApiError::from(Cancelled).code, "CANCELLED");
    }
}
