use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::warn;

use crate::platform::Timer;

pub const DEFAULT_WAIT: Duration = Duration::from_millis(500);

/// A callback that only fires once calls have stopped for `wait`.
/// The call that fires receives the arguments of the most recent invocation.
pub struct Debounced<A, T: Timer> {
    timer: T,
    callback: Rc<dyn Fn(A)>,
    wait: Duration,
    pending: Cell<Option<T::Handle>>,
}

impl<A: 'static, T: Timer> Debounced<A, T> {
    /// Cancel any pending call and schedule a new one `wait` from now.
    pub fn call(&self, args: A) {
        self.cancel();

        let callback = Rc::clone(&self.callback);
        match self.timer.schedule(self.wait, Box::new(move || callback(args))) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => warn!("Failed to schedule debounced call: {}", e),
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

pub fn debounce<A, T, F>(timer: T, callback: F, wait: Duration) -> Debounced<A, T>
where
    T: Timer,
    F: Fn(A) + 'static,
{
    Debounced {
        timer,
        callback: Rc::new(callback),
        wait,
        pending: Cell::new(None),
    }
}
