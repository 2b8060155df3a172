use std::cell::RefCell;
use std::time::Duration;

/// One-shot timers. Dropping a handle
/// cancels its task if it has not run yet.
pub trait Scheduler {
  type Handle;

  fn schedule(
    &self,
    delay: Duration,
    task: Box<dyn FnOnce()>
  ) -> Self::Handle;
}

/// Runs an action once the trigger has been
/// quiet for `quiet`.
///
/// Each trigger replaces the pending handle,
/// which cancels the earlier timer.
pub struct Debouncer<S: Scheduler> {
  scheduler: S,
  quiet:     Duration,
  pending:   RefCell<Option<S::Handle>>
}

impl<S: Scheduler> Debouncer<S> {
  pub fn new(
    scheduler: S,
    quiet: Duration
  ) -> Self {
    Self {
      scheduler,
      quiet,
      pending: RefCell::new(None)
    }
  }

  pub fn quiet(&self) -> Duration {
    self.quiet
  }

  pub fn trigger<F>(&self, action: F)
  where
    F: FnOnce() + 'static
  {
    // Drop the old handle before arming so
    // only one timer is live at a time.
    drop(self.pending.borrow_mut().take());
    let handle = self
      .scheduler
      .schedule(self.quiet, Box::new(action));
    *self.pending.borrow_mut() =
      Some(handle);
  }

  pub fn cancel(&self) {
    drop(self.pending.borrow_mut().take());
  }
}
