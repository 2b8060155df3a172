//! Deterministic [`Scheduler`] for driving
//! timers from tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{
  Rc,
  Weak
};
use std::time::Duration;

use crate::debounce::Scheduler;

type TaskKey = (Duration, u64);

#[derive(Default)]
struct Queue {
  now:     Duration,
  next_id: u64,
  tasks:   BTreeMap<TaskKey, Box<dyn FnOnce()>>
}

/// Virtual clock: tasks only run inside
/// [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
  queue: Rc<RefCell<Queue>>
}

pub struct ManualHandle {
  key:   TaskKey,
  queue: Weak<RefCell<Queue>>
}

impl Drop for ManualHandle {
  fn drop(&mut self) {
    if let Some(queue) = self.queue.upgrade()
    {
      let removed = queue
        .borrow_mut()
        .tasks
        .remove(&self.key);
      drop(removed);
    }
  }
}

impl ManualScheduler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn pending(&self) -> usize {
    self.queue.borrow().tasks.len()
  }

  /// Runs every task due within `by`, in due
  /// order, with the clock set to each due
  /// time while it runs.
  pub fn advance(&self, by: Duration) {
    let target =
      self.queue.borrow().now + by;

    loop {
      let next = {
        let mut queue =
          self.queue.borrow_mut();
        let due_key = queue
          .tasks
          .keys()
          .next()
          .copied()
          .filter(|(due, _)| *due <= target);
        due_key.and_then(|key| {
          queue.now = key.0;
          queue.tasks.remove(&key)
        })
      };

      match next {
        | Some(task) => task(),
        | None => break
      }
    }

    self.queue.borrow_mut().now = target;
  }
}

impl Scheduler for ManualScheduler {
  type Handle = ManualHandle;

  fn schedule(
    &self,
    delay: Duration,
    task: Box<dyn FnOnce()>
  ) -> ManualHandle {
    let mut queue = self.queue.borrow_mut();
    let key = (queue.now + delay, queue.next_id);
    queue.next_id += 1;
    queue.tasks.insert(key, task);

    ManualHandle {
      key,
      queue: Rc::downgrade(&self.queue)
    }
  }
}
