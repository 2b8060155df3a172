use std::time::Duration;

use gloo::timers::callback::Timeout;
use internlink_core::Scheduler;

/// Browser `setTimeout`. Dropping the
/// returned [`Timeout`] clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
  type Handle = Timeout;

  fn schedule(
    &self,
    delay: Duration,
    task: Box<dyn FnOnce()>
  ) -> Timeout {
    Timeout::new(millis(delay), task)
  }
}

/// Runs `task` once after `delay` for the
/// life of the page.
pub fn run_after<F>(delay: Duration, task: F)
where
  F: FnOnce() + 'static
{
  Timeout::new(millis(delay), task).forget();
}

pub fn millis(delay: Duration) -> u32 {
  u32::try_from(delay.as_millis())
    .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn millis_saturates() {
    assert_eq!(
      millis(Duration::from_millis(300)),
      300
    );
    assert_eq!(
      millis(Duration::from_secs(
        u64::MAX
      )),
      u32::MAX
    );
  }
}
