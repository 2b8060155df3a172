//! Double-submit guard for form buttons.

use std::time::Duration;

use crate::debounce::Scheduler;

pub const SUBMIT_BUTTON_SELECTOR: &str =
  "button[type=\"submit\"]";
pub const PROCESSING_HTML: &str = concat!(
  "<span class=\"spinner-border ",
  "spinner-border-sm me-2\"></span>",
  "Processing..."
);

/// The parts of a submit button the lock
/// touches.
pub trait SubmitButton {
  fn label_html(&self) -> String;

  fn set_label_html(&self, html: &str);

  fn set_disabled(&self, disabled: bool);
}

/// Disables `button` behind a spinner label
/// and restores it after `hold`, whether or
/// not the submission has finished.
pub fn lock_submit<S, B>(
  scheduler: &S,
  button: B,
  hold: Duration
) -> S::Handle
where
  S: Scheduler,
  B: SubmitButton + 'static
{
  let original = button.label_html();
  button.set_label_html(PROCESSING_HTML);
  button.set_disabled(true);

  scheduler.schedule(
    hold,
    Box::new(move || {
      button.set_label_html(&original);
      button.set_disabled(false);
    })
  )
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use super::*;
  use crate::testing::ManualScheduler;

  #[derive(Clone)]
  struct Button {
    state: Rc<RefCell<(String, bool)>>
  }

  impl Button {
    fn new(label: &str) -> Self {
      Self {
        state: Rc::new(RefCell::new((
          label.to_string(),
          false
        )))
      }
    }

    fn snapshot(&self) -> (String, bool) {
      self.state.borrow().clone()
    }
  }

  impl SubmitButton for Button {
    fn label_html(&self) -> String {
      self.state.borrow().0.clone()
    }

    fn set_label_html(&self, html: &str) {
      self.state.borrow_mut().0 =
        html.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
      self.state.borrow_mut().1 = disabled;
    }
  }

  #[test]
  fn button_reverts_after_hold() {
    let clock = ManualScheduler::new();
    let button = Button::new("Save");
    let _handle = lock_submit(
      &clock,
      button.clone(),
      Duration::from_secs(3)
    );

    assert_eq!(
      button.snapshot(),
      (PROCESSING_HTML.to_string(), true)
    );

    clock.advance(Duration::from_millis(
      2999
    ));
    assert!(button.snapshot().1);

    clock.advance(Duration::from_millis(1));
    assert_eq!(
      button.snapshot(),
      ("Save".to_string(), false)
    );
  }

  #[test]
  fn hold_follows_config() {
    let clock = ManualScheduler::new();
    let button = Button::new(
      "<i class=\"fas fa-save\"></i> Save"
    );
    let _handle = lock_submit(
      &clock,
      button.clone(),
      Duration::from_millis(500)
    );

    clock.advance(Duration::from_millis(
      500
    ));
    assert_eq!(
      button.snapshot(),
      (
        "<i class=\"fas fa-save\"></i> Save"
          .to_string(),
        false
      )
    );
    assert_eq!(clock.pending(), 0);
  }
}
