use crate::debounce::{
  Debouncer,
  Scheduler
};

pub const AUTO_FILTER_ATTR: &str =
  "data-auto-filter";
pub const SEARCH_INPUT_SELECTOR: &str =
  ".search-input";
pub const AUTO_FILTER_SELECT_SELECTOR: &str =
  ".auto-filter-select";
pub const LOADING_INDICATOR_CLASS: &str =
  "filter-loading";

/// Search inputs only auto-submit when the
/// attribute is exactly `"true"`.
pub fn auto_filter_enabled(
  attr: Option<&str>
) -> bool {
  attr == Some("true")
}

/// The filter form a control belongs to.
pub trait FilterForm {
  /// `data-auto-filter` on the control that
  /// fired.
  fn auto_filter_attr(&self) -> Option<String>;

  fn has_loading_indicator(&self) -> bool;

  fn show_loading_indicator(&self);

  fn submit(&self);
}

/// Submits at once, adding the loading
/// indicator only if there is none yet.
pub fn submit_filter<F: FilterForm>(form: &F) {
  if !form.has_loading_indicator() {
    form.show_loading_indicator();
  }
  form.submit();
}

/// Search keystrokes: submit once typing has
/// paused, if the input opted in by then.
pub fn on_search_input<S, F>(
  debouncer: &Debouncer<S>,
  form: F
) where
  S: Scheduler,
  F: FilterForm + 'static
{
  debouncer.trigger(move || {
    if auto_filter_enabled(
      form.auto_filter_attr().as_deref()
    ) {
      submit_filter(&form);
    }
  });
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;
  use std::time::Duration;

  use super::*;
  use crate::testing::ManualScheduler;

  #[derive(Default)]
  struct State {
    attr:       Option<String>,
    indicators: u32,
    submits:    u32
  }

  #[derive(Clone, Default)]
  struct Form {
    state: Rc<RefCell<State>>
  }

  impl Form {
    fn opted_in() -> Self {
      let form = Self::default();
      form.state.borrow_mut().attr =
        Some("true".to_string());
      form
    }

    fn counts(&self) -> (u32, u32) {
      let state = self.state.borrow();
      (state.indicators, state.submits)
    }
  }

  impl FilterForm for Form {
    fn auto_filter_attr(
      &self
    ) -> Option<String> {
      self.state.borrow().attr.clone()
    }

    fn has_loading_indicator(&self) -> bool {
      self.state.borrow().indicators > 0
    }

    fn show_loading_indicator(&self) {
      self.state.borrow_mut().indicators += 1;
    }

    fn submit(&self) {
      self.state.borrow_mut().submits += 1;
    }
  }

  #[test]
  fn select_change_submits_immediately() {
    let form = Form::default();
    submit_filter(&form);
    assert_eq!(form.counts(), (1, 1));
  }

  #[test]
  fn loading_indicator_is_added_once() {
    let form = Form::default();
    submit_filter(&form);
    submit_filter(&form);
    assert_eq!(form.counts(), (1, 2));
  }

  #[test]
  fn typing_submits_after_the_pause() {
    let clock = ManualScheduler::new();
    let debouncer = Debouncer::new(
      clock.clone(),
      Duration::from_millis(300)
    );
    let form = Form::opted_in();

    for _ in 0..4 {
      on_search_input(&debouncer, form.clone());
      clock.advance(Duration::from_millis(
        100
      ));
    }
    assert_eq!(form.counts(), (0, 0));

    clock.advance(Duration::from_millis(
      200
    ));
    assert_eq!(form.counts(), (1, 1));
  }

  #[test]
  fn opt_in_is_read_when_the_timer_fires()
  {
    let clock = ManualScheduler::new();
    let debouncer = Debouncer::new(
      clock.clone(),
      Duration::from_millis(300)
    );
    let form = Form::opted_in();

    on_search_input(&debouncer, form.clone());
    form.state.borrow_mut().attr =
      Some("false".to_string());
    clock.advance(Duration::from_millis(
      300
    ));

    assert_eq!(form.counts(), (0, 0));
  }

  #[test]
  fn only_literal_true_enables() {
    assert!(auto_filter_enabled(Some(
      "true"
    )));
    assert!(!auto_filter_enabled(Some(
      "TRUE"
    )));
    assert!(!auto_filter_enabled(Some("")));
    assert!(!auto_filter_enabled(None));
  }
}
