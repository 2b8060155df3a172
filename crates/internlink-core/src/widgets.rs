//! Seam between the controller and the page's
//! UI toolkit.

use std::rc::Rc;
use std::time::Duration;

use crate::debounce::Scheduler;

/// Widget behaviors the controller asks the
/// toolkit for. Generic over the element type
/// so it can be driven without a DOM.
pub trait WidgetToolkit {
  type Element;

  fn tooltip(&self, element: &Self::Element);

  fn popover(&self, element: &Self::Element);

  fn close_alert(
    &self,
    element: &Self::Element
  );

  fn toggle_collapse(
    &self,
    element: &Self::Element
  );

  /// False once the element has left the
  /// page, e.g. dismissed by its close button.
  fn is_shown(
    &self,
    element: &Self::Element
  ) -> bool;
}

/// Closes the alerts `alerts` yields once
/// `delay` has passed. They are gathered when
/// the timer fires, and ones already gone are
/// skipped.
pub fn close_alerts_after<S, T, A>(
  scheduler: &S,
  toolkit: Rc<T>,
  delay: Duration,
  alerts: A
) -> S::Handle
where
  S: Scheduler,
  T: WidgetToolkit + 'static,
  A: FnOnce() -> Vec<T::Element> + 'static
{
  scheduler.schedule(
    delay,
    Box::new(move || {
      for alert in alerts() {
        if toolkit.is_shown(&alert) {
          toolkit.close_alert(&alert);
        }
      }
    })
  )
}

/// Widgets activated from a `data-bs-toggle`
/// value at load.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum WidgetKind {
  Tooltip,
  Popover
}

impl WidgetKind {
  pub const ALL: [WidgetKind; 2] =
    [Self::Tooltip, Self::Popover];

  pub fn from_toggle(
    value: &str
  ) -> Option<Self> {
    match value {
      | "tooltip" => Some(Self::Tooltip),
      | "popover" => Some(Self::Popover),
      | _ => None
    }
  }

  pub fn toggle_value(
    self
  ) -> &'static str {
    match self {
      | Self::Tooltip => "tooltip",
      | Self::Popover => "popover"
    }
  }

  /// Attribute selector matching this kind.
  pub fn selector(self) -> String {
    format!(
      "[data-bs-toggle=\"{}\"]",
      self.toggle_value()
    )
  }

  pub fn activate<T: WidgetToolkit>(
    self,
    toolkit: &T,
    element: &T::Element
  ) {
    match self {
      | Self::Tooltip => {
        toolkit.tooltip(element)
      }
      | Self::Popover => {
        toolkit.popover(element)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::*;
  use crate::testing::ManualScheduler;

  #[derive(Default)]
  struct Recorder {
    calls:  RefCell<Vec<String>>,
    hidden: RefCell<Vec<&'static str>>
  }

  impl WidgetToolkit for Recorder {
    type Element = &'static str;

    fn tooltip(&self, element: &&'static str) {
      self
        .calls
        .borrow_mut()
        .push(format!("tooltip:{element}"));
    }

    fn popover(&self, element: &&'static str) {
      self
        .calls
        .borrow_mut()
        .push(format!("popover:{element}"));
    }

    fn close_alert(
      &self,
      element: &&'static str
    ) {
      self
        .calls
        .borrow_mut()
        .push(format!("close:{element}"));
    }

    fn toggle_collapse(
      &self,
      element: &&'static str
    ) {
      self
        .calls
        .borrow_mut()
        .push(format!("collapse:{element}"));
    }

    fn is_shown(
      &self,
      element: &&'static str
    ) -> bool {
      !self.hidden.borrow().contains(element)
    }
  }

  #[test]
  fn toggle_values_dispatch_to_toolkit() {
    let toolkit = Recorder::default();
    for (value, element) in [
      ("tooltip", "help-icon"),
      ("popover", "info-badge"),
      ("modal", "ignored")
    ] {
      if let Some(kind) =
        WidgetKind::from_toggle(value)
      {
        kind.activate(&toolkit, &element);
      }
    }

    assert_eq!(
      *toolkit.calls.borrow(),
      vec![
        "tooltip:help-icon".to_string(),
        "popover:info-badge".to_string()
      ]
    );
  }

  #[test]
  fn selectors_match_toggle_attribute() {
    let selectors: Vec<String> =
      WidgetKind::ALL
        .iter()
        .map(|kind| kind.selector())
        .collect();
    assert_eq!(
      selectors,
      vec![
        "[data-bs-toggle=\"tooltip\"]",
        "[data-bs-toggle=\"popover\"]"
      ]
    );
  }

  #[test]
  fn alerts_close_when_the_delay_elapses()
  {
    let clock = ManualScheduler::new();
    let toolkit = Rc::new(Recorder::default());
    let _handle = close_alerts_after(
      &clock,
      toolkit.clone(),
      Duration::from_secs(5),
      || vec!["flash", "saved"]
    );

    clock.advance(Duration::from_millis(
      4999
    ));
    assert!(toolkit.calls.borrow().is_empty());

    clock.advance(Duration::from_millis(1));
    assert_eq!(
      *toolkit.calls.borrow(),
      vec![
        "close:flash".to_string(),
        "close:saved".to_string()
      ]
    );
  }

  #[test]
  fn dismissed_alerts_are_skipped() {
    let clock = ManualScheduler::new();
    let toolkit = Rc::new(Recorder::default());
    let _handle = close_alerts_after(
      &clock,
      toolkit.clone(),
      Duration::from_secs(5),
      || vec!["flash", "saved"]
    );

    toolkit.hidden.borrow_mut().push("flash");
    clock.advance(Duration::from_secs(5));

    assert_eq!(
      *toolkit.calls.borrow(),
      vec!["close:saved".to_string()]
    );
  }

  #[test]
  fn dropped_handle_keeps_alerts_open() {
    let clock = ManualScheduler::new();
    let toolkit = Rc::new(Recorder::default());
    drop(close_alerts_after(
      &clock,
      toolkit.clone(),
      Duration::from_secs(5),
      || vec!["flash"]
    ));

    clock.advance(Duration::from_secs(10));
    assert!(toolkit.calls.borrow().is_empty());
  }
}
