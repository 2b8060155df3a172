use std::rc::Rc;

use internlink_core::BehaviorConfig;
use web_sys::{
  Document,
  Window
};

/// Everything a behavior needs from the page
/// it is bound to.
pub struct Page<T> {
  pub window:   Window,
  pub document: Document,
  pub toolkit:  Rc<T>,
  pub config:   Rc<BehaviorConfig>
}

impl<T> Clone for Page<T> {
  fn clone(&self) -> Self {
    Self {
      window:   self.window.clone(),
      document: self.document.clone(),
      toolkit:  self.toolkit.clone(),
      config:   self.config.clone()
    }
  }
}

impl<T> Page<T> {
  pub fn new(
    window: Window,
    document: Document,
    toolkit: T,
    config: BehaviorConfig
  ) -> Self {
    Self {
      window,
      document,
      toolkit: Rc::new(toolkit),
      config: Rc::new(config)
    }
  }

  /// The running browser page, if there is
  /// one.
  pub fn current(
    toolkit: T,
    config: BehaviorConfig
  ) -> Option<Self> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some(Self::new(
      window, document, toolkit, config
    ))
  }
}
