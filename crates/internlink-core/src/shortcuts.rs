use crate::routes::CREATE_INTERNSHIP_PATH;

pub const SEARCH_FIELD_SELECTOR: &str =
  "input[name=\"search\"]";

/// Global key bindings. Both suppress the
/// browser default.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Shortcut {
  /// Ctrl+N
  CreateInternship,
  /// Ctrl+/
  FocusSearch
}

impl Shortcut {
  pub fn from_key(
    ctrl: bool,
    key: &str
  ) -> Option<Self> {
    if !ctrl {
      return None;
    }

    match key {
      | "n" => Some(Self::CreateInternship),
      | "/" => Some(Self::FocusSearch),
      | _ => None
    }
  }

  pub fn action(self) -> ShortcutAction {
    match self {
      | Self::CreateInternship => {
        ShortcutAction::Navigate(
          CREATE_INTERNSHIP_PATH
        )
      }
      | Self::FocusSearch => {
        ShortcutAction::Focus(
          SEARCH_FIELD_SELECTOR
        )
      }
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ShortcutAction {
  Navigate(&'static str),
  Focus(&'static str)
}
