//! Browser-free behavior for the internlink page controller.
//!
//! Everything here runs natively so it can be tested without a DOM. The
//! `internlink_web` crate binds these pieces to real elements.

pub mod config;
pub mod debounce;
pub mod draft;
pub mod error;
pub mod filter;
pub mod notice;
pub mod routes;
pub mod shortcuts;
pub mod submit;
pub mod table;
pub mod testing;
pub mod upload;
pub mod widgets;
pub mod wire;

pub use config::BehaviorConfig;
pub use debounce::{
  Debouncer,
  Scheduler
};
pub use draft::{
  DraftKey,
  DraftStore,
  Drafts,
  FormDraft,
  MemoryStore
};
pub use error::RequestFailure;
pub use notice::{
  Notice,
  Severity
};
pub use wire::{
  DashboardStats,
  StatusChange,
  StatusUpdateResponse
};
