//! Presentation layer.
//!
//! A headless rendition of the records table: [`TableView`] drives the
//! record service in response to user actions and owns the single piece
//! of UI state, an exhaustive [`ViewState`] tag. Rendering is a pure
//! function from state to text, so any shell (terminal, test harness)
//! can display it.
//!
//! Confirmation prompts are an injected [`Prompt`] capability; failures
//! surface as transient [`Notice`]s rather than errors.

pub mod state;
pub mod table;

pub use state::{AlwaysConfirm, Notice, NoticeKind, Prompt, ViewState};
pub use table::{render, status_badge, TableView};
