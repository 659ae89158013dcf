//! View state, notices, and the confirmation capability.

use gradbook_core::GraduateRecord;

/// Exhaustive view state.
///
/// One tag instead of three independent flags: a view cannot be both
/// errored and migrating, and a migration flag cannot outlive the record
/// list it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A full fetch is in flight.
    Loading,
    /// The last fetch failed; only retry leaves this state.
    Error { message: String },
    /// Records are on screen; `migrating` guards re-entrant migration.
    Ready {
        records: Vec<GraduateRecord>,
        migrating: bool,
    },
}

impl ViewState {
    /// The on-screen records, when any.
    pub fn records(&self) -> Option<&[GraduateRecord]> {
        match self {
            ViewState::Ready { records, .. } => Some(records),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error { .. })
    }
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Info,
}

/// A transient, dismissible message shown after a user action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Confirmation capability for destructive or expensive actions.
///
/// Injected so tests (and non-interactive shells) decide without a real
/// dialog. Closures implement it directly.
pub trait Prompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Prompt for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Prompt that approves everything.
pub struct AlwaysConfirm;

impl Prompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
