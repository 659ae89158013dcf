//! Fixed demonstration records.

use gradbook_core::{RecordDraft, RecordStatus};
use once_cell::sync::Lazy;

static DEMONSTRATION_RECORDS: Lazy<Vec<RecordDraft>> = Lazy::new(|| {
    vec![
        RecordDraft {
            code: "20231001".into(),
            name: "Ahmed Mohamed".into(),
            department: "Computer Science".into(),
            year: "2023".into(),
            grade: "Excellent".into(),
            status: RecordStatus::Approved,
            feedback: "Outstanding student in programming".into(),
        },
        RecordDraft {
            code: "20231002".into(),
            name: "Sara Abdullah".into(),
            department: "Engineering".into(),
            year: "2023".into(),
            grade: "Very Good".into(),
            status: RecordStatus::UnderReview,
            feedback: "Excellent in projects".into(),
        },
    ]
});

/// The two-record demonstration list written by
/// [`RecordService::create_initial_data`](crate::RecordService::create_initial_data).
pub fn demonstration_records() -> Vec<RecordDraft> {
    DEMONSTRATION_RECORDS.clone()
}
