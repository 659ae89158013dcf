//! Records table controller and renderer.
//!
//! [`TableView`] owns the view state and translates user actions into
//! service calls. A failed initial fetch blocks the view behind retry;
//! failed delete/migrate/seed actions leave the current records on
//! screen and post a transient notice.

use crate::state::{Notice, Prompt, ViewState};
use gradbook_core::{DocumentId, RecordStatus};
use gradbook_service::RecordService;
use std::sync::Arc;

/// Records table controller.
pub struct TableView {
    service: RecordService,
    prompt: Arc<dyn Prompt>,
    state: ViewState,
    notice: Option<Notice>,
}

impl TableView {
    /// Create a view in its initial loading state.
    ///
    /// No fetch happens until [`mount`](Self::mount).
    pub fn new(service: RecordService, prompt: Arc<dyn Prompt>) -> Self {
        TableView {
            service,
            prompt,
            state: ViewState::Loading,
            notice: None,
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Take the pending transient notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Initial fetch. `Loading` to `Ready` on success, `Error` on failure.
    pub fn mount(&mut self) {
        self.load(true);
    }

    /// Re-attempt the fetch from the error state.
    pub fn retry(&mut self) {
        if !self.state.is_error() {
            tracing::debug!(target: "gradbook::view", "retry ignored outside error state");
            return;
        }
        self.load(true);
    }

    /// Full re-fetch through the loading state.
    pub fn refresh(&mut self) {
        self.load(true);
    }

    /// Delete a record after confirmation.
    ///
    /// On success the record is removed from the in-memory list locally;
    /// there is no re-fetch. On failure the list stays untouched and a
    /// failure notice is posted.
    pub fn delete_record(&mut self, id: &DocumentId) {
        let name = {
            let ViewState::Ready { records, .. } = &self.state else {
                tracing::debug!(target: "gradbook::view", "delete ignored outside ready state");
                return;
            };
            match records.iter().find(|record| &record.store_id == id) {
                Some(record) => record.name.clone(),
                None => {
                    tracing::debug!(target: "gradbook::view", id = %id, "delete of unknown record ignored");
                    return;
                }
            }
        };

        if !self
            .prompt
            .confirm(&format!("Delete graduate \"{name}\"?"))
        {
            return;
        }

        match self.service.delete(id) {
            Ok(()) => {
                if let ViewState::Ready { records, .. } = &mut self.state {
                    records.retain(|record| &record.store_id != id);
                }
                self.notice = Some(Notice::success(format!("Deleted \"{name}\".")));
            }
            Err(err) => {
                self.notice = Some(Notice::failure(format!("Failed to delete \"{name}\": {err}")));
            }
        }
    }

    /// Migrate the local cache into the store.
    ///
    /// Ignored while a migration is already marked in flight. Posts one
    /// of three summary notices; a successful migration of at least one
    /// record triggers a silent re-fetch.
    pub fn migrate(&mut self) {
        {
            let ViewState::Ready { migrating, .. } = &mut self.state else {
                tracing::debug!(target: "gradbook::view", "migrate ignored outside ready state");
                return;
            };
            if *migrating {
                tracing::debug!(target: "gradbook::view", "migration already in flight");
                return;
            }
            *migrating = true;
        }

        match self.service.migrate() {
            Ok(report) if report.total == 0 => {
                self.notice = Some(Notice::info(
                    "No records found in the local cache. Seed the demonstration data first.",
                ));
            }
            Ok(report) if report.migrated == 0 => {
                self.notice = Some(Notice::info(
                    "Local cache records were found but none were migrated.",
                ));
            }
            Ok(report) => {
                self.notice = Some(Notice::success(format!(
                    "Migrated {} records from the local cache.",
                    report.migrated
                )));
                // Silent re-fetch; also clears the migrating flag.
                self.load(false);
                return;
            }
            Err(err) => {
                self.notice = Some(Notice::failure(format!("Migration failed: {err}")));
            }
        }

        if let ViewState::Ready { migrating, .. } = &mut self.state {
            *migrating = false;
        }
    }

    /// Seed the demonstration records after confirmation.
    ///
    /// Runs through the loading state and ends in a full re-fetch. On
    /// failure the prior records are restored.
    pub fn create_initial_data(&mut self) {
        if !matches!(self.state, ViewState::Ready { .. }) {
            tracing::debug!(target: "gradbook::view", "seed ignored outside ready state");
            return;
        }
        if !self.prompt.confirm(
            "Seed the demonstration records? They are written to the local cache first, then to the store.",
        ) {
            return;
        }

        let prior = std::mem::replace(&mut self.state, ViewState::Loading);
        match self.service.create_initial_data() {
            Ok(()) => {
                self.notice = Some(Notice::success("Demonstration records created."));
                self.load(true);
            }
            Err(err) => {
                self.notice = Some(Notice::failure(format!(
                    "Failed to create demonstration records: {err}"
                )));
                self.state = prior;
            }
        }
    }

    /// Display-only edit affordance: format a record's details.
    pub fn inspect(&self, id: &DocumentId) -> Option<String> {
        self.state
            .records()?
            .iter()
            .find(|record| &record.store_id == id)
            .map(|record| format!("Edit: {}\nStore ID: {}", record.name, record.store_id))
    }

    /// Render the current state as text.
    pub fn render(&self) -> String {
        render(&self.state)
    }

    fn load(&mut self, show_loading: bool) {
        if show_loading {
            self.state = ViewState::Loading;
        }
        match self.service.list() {
            Ok(records) => {
                self.state = ViewState::Ready {
                    records,
                    migrating: false,
                };
            }
            Err(err) => {
                self.state = ViewState::Error {
                    message: format!("Failed to load records: {err}"),
                };
            }
        }
    }
}

/// Badge text for a status cell.
pub fn status_badge(status: RecordStatus) -> &'static str {
    status.as_str()
}

/// Render a view state as plain text.
///
/// The ready state renders the table with an index column, a status
/// badge per record, and the footer summary with per-status counts. A
/// record counts as under review unless its status is literally
/// approved.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading graduate records...\n".to_string(),
        ViewState::Error { message } => {
            format!("Error: {message}\nRetry to reload.\n")
        }
        ViewState::Ready { records, migrating } => {
            let mut out = String::new();
            if *migrating {
                out.push_str("Migrating from local cache...\n");
            }

            if records.is_empty() {
                out.push_str("No records available. Use the control actions to add data.\n");
            } else {
                let header = [
                    "#",
                    "Code",
                    "Name",
                    "Department",
                    "Year",
                    "Grade",
                    "Status",
                ];
                let rows: Vec<[String; 7]> = records
                    .iter()
                    .enumerate()
                    .map(|(index, record)| {
                        [
                            (index + 1).to_string(),
                            record.code.clone(),
                            record.name.clone(),
                            record.department.clone(),
                            record.year.clone(),
                            record.grade.clone(),
                            status_badge(record.status).to_string(),
                        ]
                    })
                    .collect();

                let mut widths: [usize; 7] = header.map(str::len);
                for row in &rows {
                    for (width, cell) in widths.iter_mut().zip(row.iter()) {
                        *width = (*width).max(cell.len());
                    }
                }

                push_row(&mut out, &header.map(str::to_string), &widths);
                for row in &rows {
                    push_row(&mut out, row, &widths);
                }
            }

            let approved = records
                .iter()
                .filter(|record| record.status.is_approved())
                .count();
            out.push_str(&format!("Total graduates: {}\n", records.len()));
            out.push_str(&format!(
                "Approved: {} | Under Review: {}\n",
                approved,
                records.len() - approved
            ));
            out
        }
    }
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths.iter()) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
