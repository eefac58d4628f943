// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use crate::logic::store::RecordStore;
use crate::models::record::FormRecord;
use crate::ui::components::form::{self, FormEvent, FormModel, FormMsg};
use crate::ui::components::records_table::RecordsMsg;

/// The two navigable views of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Form,
    Records,
}

/// Blocking acknowledgment shown as a modal until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
    /// Modal window title.
    pub title: &'static str,
    /// Text shown in the modal body.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Currently shown view.
    pub view: View,
    /// Submission form state.
    pub form: FormModel,
    /// Cached copy of the stored records for the table view.
    pub records: Vec<FormRecord>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Pending blocking acknowledgment, if any.
    pub ack: Option<Ack>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    ViewSelected(View),
    Form(FormMsg),
    Records(RecordsMsg),
    SaveCompleted(Result<(), String>),
    RecordsLoaded(Vec<FormRecord>),
    ClearCompleted(Result<(), String>),
    DismissAck,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    AppendRecord(FormRecord),
    LoadRecords,
    ClearRecords,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::ViewSelected(view) => {
            model.view = view;
            if view == View::Records {
                // Read the slot on demand so the table reflects disk state.
                cmds.push(Command::LoadRecords);
            }
        }
        Msg::Form(m) => match form::update(&mut model.form, m) {
            Some(FormEvent::Submitted(record)) => cmds.push(Command::AppendRecord(record)),
            Some(FormEvent::Rejected) => surface_ack(
                model,
                Ack {
                    title: "Validation error",
                    message: "Please fix the highlighted fields and try again.".into(),
                    is_error: true,
                },
            ),
            None => {}
        },
        Msg::Records(m) => match m {
            RecordsMsg::RefreshRequested => cmds.push(Command::LoadRecords),
            RecordsMsg::ClearRequested => cmds.push(Command::ClearRecords),
        },
        Msg::SaveCompleted(result) => match result {
            Ok(()) => surface_ack(
                model,
                Ack {
                    title: "Success",
                    message: "Form submitted successfully!".into(),
                    is_error: false,
                },
            ),
            Err(err) => surface_ack(
                model,
                Ack {
                    title: "Storage error",
                    message: format!("Failed to save submission:\n\n{err}"),
                    is_error: true,
                },
            ),
        },
        Msg::RecordsLoaded(records) => model.records = records,
        Msg::ClearCompleted(result) => match result {
            Ok(()) => {
                model.records.clear();
                model.status = Some("Stored submissions cleared.".into());
            }
            Err(err) => surface_ack(
                model,
                Ack {
                    title: "Storage error",
                    message: format!("Failed to clear submissions:\n\n{err}"),
                    is_error: true,
                },
            ),
        },
        Msg::DismissAck => model.ack = None,
    }
}

/// Execute a command against the store and return the resulting message.
pub fn run_command(cmd: Command, store: &RecordStore) -> Msg {
    match cmd {
        Command::AppendRecord(record) => {
            Msg::SaveCompleted(store.append(record).map_err(|e| e.to_string()))
        }
        Command::LoadRecords => Msg::RecordsLoaded(store.load()),
        Command::ClearRecords => Msg::ClearCompleted(store.clear().map_err(|e| e.to_string())),
    }
}

/// Show a blocking acknowledgment and mirror it in the status line.
fn surface_ack(model: &mut AppModel, ack: Ack) {
    model.status = Some(ack.message.clone());
    model.ack = Some(ack);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::Field;
    use tempfile::TempDir;

    fn fill_valid(model: &mut AppModel, cmds: &mut Vec<Command>) {
        for (field, value) in [
            (Field::Name, "Jane Doe"),
            (Field::Email, "Jane@Example.COM"),
            (Field::Number, "8123456789"),
            (Field::Password, "longenough1"),
        ] {
            update(
                model,
                Msg::Form(FormMsg::FieldChanged(field, value.into())),
                cmds,
            );
        }
    }

    #[test]
    fn valid_submit_persists_record_and_acknowledges() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::new(tmp.path().join("form_records.json"));

        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        fill_valid(&mut model, &mut cmds);
        update(&mut model, Msg::Form(FormMsg::SubmitRequested), &mut cmds);

        assert_eq!(cmds.len(), 1, "submit should enqueue an append command");

        let msg = run_command(cmds.pop().unwrap(), &store);
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        let ack = model.ack.expect("acknowledgment expected");
        assert!(!ack.is_error);
        assert_eq!(ack.message, "Form submitted successfully!");

        let stored = store.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "jane@example.com");
    }

    #[test]
    fn invalid_submit_acknowledges_without_commands() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::Form(FormMsg::SubmitRequested), &mut cmds);

        assert!(cmds.is_empty());
        let ack = model.ack.expect("acknowledgment expected");
        assert!(ack.is_error);
        assert_eq!(ack.title, "Validation error");
    }

    #[test]
    fn switching_to_records_view_loads_from_store() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::new(tmp.path().join("form_records.json"));
        store
            .append(FormRecord {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                number: "8123456789".into(),
                password: "longenough1".into(),
            })
            .unwrap();

        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, Msg::ViewSelected(View::Records), &mut cmds);

        assert_eq!(model.view, View::Records);
        assert_eq!(cmds.len(), 1, "records view should trigger a load");

        let msg = run_command(cmds.pop().unwrap(), &store);
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert_eq!(model.records.len(), 1);
        assert_eq!(model.records[0].name, "Jane Doe");
    }

    #[test]
    fn two_submissions_are_kept_in_order() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::new(tmp.path().join("form_records.json"));

        let mut model = AppModel::default();
        for email in ["first@example.com", "second@example.com"] {
            let mut cmds = Vec::new();
            fill_valid(&mut model, &mut cmds);
            update(
                &mut model,
                Msg::Form(FormMsg::FieldChanged(Field::Email, email.into())),
                &mut cmds,
            );
            update(&mut model, Msg::Form(FormMsg::SubmitRequested), &mut cmds);
            let msg = run_command(cmds.pop().unwrap(), &store);
            update(&mut model, msg, &mut Vec::new());
        }

        let stored = store.load();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].email, "first@example.com");
        assert_eq!(stored[1].email, "second@example.com");
    }

    #[test]
    fn clear_empties_cached_records_and_store() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::new(tmp.path().join("form_records.json"));
        store
            .append(FormRecord {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                number: "8123456789".into(),
                password: "longenough1".into(),
            })
            .unwrap();

        let mut model = AppModel {
            records: store.load(),
            ..Default::default()
        };
        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::Records(RecordsMsg::ClearRequested),
            &mut cmds,
        );

        let msg = run_command(cmds.pop().unwrap(), &store);
        update(&mut model, msg, &mut Vec::new());

        assert!(model.records.is_empty());
        assert!(store.load().is_empty());
        assert_eq!(model.status.as_deref(), Some("Stored submissions cleared."));
    }

    #[test]
    fn dismiss_ack_clears_modal() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, Msg::Form(FormMsg::SubmitRequested), &mut cmds);
        assert!(model.ack.is_some());

        update(&mut model, Msg::DismissAck, &mut cmds);

        assert!(model.ack.is_none());
    }
}
