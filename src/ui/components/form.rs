// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submission form refactored to an MVU-friendly shape.
//!
//! Fields re-validate incrementally as the user types, but submit always
//! runs a full-record validation: incremental state alone would let an
//! untouched field slip through.

use eframe::egui;

use crate::models::record::FormRecord;
use crate::models::validation::{self, Field, FieldErrors};

/// UI model for the form, kept free of side effects.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct FormModel {
    name: String,
    email: String,
    number: String,
    password: String,
    errors: FieldErrors,
}

/// Messages emitted by the form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    FieldChanged(Field, String),
    SubmitRequested,
}

/// Outcome of a submit attempt, surfaced to the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// All rules passed; the record is ready to be persisted.
    Submitted(FormRecord),
    /// At least one rule failed; per-field errors are set on the model.
    Rejected,
}

impl FormModel {
    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Number => &self.number,
            Field::Password => &self.password,
        }
    }

    /// Current error text for a field, if it fails its rule.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Snapshot of the field values as a record (not yet normalized).
    pub fn draft(&self) -> FormRecord {
        FormRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            number: self.number.clone(),
            password: self.password.clone(),
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Number => self.number = value,
            Field::Password => self.password = value,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Apply a message to the model. Returns a submit outcome when relevant.
pub fn update(model: &mut FormModel, msg: FormMsg) -> Option<FormEvent> {
    match msg {
        FormMsg::FieldChanged(field, value) => {
            model.set_value(field, value);
            // Re-check just the changed field so feedback tracks typing.
            match validation::validate_field(field, model.value(field)) {
                Some(message) => {
                    model.errors.insert(field, message);
                }
                None => {
                    model.errors.remove(&field);
                }
            }
            None
        }
        FormMsg::SubmitRequested => {
            let draft = model.draft();
            let errors = validation::validate_record(&draft);
            if errors.is_empty() {
                model.reset();
                Some(FormEvent::Submitted(draft))
            } else {
                model.errors = errors;
                Some(FormEvent::Rejected)
            }
        }
    }
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &FormModel) -> Vec<FormMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("form_grid")
            .num_columns(2)
            .spacing(egui::vec2(8.0, 10.0))
            .min_col_width(90.0)
            .show(ui, |ui| {
                for field in Field::ALL {
                    ui.label(field.label());
                    render_field_input(ui, model, field, &mut msgs);
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let submit = egui::Button::new(format!(
            "{} Submit",
            egui_phosphor::regular::PAPER_PLANE_TILT
        ));
        if ui.add(submit).clicked() {
            msgs.push(FormMsg::SubmitRequested);
        }
    });

    msgs
}

/// Render one input with its inline error text underneath.
fn render_field_input(
    ui: &mut egui::Ui,
    model: &FormModel,
    field: Field,
    msgs: &mut Vec<FormMsg>,
) {
    ui.vertical(|ui| {
        let mut value = model.value(field).to_string();
        let edit = egui::TextEdit::singleline(&mut value)
            .hint_text(hint_for(field))
            .password(matches!(field, Field::Password))
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            msgs.push(FormMsg::FieldChanged(field, value));
        }

        if let Some(error) = model.error(field) {
            ui.label(
                egui::RichText::new(error)
                    .small()
                    .color(ui.visuals().error_fg_color),
            );
        }
    });
}

fn hint_for(field: Field) -> &'static str {
    match field {
        Field::Name => "e.g., Jane Doe",
        Field::Email => "e.g., jane@example.com",
        Field::Number => "10 digits, starting with 7, 8, or 9",
        Field::Password => "At least 8 characters",
    }
}
