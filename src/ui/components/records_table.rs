// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only table of stored submissions.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::record::FormRecord;
use crate::models::validation::Field;

/// Messages emitted by the records view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordsMsg {
    /// Re-read the slot from disk.
    RefreshRequested,
    /// Drop the slot entirely (external reset path).
    ClearRequested,
}

/// Render every stored record as a row, or a placeholder when empty.
pub fn view(ui: &mut egui::Ui, records: &[FormRecord]) -> Vec<RecordsMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if ui
            .button(format!(
                "{} Refresh",
                egui_phosphor::regular::ARROWS_CLOCKWISE
            ))
            .clicked()
        {
            msgs.push(RecordsMsg::RefreshRequested);
        }
        if ui
            .button(format!(
                "{} Clear stored data",
                egui_phosphor::regular::TRASH_SIMPLE
            ))
            .on_hover_text("Remove every stored submission")
            .clicked()
        {
            msgs.push(RecordsMsg::ClearRequested);
        }
    });
    ui.add_space(8.0);

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::remainder().at_least(80.0), Field::ALL.len())
        .header(20.0, |mut header| {
            for field in Field::ALL {
                header.col(|ui| {
                    ui.strong(field.label());
                });
            }
        })
        .body(|mut body| {
            if records.is_empty() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new("No data available")
                                .italics()
                                .color(egui::Color32::from_gray(110)),
                        );
                    });
                    for _ in 1..Field::ALL.len() {
                        row.col(|_ui| {});
                    }
                });
                return;
            }

            for record in records {
                body.row(18.0, |mut row| {
                    for text in [
                        &record.name,
                        &record.email,
                        &record.number,
                        &record.password,
                    ] {
                        row.col(|ui| {
                            ui.label(text);
                        });
                    }
                });
            }
        });

    msgs
}
