// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for collecting and browsing submissions.
//! Handles layout, view switching, and wiring to the record store.

pub mod components;

use eframe::egui;

use crate::logic::store::RecordStore;
use crate::mvu::{self, AppModel, Command, Msg, View};
use crate::ui::components::{form, records_table};

/// Stateful egui application hosting the form and records views.
pub struct FormVaultApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl FormVaultApp {
    /// Build the app around the given store and spawn the command workers.
    pub fn new(store: RecordStore) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Storage I/O is cheap; one worker keeps slot writes serialized.
        let worker_store = store.clone();
        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd, &worker_store);
                let _ = msg_tx.send(msg);
            }
        });

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for FormVaultApp {
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    #[allow(deprecated)]
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("FormVault");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_view_switcher(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_ack_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| match self.model.view {
                View::Form => {
                    ui.label("Fill in all fields to store a submission.");
                    ui.add_space(8.0);
                    let form_msgs = form::view(ui, &self.model.form);
                    self.inbox.extend(form_msgs.into_iter().map(Msg::Form));
                }
                View::Records => {
                    ui.label("Every stored submission, oldest first.");
                    ui.add_space(8.0);
                    let table_msgs = records_table::view(ui, &self.model.records);
                    self.inbox.extend(table_msgs.into_iter().map(Msg::Records));
                }
            });
        });
    }
}

impl FormVaultApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Render segmented controls to switch between the two views.
    ///
    /// The currently shown view is highlighted; clicking the other button
    /// enqueues a `Msg::ViewSelected`, which also reloads the table data.
    fn render_view_switcher(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let records = egui::Button::new(format!(
                "{} View Data",
                egui_phosphor::regular::TABLE
            ))
            .selected(matches!(self.model.view, View::Records));
            if ui.add(records).clicked() {
                self.inbox.push(Msg::ViewSelected(View::Records));
            }

            let form = egui::Button::new(format!("{} Form", egui_phosphor::regular::HOUSE))
                .selected(matches!(self.model.view, View::Form));
            if ui.add(form).clicked() {
                self.inbox.push(Msg::ViewSelected(View::Form));
            }
        });
    }

    /// Render the blocking acknowledgment modal for submit outcomes.
    fn render_ack_modal(&mut self, ctx: &egui::Context) {
        if let Some(ack) = self.model.ack.clone() {
            egui::Window::new(ack.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    if ack.is_error {
                        ui.label(egui::RichText::new(ack.message).color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(ack.message);
                    }
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissAck);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} task(s) running in background",
                            self.model.pending_commands
                        ));
                }
            });
        }
    }
}
