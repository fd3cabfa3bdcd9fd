// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for editing a card block.
//! Handles layout, form controls, and wiring to export IO.

pub mod components;

use eframe::egui;

use crate::logic::rules;
use crate::logic::site::{ensure_extension, suggested_export_name};
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{card_form, icon_picker, section_select};

/// Stateful egui application for editing a card block from a site export.
pub struct CardDeskApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for CardDeskApp {
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::with_sample(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for CardDeskApp {
    /// Drives a single UI frame: drains worker messages, applies them to the
    /// MVU model, dispatches resulting commands, and renders the panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
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
                ui.heading("Card Block");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_save_button(ui);
                    self.render_open_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        let picker_msgs = icon_picker::view(ctx, &self.model.icon_picker);
        self.inbox.extend(picker_msgs.into_iter().map(Msg::IconPicker));

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let select_msgs = section_select::view(ui, &self.model.section_select);
                self.inbox
                    .extend(select_msgs.into_iter().map(Msg::SectionSelect));
                ui.add_space(12.0);

                // The plan is re-derived every frame from the resolved
                // section type, so hidden rows cannot linger.
                let plan = rules::resolve(self.model.section_type);
                let form_msgs = card_form::view(ui, &self.model.card, plan);
                self.inbox.extend(form_msgs.into_iter().map(Msg::CardForm));
                ui.add_space(8.0);
            });
        });
    }
}

impl CardDeskApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Save button with a native save dialog. Disabled until the card has a
    /// title; the suggested file name is derived from it.
    fn render_save_button(&mut self, ui: &mut egui::Ui) {
        let save_enabled = !self.model.card.title.trim().is_empty();
        let button = egui::Button::new(format!(
            "{} Save export",
            egui_phosphor::regular::FLOPPY_DISK
        ));

        if ui
            .add_enabled(save_enabled, button)
            .on_disabled_hover_text("Please enter a title first")
            .clicked()
        {
            let default_name = suggested_export_name(&self.model.card.title);
            let mut dialog = rfd::FileDialog::new()
                .set_title("Save site export")
                .add_filter("JSON", &["json"])
                .set_file_name(&default_name);
            if let Some(dir) = self.model.source.as_ref().and_then(|p| p.parent()) {
                dialog = dialog.set_directory(dir);
            }

            if let Some(path) = dialog.save_file() {
                let output_path = ensure_extension(path, "json");
                self.inbox.push(Msg::SaveRequested(output_path));
            } else {
                self.inbox.push(Msg::SaveCancelled);
            }
        }
    }

    /// Open button with a native pick dialog for site export JSON files.
    fn render_open_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Open export",
            egui_phosphor::regular::FOLDER_OPEN
        ));

        if ui.add(button).clicked() {
            let mut dialog = rfd::FileDialog::new()
                .set_title("Open site export")
                .add_filter("JSON", &["json"]);
            if let Some(dir) = self.model.source.as_ref().and_then(|p| p.parent()) {
                dialog = dialog.set_directory(dir);
            }

            if let Some(path) = dialog.pick_file() {
                self.inbox.push(Msg::LoadRequested(path));
            } else {
                self.inbox.push(Msg::LoadCancelled);
            }
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
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
