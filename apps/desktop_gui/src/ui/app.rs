use std::time::Duration;

use client_core::{project, FormView, SubmissionController, ViewOptions};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::MAX_TITLE_LEN;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_create_chat};

const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(38, 84, 62);
const HINT_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 140, 90);

pub struct ChatFormApp {
    controller: SubmissionController,
    view_options: ViewOptions,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
    show_required_hint: bool,
}

impl ChatFormApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        view_options: ViewOptions,
    ) -> Self {
        Self {
            controller: SubmissionController::new(view_options.locale),
            status: view_options.locale.messages().worker_starting.to_string(),
            view_options,
            cmd_tx,
            ui_rx,
            show_required_hint: false,
        }
    }

    fn process_ui_events(&mut self) {
        let messages = self.view_options.locale.messages();
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::WorkerReady => {
                    self.status = messages.worker_ready.to_string();
                }
                UiEvent::BackendStartupFailed(cause) => {
                    tracing::error!("backend worker startup failure: {cause}");
                    self.status = format!("{}: {cause}", messages.worker_failed);
                }
                UiEvent::SubmissionResolved { seq, outcome } => {
                    if !self.controller.resolve(seq, outcome) {
                        tracing::debug!(seq, "ignored outcome for a request no longer in flight");
                    }
                }
            }
        }
    }

    fn set_title(&mut self, title: String) {
        self.controller.update_title(title);
        self.show_required_hint = false;
    }

    /// Submit button / Enter key. An empty title only raises the required hint.
    fn try_submit(&mut self) {
        if !self.controller.form().is_submittable() {
            self.show_required_hint = true;
            return;
        }
        self.show_required_hint = false;
        dispatch_create_chat(&self.cmd_tx, &mut self.controller, &mut self.status);
    }

    fn show_form(&mut self, ui: &mut egui::Ui, view: &FormView) {
        let messages = self.view_options.locale.messages();

        ui.vertical_centered(|ui| {
            ui.heading(view.heading);
            ui.label(egui::RichText::new(view.subtitle).weak());
        });
        ui.add_space(16.0);

        ui.label(egui::RichText::new(view.title_label).strong());
        let mut draft = view.title.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut draft)
                .hint_text(view.title_placeholder)
                .char_limit(MAX_TITLE_LEN)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.set_title(draft);
        }
        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if self.show_required_hint {
            ui.label(egui::RichText::new(messages.title_required).color(HINT_COLOR));
        }

        ui.add_space(8.0);
        let button = egui::Button::new(egui::RichText::new(view.submit_label).strong())
            .min_size(egui::vec2(ui.available_width(), 32.0));
        let clicked = ui.add_enabled(view.submit_enabled, button).clicked();
        if (clicked || enter_pressed) && view.submit_enabled {
            self.try_submit();
        }

        if let Some(panel) = &view.error_panel {
            ui.add_space(12.0);
            egui::Frame::group(ui.style())
                .fill(ERROR_FILL)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(panel.heading)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(egui::RichText::new(&panel.message).color(egui::Color32::WHITE));
                });
        }

        if let Some(panel) = &view.success_panel {
            ui.add_space(12.0);
            egui::Frame::group(ui.style())
                .fill(SUCCESS_FILL)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(panel.heading)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    egui::Grid::new("created_chat_details")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for row in &panel.rows {
                                ui.label(egui::RichText::new(row.label).weak());
                                ui.label(egui::RichText::new(&row.value).color(egui::Color32::WHITE));
                                ui.end_row();
                            }
                        });
                });
        }

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            ui.small(messages.status_label);
            ui.small(egui::RichText::new(&self.status).weak());
        });
    }
}

impl eframe::App for ChatFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let view = project(&self.controller, &self.view_options);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_max_width(480.0);
            self.show_form(ui, &view);
        });

        // Worker results arrive over a channel, not through egui input.
        if self.controller.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
