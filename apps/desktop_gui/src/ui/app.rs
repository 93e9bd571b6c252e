use std::path::{Path, PathBuf};

use client_core::{
    config::Settings,
    views::{GO_BACK_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE, SUCCESS_NOTE},
    Route,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::ContactField, validation::WHATSAPP_DIGITS};
use storage::Storage;

use crate::backend_bridge::{commands::BackendCommand, runtime::BackendConfig};
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::AppModel;
use crate::ui::{theme, widgets};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub relay_url: String,
    pub database_url: String,
    pub data_dir: Option<PathBuf>,
}

impl StartupConfig {
    /// `data_dir`, when given, wins over the configured database url.
    pub fn from_settings(settings: &Settings, data_dir: Option<&Path>) -> Self {
        let database_url = match data_dir {
            Some(dir) => Storage::sqlite_url_from_path(&dir.join("session.sqlite3")),
            None => settings.prepared_database_url(),
        };
        Self {
            relay_url: settings.relay_url.clone(),
            database_url,
            data_dir: data_dir.map(Path::to_path_buf),
        }
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            relay_url: self.relay_url.clone(),
            database_url: self.database_url.clone(),
        }
    }
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Storage => "Storage",
        UiErrorCategory::Transport => "Connection",
        UiErrorCategory::Configuration => "Configuration",
        UiErrorCategory::Unknown => "Error",
    }
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    theme_applied: bool,
    focus_requested: bool,
}

impl DesktopGuiApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
        startup_errors: Vec<String>,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            model: AppModel::new(),
            theme_applied: false,
            focus_requested: false,
        };
        for err in startup_errors {
            app.model.apply(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                err,
            )));
        }
        tracing::info!(
            relay_url = %startup.relay_url,
            data_dir = ?startup.data_dir,
            "desktop gui starting"
        );
        app.dispatch(BackendCommand::LoadSession);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) -> bool {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.model.status)
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.apply(event);
        }
    }

    fn try_submit(&mut self) {
        if let Some(cmd) = self.model.request_submit() {
            if !self.dispatch(cmd) {
                let reason = self.model.status.clone();
                self.model.submit_not_dispatched(&reason);
            }
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.model.banner.clone() else {
            return;
        };
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            err_label(banner.category()),
                            banner.message()
                        ))
                        .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.model.banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn card(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
        let avail = ui.available_size();
        let card_width = avail.x.clamp(320.0, 480.0);
        ui.add_space((avail.y * 0.1).clamp(16.0, 80.0));
        ui.vertical_centered(|ui| {
            ui.set_width(card_width);
            egui::Frame::NONE
                .fill(theme::CARD_FILL)
                .corner_radius(theme::CARD_ROUNDING)
                .inner_margin(egui::Margin::symmetric(24, 22))
                .show(ui, add);
        });
    }

    fn show_starting_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            Self::card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(egui::RichText::new(&self.model.status).color(theme::MUTED_TEXT));
                });
            });
        });
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            let mut submit_requested = false;

            Self::card(ui, |ui| {
                ui.label(
                    egui::RichText::new("Get in touch")
                        .strong()
                        .size(22.0)
                        .color(theme::BODY_TEXT),
                );
                ui.add_space(12.0);

                let enabled = self.model.form.can_submit();
                let mut any_focused = false;
                for field in ContactField::ALL {
                    let mut value = self.model.form.fields().get(field).to_string();
                    let error = self.model.form.errors().get(field).to_string();
                    let limit = (field == ContactField::Whatsapp).then_some(WHATSAPP_DIGITS);
                    let response = ui
                        .add_enabled_ui(enabled, |ui| {
                            widgets::form_text_field(
                                ui,
                                field.wire_name(),
                                field.placeholder(),
                                &mut value,
                                &error,
                                limit,
                            )
                        })
                        .inner;
                    if !self.focus_requested && field == ContactField::Name {
                        response.request_focus();
                        self.focus_requested = true;
                    }
                    any_focused |= response.has_focus() || response.lost_focus();
                    if response.changed() {
                        self.model.edit_field(field, value);
                    }
                    ui.add_space(6.0);
                }

                let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if enabled && any_focused && enter_pressed {
                    submit_requested = true;
                }

                ui.add_space(8.0);
                if self.model.form.is_loading() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new("Sending...").color(theme::MUTED_TEXT));
                    });
                } else if widgets::primary_button(ui, SUBMIT_LABEL, enabled).clicked() {
                    submit_requested = true;
                }
            });

            if submit_requested {
                self.try_submit();
            }
        });
    }

    fn show_success(&mut self, ctx: &egui::Context) {
        let view = self.model.success_view();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            let mut go_back = false;
            Self::card(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(view.heading())
                            .strong()
                            .size(24.0)
                            .color(theme::BODY_TEXT),
                    );
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new(SUCCESS_MESSAGE).color(theme::BODY_TEXT));
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(SUCCESS_NOTE)
                            .size(12.0)
                            .color(theme::MUTED_TEXT),
                    );
                    ui.add_space(16.0);
                    go_back = widgets::primary_button(ui, GO_BACK_LABEL, true).clicked();
                });
            });
            if go_back {
                self.model.go_back();
            }
        });
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.model.form.alert().map(str::to_string) else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("submission_alert")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(egui::RichText::new(&alert).color(theme::BODY_TEXT));
            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("OK").clicked()
            })
            .inner
        });
        if modal.inner || modal.should_close() {
            self.model.form.dismiss_alert();
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        match self.model.current_route() {
            None => self.show_starting_screen(ctx),
            Some(Route::Form) => {
                self.show_form(ctx);
                self.show_alert(ctx);
            }
            Some(Route::Success) => self.show_success(ctx),
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
