use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{brief_heading, Screen};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::run_action;
use crate::controller::reducer::{AppModel, UiAction};

use super::profile_menu::{self, DismissibleMenu, ProfileMenuChoice};
use super::{theme, widgets};

const LOGIN_CARD_WIDTH: f32 = 420.0;
const BRIEF_COLUMN_WIDTH: f32 = 720.0;
const TILE_GAP: f32 = 24.0;

#[derive(Debug, Default, Clone)]
pub struct StartupConfig {
    pub email: Option<String>,
}

pub struct CarspireApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    email_input: String,
    focus_email: bool,
    profile_menu: DismissibleMenu,
}

impl CarspireApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: AppModel::new(),
            email_input: startup.email.unwrap_or_default(),
            focus_email: true,
            profile_menu: DismissibleMenu::default(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.apply_event(event);
        }
    }

    fn perform(&mut self, action: UiAction) {
        self.profile_menu.close();
        if matches!(action, UiAction::Logout) {
            self.email_input.clear();
            self.focus_email = true;
        }
        let today = Local::now().date_naive();
        run_action(&mut self.model, &self.cmd_tx, action, today);
    }

    fn show_login_screen(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut action = None;
        let top_space = (ui.available_height() * 0.25).clamp(24.0, 200.0);
        ui.add_space(top_space);

        ui.vertical_centered(|ui| {
            ui.set_max_width(LOGIN_CARD_WIDTH);
            widgets::card_frame().show(ui, |ui| {
                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 16.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("CarspireOnline").size(30.0).strong());
                });

                let field = ui.add(
                    egui::TextEdit::singleline(&mut self.email_input)
                        .hint_text("Email")
                        .margin(egui::Margin::symmetric(12, 10))
                        .desired_width(f32::INFINITY),
                );
                if self.focus_email {
                    field.request_focus();
                    self.focus_email = false;
                }
                let submitted =
                    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let width = ui.available_width();
                if widgets::primary_button(ui, "Login", width).clicked() || submitted {
                    action = Some(UiAction::Login {
                        email: self.email_input.clone(),
                    });
                }

                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.model.status())
                            .size(12.0)
                            .color(theme::MUTED_TEXT),
                    );
                });
            });
        });

        action
    }

    fn show_menu_screen(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut action = None;
        let initial = self.model.session().avatar_initial();

        widgets::bar_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🚗 CarspireOnline").size(20.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match profile_menu::show(ui, &mut self.profile_menu, initial) {
                        Some(ProfileMenuChoice::TodaysBrief) => action = Some(UiAction::OpenBrief),
                        Some(ProfileMenuChoice::Logout) => action = Some(UiAction::Logout),
                        None => {}
                    }
                });
            });
        });

        egui::Frame::NONE
            .inner_margin(egui::Margin::symmetric(32, 32))
            .show(ui, |ui| {
                let width = ((ui.available_width() - 2.0 * TILE_GAP) / 3.0).max(120.0);
                ui.spacing_mut().item_spacing = egui::vec2(TILE_GAP, TILE_GAP);

                ui.horizontal(|ui| {
                    if widgets::tile(ui, "📅 Today's Brief", theme::INDIGO, width).clicked() {
                        action = Some(UiAction::OpenBrief);
                    }
                    widgets::tile(ui, "👥 Community", theme::PURPLE, width);
                    widgets::tile(ui, "📈 Trending", theme::PINK, width);
                });

                if self.model.session().is_admin() {
                    let full_width = ui.available_width();
                    widgets::tile(ui, "🛡 Admin Panel", theme::RED, full_width);
                }

                ui.label(
                    egui::RichText::new(self.model.status())
                        .size(12.0)
                        .color(theme::MUTED_TEXT),
                );
            });

        action
    }

    fn show_brief_screen(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut action = None;

        widgets::bar_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            if ui.button("← Back").clicked() {
                action = Some(UiAction::BackToMenu);
            }
        });

        let brief = self.model.brief();
        let heading = brief_heading(brief.date().unwrap_or_else(|| Local::now().date_naive()));

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(BRIEF_COLUMN_WIDTH);
                ui.add_space(24.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.label(egui::RichText::new(heading).size(30.0).strong());
                    ui.add_space(12.0);

                    if brief.is_loading() {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading...");
                        });
                        return;
                    }

                    for item in brief.items() {
                        widgets::news_card(ui, item);
                        ui.add_space(16.0);
                    }
                });
            });
        });

        action
    }
}

impl eframe::App for CarspireApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let press = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        self.profile_menu.observe_press(press);

        let screen = self.model.session().visible_screen();
        if screen != Screen::Menu {
            self.profile_menu.close();
        }

        let action = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                theme::paint_backdrop(ui.painter(), ui.max_rect());
                match screen {
                    Screen::Login => self.show_login_screen(ui),
                    Screen::Menu => self.show_menu_screen(ui),
                    Screen::Brief => self.show_brief_screen(ui),
                }
            })
            .inner;

        if let Some(action) = action {
            self.perform(action);
            ctx.request_repaint();
        }

        if self.model.brief().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
