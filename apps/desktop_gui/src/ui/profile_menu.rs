//! Profile dropdown on the menu screen.

use eframe::egui;

use super::{theme, widgets};

const MENU_WIDTH: f32 = 192.0;

/// Open/closed state of a popup that closes itself when a press lands
/// outside its bounds. The owner feeds it pointer presses; it never reads
/// global input on its own.
#[derive(Debug, Default, Clone)]
pub struct DismissibleMenu {
    open: bool,
    bounds: Option<egui::Rect>,
}

impl DismissibleMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Area covered by the trigger plus, while open, the popup itself.
    pub fn set_bounds(&mut self, bounds: egui::Rect) {
        self.bounds = Some(bounds);
    }

    pub fn observe_press(&mut self, press: Option<egui::Pos2>) {
        let Some(pos) = press else {
            return;
        };
        if !self.open {
            return;
        }
        let inside = self.bounds.is_some_and(|bounds| bounds.contains(pos));
        if !inside {
            self.open = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuChoice {
    TodaysBrief,
    Logout,
}

/// Draws the avatar trigger and, when open, the dropdown below it.
pub fn show(
    ui: &mut egui::Ui,
    menu: &mut DismissibleMenu,
    initial: char,
) -> Option<ProfileMenuChoice> {
    let trigger = ui
        .horizontal(|ui| {
            widgets::avatar(ui, initial);
            ui.label("▾");
        })
        .response
        .interact(egui::Sense::click());

    if trigger.clicked() {
        menu.toggle();
    }

    let mut bounds = trigger.rect;
    let mut choice = None;

    if menu.is_open() {
        let anchor = egui::pos2(trigger.rect.right() - MENU_WIDTH, trigger.rect.bottom() + 8.0);
        let popup = egui::Area::new(egui::Id::new("profile_menu_popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor)
            .show(ui.ctx(), |ui| {
                egui::Frame::popup(&ui.ctx().style())
                    .fill(egui::Color32::WHITE)
                    .corner_radius(12.0)
                    .show(ui, |ui| {
                        ui.set_width(MENU_WIDTH);
                        let text_color = ui.visuals().text_color();
                        if menu_entry(ui, "Today's Brief", text_color).clicked() {
                            choice = Some(ProfileMenuChoice::TodaysBrief);
                        }
                        if menu_entry(ui, "Logout", theme::RED).clicked() {
                            choice = Some(ProfileMenuChoice::Logout);
                        }
                    });
            });
        bounds = bounds.union(popup.response.rect);
    }

    menu.set_bounds(bounds);
    if choice.is_some() {
        menu.close();
    }
    choice
}

fn menu_entry(ui: &mut egui::Ui, label: &str, color: egui::Color32) -> egui::Response {
    ui.add_sized(
        [MENU_WIDTH, 36.0],
        egui::Button::new(egui::RichText::new(label).color(color)).frame(false),
    )
}
