use eframe::egui;
use shared::domain::NewsItem;

use super::theme;

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .corner_radius(24.0)
        .inner_margin(egui::Margin::symmetric(32, 32))
}

pub fn bar_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(theme::glass_fill())
        .inner_margin(egui::Margin::symmetric(16, 14))
}

/// Large colored button used on the menu grid.
pub fn tile(ui: &mut egui::Ui, label: &str, fill: egui::Color32, width: f32) -> egui::Response {
    let text = egui::RichText::new(label)
        .size(18.0)
        .strong()
        .color(egui::Color32::WHITE);
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .corner_radius(12.0)
            .min_size(egui::vec2(width, 88.0)),
    )
}

pub fn primary_button(ui: &mut egui::Ui, label: &str, width: f32) -> egui::Response {
    let text = egui::RichText::new(label).size(16.0).color(egui::Color32::WHITE);
    ui.add(
        egui::Button::new(text)
            .fill(theme::INDIGO)
            .corner_radius(12.0)
            .min_size(egui::vec2(width, 40.0)),
    )
}

pub fn avatar(ui: &mut egui::Ui, initial: char) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), rect.width() / 2.0, theme::INDIGO);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );
}

pub fn news_card(ui: &mut egui::Ui, item: &NewsItem) {
    egui::Frame::NONE
        .fill(theme::glass_fill())
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(20, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&item.title).strong().size(16.0));
            ui.label(&item.summary);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&item.source)
                        .size(12.0)
                        .color(theme::MUTED_TEXT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&item.time)
                            .size(12.0)
                            .color(theme::MUTED_TEXT),
                    );
                });
            });
        });
}
