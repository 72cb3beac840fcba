//! Palette and the decorative backdrop drawn behind every screen.

use eframe::egui;

pub const INDIGO: egui::Color32 = egui::Color32::from_rgb(79, 70, 229);
pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const PINK: egui::Color32 = egui::Color32::from_rgb(219, 39, 119);
pub const RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

const BACKDROP_BASE: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
const BLOB_BLUE: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
const BLOB_PURPLE: egui::Color32 = egui::Color32::from_rgb(192, 132, 252);

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKDROP_BASE;
    visuals.selection.bg_fill = INDIGO;
    visuals.hyperlink_color = INDIGO;
    visuals.menu_corner_radius = egui::CornerRadius::same(12);
    visuals.window_corner_radius = egui::CornerRadius::same(12);
    visuals
}

/// Translucent white used for the top bars and news cards.
pub fn glass_fill() -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 204)
}

/// Paints the diagonal indigo -> purple -> pink wash plus two soft blobs.
pub fn paint_backdrop(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, BACKDROP_BASE);

    let tint = |c: egui::Color32| c.gamma_multiply(0.2);
    let middle = tint(PURPLE);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), tint(INDIGO));
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), tint(PINK));
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));

    paint_blob(painter, rect.left_top() + egui::vec2(-40.0, -40.0), 250.0, BLOB_BLUE);
    paint_blob(painter, egui::pos2(rect.right() + 40.0, rect.center().y), 250.0, BLOB_PURPLE);
}

// Concentric rings with falling alpha stand in for a blur.
fn paint_blob(painter: &egui::Painter, center: egui::Pos2, radius: f32, color: egui::Color32) {
    const RINGS: usize = 8;
    for ring in 0..RINGS {
        let t = ring as f32 / RINGS as f32;
        painter.circle_filled(center, radius * (1.0 - t * 0.6), color.gamma_multiply(0.04));
    }
}
