//! Light, rounded calculator theme.

use egui::{Color32, Rounding, Stroke, Style, Visuals};

/// Palette shared by the theme and the keypad.
pub struct PocketColors;

impl PocketColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(230, 230, 230);
    pub const DISPLAY: Color32 = Color32::from_rgb(242, 242, 242);
    pub const TEXT: Color32 = Color32::from_rgb(20, 20, 20);
    pub const KEY: Color32 = Color32::from_rgb(204, 204, 204);
    pub const KEY_HOVER: Color32 = Color32::from_rgb(230, 230, 230);
    pub const KEY_ACTIVE: Color32 = Color32::from_rgb(179, 179, 179);
    pub const ACCENT: Color32 = Color32::from_rgb(255, 128, 0);
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(255, 153, 0);
    pub const ACCENT_ACTIVE: Color32 = Color32::from_rgb(255, 102, 0);
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
}

pub struct PocketTheme {
    pub rounding: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
    pub font_size_body: f32,
}

impl Default for PocketTheme {
    fn default() -> Self {
        Self {
            rounding: 12.0,
            window_padding: 8.0,
            item_spacing: 6.0,
            font_size_body: 16.0,
        }
    }
}

impl PocketTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::light();
        let rounding = Rounding::same(self.rounding);

        visuals.window_fill = PocketColors::BACKGROUND;
        visuals.panel_fill = PocketColors::BACKGROUND;
        visuals.extreme_bg_color = PocketColors::DISPLAY;
        visuals.window_rounding = rounding;
        visuals.menu_rounding = rounding;
        visuals.override_text_color = Some(PocketColors::TEXT);

        let key = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::NONE;
            ws.rounding = rounding;
        };
        key(&mut visuals.widgets.inactive, PocketColors::KEY);
        key(&mut visuals.widgets.hovered, PocketColors::KEY_HOVER);
        key(&mut visuals.widgets.active, PocketColors::KEY_ACTIVE);
        key(&mut visuals.widgets.open, PocketColors::KEY);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);

        for font in style.text_styles.values_mut() {
            if font.size < self.font_size_body {
                font.size = self.font_size_body;
            }
        }

        ctx.set_style(style);
    }

    /// Frame around the number display.
    pub fn display_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(PocketColors::DISPLAY)
            .rounding(Rounding::same(self.rounding))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
    }
}
