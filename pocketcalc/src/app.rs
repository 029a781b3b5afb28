//! pocketcalc application

use egui::Context;
use pocketcore::theme::PocketColors;
use pocketcore::widgets::{CalcKey, KeyStyle, KEYPAD, KEYPAD_COLUMNS};
use pocketcore::{CalcSettings, CalculatorState, PocketTheme, Token};

use crate::keys;

/// Height of the number display, in points.
const DISPLAY_HEIGHT: f32 = 100.0;

pub struct CalculatorApp {
    state: CalculatorState,
    settings: CalcSettings,
    theme: PocketTheme,
}

impl CalculatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings, theme: PocketTheme) -> Self {
        Self::with_settings(settings, theme)
    }

    fn with_settings(settings: CalcSettings, theme: PocketTheme) -> Self {
        Self {
            state: CalculatorState::new(),
            settings,
            theme,
        }
    }

    fn press(&mut self, token: Token) {
        self.state.apply(token);
        log::debug!("pressed {} -> {}", token, self.state.display());
    }

    fn handle_keys(&mut self, ctx: &Context) {
        keys::consume_special_keys(ctx);
        if !self.settings.keyboard_input {
            return;
        }
        let tokens = ctx.input_mut(|i| keys::take_tokens(&mut i.events));
        for token in tokens {
            self.press(token);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let font_size = ui
            .style()
            .text_styles
            .get(&egui::TextStyle::Body)
            .map_or(16.0, |font| font.size)
            * self.settings.display_scale;

        self.theme.display_frame().show(ui, |ui| {
            let inner = DISPLAY_HEIGHT - 16.0;
            ui.set_min_height(inner);
            ui.set_max_height(inner);
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.state.display())
                        .size(font_size)
                        .color(PocketColors::TEXT),
                );
            });
        });
    }

    /// Draw the keypad and return the key clicked this frame, if any.
    fn render_keypad(&self, ui: &mut egui::Ui) -> Option<Token> {
        let gap = ui.spacing().item_spacing.x;
        let cols = KEYPAD_COLUMNS as f32;
        let rows = KEYPAD.len() as f32;
        let btn_w = (ui.available_width() - gap * (cols - 1.0)) / cols;
        let btn_h = ((ui.available_height() - gap * (rows - 1.0)) / rows).clamp(32.0, btn_w.max(32.0));

        let pending = if self.settings.highlight_pending && self.state.replace_on_next_digit() {
            self.state.pending_operator()
        } else {
            None
        };

        let mut clicked = None;
        for row in KEYPAD {
            ui.horizontal(|ui| {
                for slot in row {
                    let span = f32::from(slot.span);
                    let width = btn_w * span + gap * (span - 1.0);
                    let selected = matches!(slot.token, Token::Operator(op) if Some(op) == pending);
                    let key = CalcKey::new(slot.token.label(), egui::vec2(width, btn_h))
                        .style(KeyStyle::for_token(slot.token))
                        .rounding(self.theme.rounding)
                        .selected(selected);
                    if ui.add(key).clicked() {
                        clicked = Some(slot.token);
                    }
                }
            });
        }
        clicked
    }

    /// One frame: keyboard first, then the display and keypad.
    fn show(&mut self, ctx: &Context) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(PocketColors::BACKGROUND)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(self.theme.item_spacing * 2.0);

                if let Some(token) = self.render_keypad(ui) {
                    self.press(token);
                }
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Key, RawInput};

    fn key(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn run_frames(app: &mut CalculatorApp, frames: Vec<Vec<Event>>) {
        let ctx = Context::default();
        for events in frames {
            let input = RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(320.0, 520.0),
                )),
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| app.show(ctx));
        }
    }

    #[test]
    fn test_enter_after_tab_evaluates_once() {
        let mut app = CalculatorApp::with_settings(CalcSettings::default(), PocketTheme::default());
        run_frames(
            &mut app,
            vec![
                vec![Event::Text("5+3".to_string())],
                vec![key(Key::Tab)],
                vec![],
                vec![key(Key::Enter)],
                vec![],
            ],
        );
        assert_eq!(app.state.display(), "8");
        assert_eq!(app.state.pending_operator(), None);

        // a second Enter has nothing pending and must not click a key either
        run_frames(&mut app, vec![vec![key(Key::Tab)], vec![key(Key::Enter)]]);
        assert_eq!(app.state.display(), "8");
    }

    #[test]
    fn test_keyboard_disabled_ignores_typing() {
        let settings = CalcSettings {
            keyboard_input: false,
            ..CalcSettings::default()
        };
        let mut app = CalculatorApp::with_settings(settings, PocketTheme::default());
        run_frames(
            &mut app,
            vec![
                vec![Event::Text("7".to_string())],
                vec![key(Key::Tab)],
                vec![key(Key::Enter)],
            ],
        );
        assert_eq!(app.state.display(), "0");
    }
}
