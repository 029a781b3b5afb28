//! Keypad layout and the calculator key widget.

use egui::{Color32, Response, Ui, Widget};

use crate::theme::PocketColors;
use crate::token::{Digit, Operator, Token};

/// One position on the keypad. `span` is the width in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    pub token: Token,
    pub span: u8,
}

const fn key(token: Token) -> KeySlot {
    KeySlot { token, span: 1 }
}

pub const KEYPAD_COLUMNS: usize = 4;

/// Five rows of four columns. The zero key spans two columns.
pub const KEYPAD: [&[KeySlot]; 5] = [
    &[
        key(Token::Clear),
        key(Token::Negate),
        key(Token::Percent),
        key(Token::Operator(Operator::Divide)),
    ],
    &[
        key(Token::Digit(Digit::ALL[7])),
        key(Token::Digit(Digit::ALL[8])),
        key(Token::Digit(Digit::ALL[9])),
        key(Token::Operator(Operator::Multiply)),
    ],
    &[
        key(Token::Digit(Digit::ALL[4])),
        key(Token::Digit(Digit::ALL[5])),
        key(Token::Digit(Digit::ALL[6])),
        key(Token::Operator(Operator::Subtract)),
    ],
    &[
        key(Token::Digit(Digit::ALL[1])),
        key(Token::Digit(Digit::ALL[2])),
        key(Token::Digit(Digit::ALL[3])),
        key(Token::Operator(Operator::Add)),
    ],
    &[
        KeySlot {
            token: Token::Digit(Digit::ALL[0]),
            span: 2,
        },
        key(Token::Decimal),
        key(Token::Equals),
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    Standard,
    Accent,
}

impl KeyStyle {
    pub fn for_token(token: Token) -> Self {
        match token {
            Token::Equals => KeyStyle::Accent,
            _ => KeyStyle::Standard,
        }
    }

    /// Fill for (idle, hovered, pressed).
    fn fills(self) -> (Color32, Color32, Color32) {
        match self {
            KeyStyle::Standard => (
                PocketColors::KEY,
                PocketColors::KEY_HOVER,
                PocketColors::KEY_ACTIVE,
            ),
            KeyStyle::Accent => (
                PocketColors::ACCENT,
                PocketColors::ACCENT_HOVER,
                PocketColors::ACCENT_ACTIVE,
            ),
        }
    }

    fn text_color(self) -> Color32 {
        match self {
            KeyStyle::Standard => PocketColors::TEXT,
            KeyStyle::Accent => PocketColors::WHITE,
        }
    }
}

/// Keys react to the pointer only. Keyboard entry goes through the token
/// mapping, never through a focused key.
const KEY_SENSE: egui::Sense = egui::Sense {
    click: true,
    drag: false,
    focusable: false,
};

/// A rounded keypad key. Selected keys get an accent outline.
pub struct CalcKey<'a> {
    label: &'a str,
    style: KeyStyle,
    size: egui::Vec2,
    rounding: f32,
    selected: bool,
}

impl<'a> CalcKey<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self {
            label,
            style: KeyStyle::Standard,
            size,
            rounding: 12.0,
            selected: false,
        }
    }

    pub fn style(mut self, style: KeyStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rounding(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for CalcKey<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, KEY_SENSE);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let (idle, hover, active) = self.style.fills();
            let fill = if response.is_pointer_button_down_on() {
                active
            } else if response.hovered() {
                hover
            } else {
                idle
            };
            painter.rect_filled(rect, self.rounding, fill);

            let text_color = if self.selected {
                painter.rect_stroke(
                    rect.shrink(1.0),
                    self.rounding,
                    egui::Stroke::new(2.0, PocketColors::ACCENT),
                );
                PocketColors::ACCENT
            } else {
                self.style.text_color()
            };

            let font_size = (self.size.y * 0.35).clamp(12.0, 28.0);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(font_size),
                text_color,
            );
        }

        response
    }
}
