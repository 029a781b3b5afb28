//! Keyboard input mapped to calculator tokens

use egui::{Event, Key};
use pocketcore::Token;

/// Strip Tab and Cmd+/- so they never reach the keypad.
///
/// egui reads Tab in `begin_frame`, before the app runs, so focus that Tab
/// already moved is handed back to whatever held it before.
pub fn consume_special_keys(ctx: &egui::Context) {
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| {
            matches!(
                e,
                Event::Key {
                    key: Key::Tab,
                    pressed: true,
                    ..
                }
            )
        })
    });
    let focused_before = if tab_pressed {
        ctx.memory(|mem| mem.focused())
    } else {
        None
    };

    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            Event::Key { key: Key::Tab, .. } => false,
            Event::Key { key, modifiers, .. } => {
                !(modifiers.command && matches!(key, Key::Plus | Key::Minus | Key::Equals))
            }
            _ => true,
        });
    });

    if tab_pressed {
        match focused_before {
            Some(id) => ctx.memory_mut(|mem| mem.request_focus(id)),
            None => {
                if let Some(id) = ctx.memory(|mem| mem.focused()) {
                    ctx.memory_mut(|mem| mem.surrender_focus(id));
                }
            }
        }
    }
}

/// Remove the events the calculator understands and return them as tokens,
/// in arrival order. Removed events are invisible to widgets drawn later in
/// the frame, so Enter cannot also click a keypad key.
///
/// Typed characters come through `Event::Text`, so layout-dependent keys
/// like `+` and `*` need no modifier handling here.
pub fn take_tokens(events: &mut Vec<Event>) -> Vec<Token> {
    let mut tokens = Vec::new();
    events.retain(|event| match event {
        Event::Text(text) => {
            let before = tokens.len();
            tokens.extend(text.chars().filter_map(Token::from_char));
            tokens.len() == before
        }
        Event::Key { key, pressed, .. } => {
            let token = match key {
                Key::Enter => Token::Equals,
                Key::Escape | Key::Delete => Token::Clear,
                _ => return true,
            };
            if *pressed {
                tokens.push(token);
            }
            false
        }
        _ => true,
    });
    tokens
}
