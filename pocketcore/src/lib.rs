//! pocketcore — calculator engine and shared UI pieces for pocketcalc

pub mod engine;
pub mod readout;
pub mod storage;
pub mod theme;
pub mod token;
pub mod widgets;

pub use engine::{apply, apply_all, CalculatorState};
pub use readout::{format_general, parse_leading, Readout};
pub use storage::{CalcSettings, StorageError};
pub use theme::PocketTheme;
pub use token::{Digit, Operator, Token, TokenError};
