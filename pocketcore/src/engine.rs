//! Four-function calculator state machine.
//!
//! One key press at a time is applied to a [`CalculatorState`]. There is a
//! single pending operation and no precedence: `5 + 3 x 2 =` computes
//! `5 x 2`, because the second operator overwrites the first.

use crate::readout::Readout;
use crate::token::{Digit, Operator, Token};

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: Readout,
    accumulator: f64,
    pending: Option<Operator>,
    replace_on_next_digit: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: Readout::zero(),
            accumulator: 0.0,
            pending: None,
            replace_on_next_digit: false,
        }
    }

    pub fn display(&self) -> &str {
        self.display.as_str()
    }

    /// Left-hand operand captured by the last operator key.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn replace_on_next_digit(&self) -> bool {
        self.replace_on_next_digit
    }

    /// Apply one key press in place. Never fails.
    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Clear => self.clear(),
            Token::Negate => {
                let value = -self.display.value();
                self.display.set_value(value);
            }
            Token::Percent => {
                let value = self.display.value() / 100.0;
                self.display.set_value(value);
            }
            Token::Digit(d) => self.enter_digit(d),
            Token::Decimal => {
                if !self.display.has_decimal_point() {
                    self.display.push('.');
                }
            }
            Token::Operator(op) => {
                self.accumulator = self.display.value();
                self.pending = Some(op);
                self.replace_on_next_digit = true;
            }
            Token::Equals => self.evaluate(),
        }
        log::trace!(
            "{} -> display={} acc={} pending={:?} replace={}",
            token,
            self.display,
            self.accumulator,
            self.pending,
            self.replace_on_next_digit
        );
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn enter_digit(&mut self, digit: Digit) {
        let c = digit.as_char();
        if self.display.is_zero_literal() || self.replace_on_next_digit {
            self.display.start_with(c);
            self.replace_on_next_digit = false;
        } else {
            self.display.push(c);
        }
    }

    fn evaluate(&mut self) {
        let Some(op) = self.pending else {
            return;
        };
        let rhs = self.display.value();
        let result = op.evaluate(self.accumulator, rhs);
        self.display.set_value(result);
        self.replace_on_next_digit = true;
        self.pending = None;
    }
}

/// Pure form of [`CalculatorState::apply`].
pub fn apply(state: &CalculatorState, token: Token) -> CalculatorState {
    let mut next = state.clone();
    next.apply(token);
    next
}

/// Run a sequence of key presses from the reset state.
pub fn apply_all<I>(tokens: I) -> CalculatorState
where
    I: IntoIterator<Item = Token>,
{
    let mut state = CalculatorState::new();
    for token in tokens {
        state.apply(token);
    }
    state
}
