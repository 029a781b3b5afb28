//! Input vocabulary: one token per calculator key.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown calculator key: {0:?}")]
    Unknown(String),
}

/// A binary operation waiting for its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Key label as printed on the keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "/",
        }
    }

    /// Plain IEEE arithmetic. Division by zero yields inf or NaN.
    pub fn evaluate(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

/// A decimal digit. Only values 0 through 9 can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// `None` for anything above 9.
    pub const fn new(value: u8) -> Option<Digit> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    pub fn from_char(c: char) -> Option<Digit> {
        c.to_digit(10).and_then(|d| Digit::new(d as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Negate,
    Percent,
}

impl Token {
    /// Digit key for `value`, or `None` when it is not a single digit.
    pub fn digit(value: u8) -> Option<Token> {
        Digit::new(value).map(Token::Digit)
    }

    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Token::Digit(d) => DIGITS[usize::from(d.value())],
            Token::Decimal => ".",
            Token::Operator(op) => op.symbol(),
            Token::Equals => "=",
            Token::Clear => "C",
            Token::Negate => "+/-",
            Token::Percent => "%",
        }
    }

    /// Map a typed character to a key. Accepts a few keyboard aliases
    /// (`*` for multiply, `,` for the decimal point, lowercase `c`).
    pub fn from_char(c: char) -> Option<Token> {
        if let Some(d) = Digit::from_char(c) {
            return Some(Token::Digit(d));
        }
        let token = match c {
            '.' | ',' => Token::Decimal,
            '+' => Token::Operator(Operator::Add),
            '-' => Token::Operator(Operator::Subtract),
            'x' | 'X' | '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '=' => Token::Equals,
            '%' => Token::Percent,
            'c' | 'C' => Token::Clear,
            _ => return None,
        };
        Some(token)
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "C" => Token::Clear,
            "+/-" => Token::Negate,
            "%" => Token::Percent,
            "." => Token::Decimal,
            "=" => Token::Equals,
            "+" => Token::Operator(Operator::Add),
            "-" => Token::Operator(Operator::Subtract),
            "x" => Token::Operator(Operator::Multiply),
            "/" => Token::Operator(Operator::Divide),
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(d), None) => Token::Digit(d),
                    _ => return Err(TokenError::Unknown(s.to_string())),
                }
            }
        };
        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
