//! Property tests for the calculator engine.

use pocketcore::readout::MAX_LEN;
use pocketcore::{apply, apply_all, CalculatorState, Digit, Operator, Token};
use proptest::prelude::*;

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0usize..10).prop_map(|i| Digit::ALL[i])
}

fn nonzero_digit_strategy() -> impl Strategy<Value = Digit> {
    (1usize..10).prop_map(|i| Digit::ALL[i])
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        4 => digit_strategy().prop_map(Token::Digit),
        1 => Just(Token::Decimal),
        1 => operator_strategy().prop_map(Token::Operator),
        1 => Just(Token::Equals),
        1 => Just(Token::Clear),
        1 => Just(Token::Negate),
        1 => Just(Token::Percent),
    ]
}

/// What typing `digits` after a reset should show.
fn expected_entry(digits: &[Digit]) -> String {
    let mut shown = String::from("0");
    for d in digits {
        if shown == "0" {
            shown.clear();
        }
        if shown.len() < MAX_LEN {
            shown.push(d.as_char());
        }
    }
    shown
}

proptest! {
    /// Digits typed after a reset appear verbatim, minus replaced leading zeros.
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..40)) {
        let state = apply_all(
            std::iter::once(Token::Clear).chain(digits.iter().copied().map(Token::Digit)),
        );
        prop_assert_eq!(state.display(), expected_entry(&digits));
    }

    /// Only single decimal digits become digit keys.
    #[test]
    fn prop_digit_constructor_checks_range(value in any::<u8>()) {
        prop_assert_eq!(Token::digit(value).is_some(), value <= 9);
    }

    /// Clear always lands on the reset state.
    #[test]
    fn prop_clear_resets(tokens in prop::collection::vec(token_strategy(), 0..30)) {
        let state = apply_all(tokens);
        prop_assert_eq!(apply(&state, Token::Clear), CalculatorState::new());
    }

    /// Repeated decimal presses within one number leave a single point.
    #[test]
    fn prop_single_decimal_point(
        before in prop::collection::vec(digit_strategy(), 1..8),
        presses in 2usize..5,
        after in prop::collection::vec(digit_strategy(), 0..8),
    ) {
        let tokens = std::iter::once(Token::Clear)
            .chain(before.into_iter().map(Token::Digit))
            .chain(std::iter::repeat(Token::Decimal).take(presses))
            .chain(after.into_iter().map(Token::Digit));
        let state = apply_all(tokens);
        prop_assert_eq!(state.display().matches('.').count(), 1);
    }

    /// The display never grows past its bound.
    #[test]
    fn prop_display_bounded(tokens in prop::collection::vec(token_strategy(), 0..120)) {
        let state = apply_all(tokens);
        prop_assert!(!state.display().is_empty());
        prop_assert!(state.display().len() <= MAX_LEN);
    }

    /// Equals always clears the pending operator.
    #[test]
    fn prop_equals_clears_pending(tokens in prop::collection::vec(token_strategy(), 0..30)) {
        let state = apply(&apply_all(tokens), Token::Equals);
        prop_assert_eq!(state.pending_operator(), None);
    }

    /// Single-digit binary operations agree with native arithmetic.
    #[test]
    fn prop_single_digit_arithmetic(a in nonzero_digit_strategy(), op in operator_strategy(), b in nonzero_digit_strategy()) {
        let state = apply_all([Token::Digit(a), Token::Operator(op), Token::Digit(b), Token::Equals]);
        let expected = op.evaluate(f64::from(a.value()), f64::from(b.value()));
        prop_assert_eq!(state.display(), pocketcore::format_general(expected, 6));
    }

    /// Negating twice restores a typed integer.
    #[test]
    fn prop_negate_involution(digits in prop::collection::vec(nonzero_digit_strategy(), 1..6)) {
        let typed = apply_all(digits.iter().copied().map(Token::Digit));
        let twice = apply(&apply(&typed, Token::Negate), Token::Negate);
        prop_assert_eq!(twice.display(), typed.display());
    }
}

#[test]
fn test_scenarios() {
    let cases: &[(&[&str], &str)] = &[
        (&["5", "+", "3", "="], "8"),
        (&["1", "2", "x", "3", "="], "36"),
        (&["6", "/", "0", "="], "inf"),
        (&["9", "+/-"], "-9"),
        (&["9", "+/-", "+/-"], "9"),
        (&["C", "5", "%"], "0.05"),
    ];
    for (labels, expected) in cases {
        let state = apply_all(labels.iter().map(|l| l.parse::<Token>().unwrap()));
        assert_eq!(state.display(), *expected, "keys {:?}", labels);
    }
}
