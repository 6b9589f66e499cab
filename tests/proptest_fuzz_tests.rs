//! Property-based tests for the scanner, parser, and evaluator
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The pipeline never panics on arbitrary input
//! 2. Runtime failures always come back as error values, not crashes
//! 3. The list and arithmetic builtins satisfy their algebraic laws

use lispify::{Error, Evaluator, Scanner, Value};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Tokens that look like source elements, glued together at random
fn sexp_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        // Builtin names
        Just("list".to_string()),
        Just("head".to_string()),
        Just("tail".to_string()),
        Just("join".to_string()),
        Just("eval".to_string()),
        Just("len".to_string()),
        Just("def".to_string()),
        // Operators
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("%".to_string()),
        Just("^".to_string()),
        // Atoms
        Just("x".to_string()),
        (-1000i64..1000i64).prop_map(|n| n.to_string()),
        (0.0f64..100.0f64).prop_map(|f| format!("{:.2}", f)),
    ]
}

fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_token(), 0..50).prop_map(|tokens| tokens.join(" "))
}

/// Source text for a non-empty quoted list of integers
fn qexpr_source(items: &[i64]) -> String {
    let body: Vec<String> = items.iter().map(|n| n.to_string()).collect();
    format!("{{{}}}", body.join(" "))
}

fn eval_one(source: &str) -> Value {
    Evaluator::new()
        .eval_source(source)
        .expect("generated source should parse")
}

// =============================================================================
// ROBUSTNESS
// =============================================================================

proptest! {
    #[test]
    fn scanner_never_panics(source in r"[\x00-\x7F]{0,300}") {
        let _ = Scanner::new(&source).scan_tokens();
    }

    #[test]
    fn pipeline_never_panics_on_token_soup(source in sexp_like_string()) {
        let _ = Evaluator::new().eval_source(&source);
    }

    #[test]
    fn evaluation_is_deterministic(source in sexp_like_string()) {
        let first = Evaluator::new().eval_source(&source);
        let second = Evaluator::new().eval_source(&source);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// ALGEBRAIC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn unary_minus_negates(n in -1.0e6f64..1.0e6f64) {
        let mut evaluator = Evaluator::new();
        let call = Value::sexpr(vec![Value::symbol("-"), Value::Number(n)]);
        prop_assert_eq!(evaluator.eval(call), Value::Number(-n));
    }

    #[test]
    fn head_plus_tail_preserves_length(items in prop::collection::vec(-100i64..100, 1..20)) {
        let list = qexpr_source(&items);
        let reconstructed = eval_one(&format!(
            "(len (join (head {list}) (tail {list})))",
            list = list
        ));
        let original = eval_one(&format!("(len {})", list));

        prop_assert_eq!(reconstructed, original);
        prop_assert_eq!(eval_one(&format!("(len {})", list)), Value::Number(items.len() as f64));
    }

    #[test]
    fn list_then_eval_is_identity_for_atoms(n in -1000i64..1000) {
        let result = eval_one(&format!("(eval (list {}))", n));
        prop_assert_eq!(result, Value::Number(n as f64));
    }

    #[test]
    fn division_by_zero_is_always_an_error(n in -1000i64..1000) {
        prop_assert_eq!(
            eval_one(&format!("(/ {} 0)", n)),
            Value::error(Error::DivisionByZero)
        );
        prop_assert_eq!(
            eval_one(&format!("(% {} 0)", n)),
            Value::error(Error::DivisionByZero)
        );
    }

    #[test]
    fn definitions_overwrite_instead_of_duplicating(a in -1000i64..1000, b in -1000i64..1000) {
        let mut session = Evaluator::new();
        session.eval_source(&format!("(def {{x}} {})", a)).unwrap();
        session.eval_source(&format!("(def {{x}} {})", b)).unwrap();

        prop_assert_eq!(session.eval_source("x").unwrap(), Value::Number(b as f64));
        prop_assert_eq!(session.env.names().filter(|name| *name == "x").count(), 1);
    }

    #[test]
    fn quoted_lists_round_trip_through_display(items in prop::collection::vec(-100i64..100, 0..10)) {
        // Printing a quoted list and evaluating the printed form gives it back
        let source = qexpr_source(&items);
        let value = eval_one(&source);
        prop_assert_eq!(eval_one(&value.to_string()), value);
    }
}
