//! # shunter
//!
//! shunter is a two-stage arithmetic expression engine written in Rust.
//! It converts infix expressions to postfix (Reverse Polish) notation with a
//! shunting-yard pass, then evaluates the postfix form with a stack machine.
//! Multi-digit and decimal numerals, negative numbers and parenthesized
//! grouping are supported; malformed input is rejected with positional
//! diagnostics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::engine::{converter::convert, evaluator::evaluate};

/// Turns expression strings into results.
///
/// This module holds both stages of the engine: the converter, which rewrites
/// an infix expression into postfix notation, and the evaluator, which reduces
/// a postfix expression to a number. The stages are independent; each call is
/// pure given its input string and keeps all of its working state on a local
/// stack.
///
/// # Responsibilities
/// - Converts infix expressions to space-delimited postfix strings.
/// - Evaluates postfix strings to `f64` results.
/// - Detects syntax errors during either stage and reports them with
///   positions.
pub mod engine;
/// Provides structured error types for conversion and evaluation.
///
/// This module defines all errors that can be raised while converting an
/// infix expression or evaluating a postfix one. Every variant that
/// corresponds to a spot in the input carries a zero-based position and, where
/// it exists, the offending character or token, so callers can present exact
/// diagnostics.
///
/// # Responsibilities
/// - Defines error enums for both failure domains (conversion, evaluation).
/// - Attaches input positions and offending characters for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Shared operator knowledge and diagnostic helpers.
///
/// This module provides the pieces both engine stages agree on: which
/// characters are operators, how tightly each one binds, and the uniform
/// shape of a positional syntax diagnostic.
///
/// # Responsibilities
/// - Classifies operator characters and exposes their precedence.
/// - Formats positional error text consistently across both stages.
pub mod util;

/// The outcome of running an infix expression through both engine stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The postfix rendition of the input, exactly as the converter emitted
    /// it (token spacing quirks included).
    pub postfix: String,
    /// The numeric result of evaluating that postfix expression.
    pub result:  f64,
}

/// Converts an infix expression to postfix and evaluates it.
///
/// This is the front door of the crate: it runs the converter and the
/// evaluator in sequence and returns both the intermediate postfix string and
/// the final number. Callers that only need one stage can use
/// [`engine::converter::convert`] or [`engine::evaluator::evaluate`] directly.
///
/// # Errors
/// Returns an error if the infix expression is malformed or if the resulting
/// postfix expression cannot be reduced to a single value.
///
/// # Examples
/// ```
/// use shunter::compute;
///
/// let evaluation = compute("2+3*4").unwrap();
/// assert_eq!(evaluation.postfix, "2 3 4 * +");
/// assert_eq!(evaluation.result, 14.0);
///
/// // Malformed input is rejected with a positional diagnostic.
/// assert!(compute("2+@3").is_err());
/// ```
pub fn compute(infix: &str) -> Result<Evaluation, Box<dyn std::error::Error>> {
    let postfix = convert(infix)?;
    let result = evaluate(&postfix)?;

    Ok(Evaluation { postfix, result })
}
