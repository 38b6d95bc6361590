use shunter::{
    compute,
    engine::{converter::convert, evaluator::evaluate},
    error::{EvalError, SyntaxError},
};

fn assert_converts(infix: &str, expected: &str) {
    match convert(infix) {
        Ok(postfix) => assert_eq!(postfix, expected, "wrong postfix for {infix:?}"),
        Err(e) => panic!("Conversion of {infix:?} failed: {e}"),
    }
}

fn assert_computes(infix: &str, expected: f64) {
    match compute(infix) {
        Ok(evaluation) => {
            assert!((evaluation.result - expected).abs() < 1e-9,
                    "{infix:?} evaluated to {}, expected {expected}",
                    evaluation.result);
        },
        Err(e) => panic!("Computation of {infix:?} failed: {e}"),
    }
}

#[test]
fn precedence_orders_operators() {
    assert_converts("2+3*4", "2 3 4 * +");
    assert_converts("2+3*4^2", "2 3 4 2 ^ * +");
    assert_converts("2*3+4", "2 3 * 4 +");
    assert_computes("2+3*4", 14.0);
    assert_computes("2+3*4^2", 50.0);
}

#[test]
fn equal_precedence_reduces_left_to_right() {
    assert_converts("8-3-2", "8 3 - 2 -");
    assert_converts("2^3^2", "2 3 ^ 2 ^");
    assert_computes("8-3-2", 3.0);
    assert_computes("2^3^2", 64.0);
    assert_computes("100/10/5", 2.0);
}

#[test]
fn parentheses_group_subexpressions() {
    // A numeral that does not open the expression is emitted with its
    // separating space, so the postfix string starts with one here.
    assert_converts("(2+3)*4", " 2 3 + 4 *");
    assert_computes("(2+3)*4", 20.0);
    assert_computes("2*(3+4)", 14.0);
    assert_computes("((1+2)*(3+4))", 21.0);
}

#[test]
fn negative_numbers_attach_their_sign() {
    assert_converts("-5+3", " -5 3 +");
    assert_computes("-5+3", -2.0);
    assert_computes("2*-3", -6.0);
    assert_computes("2--3", 5.0);
    assert_computes("-2^2", 4.0);
}

#[test]
fn decimal_numerals_stay_contiguous() {
    assert_converts("1.25+2.5", "1.25 2.5 +");
    assert_computes("1.25+2.5", 3.75);
    assert_computes(".5*4", 2.0);
    assert_computes("10/4", 2.5);
}

#[test]
fn spaces_between_tokens_are_skipped() {
    assert_converts("1 + 2", "1 2 +");
    assert_computes(" 2 * ( 3 + 4 ) ", 14.0);
}

#[test]
fn space_separated_digits_are_not_one_numeral() {
    // Contiguity is judged on the immediately previous raw character, so a
    // space splits the numeral and the leftover operand trips the evaluator.
    assert_converts("1 2", "1 2");
    assert_eq!(evaluate("1 2"), Err(EvalError::SurplusValues { count: 2 }));
}

#[test]
fn operator_without_operand_is_rejected() {
    assert_eq!(convert("2++3"),
               Err(SyntaxError::NonOperandBeforeOperator { position: 2,
                                                           found:    '+', }));
    assert_eq!(convert("*2"),
               Err(SyntaxError::NonOperandBeforeOperator { position: 0,
                                                           found:    '\0', }));
    assert_eq!(convert("(+2)"),
               Err(SyntaxError::NonOperandBeforeOperator { position: 1,
                                                           found:    '\0', }));
}

#[test]
fn unmatched_parentheses_are_rejected() {
    assert_eq!(convert("2+3)"), Err(SyntaxError::UnmatchedClosingParen { position: 3 }));
    assert_eq!(convert("(2+3"), Err(SyntaxError::UnclosedOpeningParen { position: 0 }));
    assert_eq!(convert("1*((2+3)"), Err(SyntaxError::UnclosedOpeningParen { position: 2 }));
}

#[test]
fn invalid_characters_are_rejected() {
    assert_eq!(convert("2+@3"),
               Err(SyntaxError::InvalidCharacter { position: 2,
                                                   found:    '@', }));
    assert_eq!(convert("2+a"),
               Err(SyntaxError::InvalidCharacter { position: 2,
                                                   found:    'a', }));
}

#[test]
fn evaluator_reports_missing_operands() {
    assert_eq!(evaluate("2 +"),
               Err(EvalError::MissingOperand { operator: '+',
                                               position: 2, }));
    assert_eq!(evaluate("*"),
               Err(EvalError::MissingOperand { operator: '*',
                                               position: 0, }));
}

#[test]
fn evaluator_rejects_unknown_tokens() {
    assert_eq!(evaluate("2 3 &"),
               Err(EvalError::InvalidToken { token:    "&".to_string(),
                                             position: 4, }));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_computes("8/2", 4.0);
    assert_eq!(evaluate("5 0 /"), Err(EvalError::DivisionByZero { position: 4 }));
    assert!(compute("5/0").is_err());
}

#[test]
fn empty_input_produces_no_result() {
    assert_eq!(convert("").unwrap(), "");
    assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate("()").unwrap_err(), EvalError::InvalidToken { token:    "(".to_string(),
                                                                      position: 0, });
}

#[test]
fn conversion_round_trips_through_evaluation() {
    assert_computes("2+3", 5.0);
    assert_computes("2^10", 1024.0);
    assert_computes("(1.5+2.5)*(2-4)", -8.0);
    assert_computes("-3*-3+1", 10.0);
}

#[test]
fn diagnostics_share_one_shape() {
    let syntax = SyntaxError::InvalidCharacter { position: 2,
                                                 found:    '@', };
    assert_eq!(syntax.to_string(), "Conversion syntax error: invalid character at 2: '@'. ");

    let unmatched = SyntaxError::UnmatchedClosingParen { position: 3 };
    assert_eq!(unmatched.to_string(),
               "Conversion syntax error: no matching opening parenthesis with closing at 3: ')'. ");

    let underflow = EvalError::MissingOperand { operator: '+',
                                                position: 2, };
    assert_eq!(underflow.to_string(),
               "Evaluation error: missing operand for operator at 2: '+'. Expected two operands.");
}
