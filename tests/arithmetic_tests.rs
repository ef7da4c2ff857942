use climb::interpreter::{evaluate, RuntimeError};
use climb::parser::ast::SourceLocation;
use climb::parser::lexer::{LexError, Token};
use climb::parser::{ParseError, Parser};
use climb::{evaluate_str, Error, REFERENCE_EXPRESSION};

fn run(source: &str) -> i32 {
    let mut parser = Parser::new(source);
    let expr = parser.parse().expect("Parsing failed");
    evaluate(&expr).expect("Evaluation failed")
}

#[test]
fn test_every_digit_evaluates_to_itself() {
    for d in 0..=9 {
        assert_eq!(run(&d.to_string()), d);
    }
}

#[test]
fn test_precedence() {
    assert_eq!(run("3+4*2"), 11);
    assert_eq!(run("2*3+4"), 10);
    assert_eq!(run("9-8/4"), 7);
}

#[test]
fn test_left_associativity() {
    assert_eq!(run("8-3-2"), 3);
    assert_eq!(run("8/4/2"), 1);
    assert_eq!(run("9-1+2"), 10);
}

#[test]
fn test_reference_expression() {
    assert_eq!(run(REFERENCE_EXPRESSION), 36);
    assert_eq!(evaluate_str(REFERENCE_EXPRESSION), Ok(36));
}

#[test]
fn test_division_truncates() {
    assert_eq!(run("7/2"), 3);
    assert_eq!(run("1/9"), 0);
}

#[test]
fn test_division_by_zero() {
    let err = evaluate_str("5/0").unwrap_err();
    match &err {
        Error::Runtime(RuntimeError::DivisionByZero { expression, .. }) => {
            assert_eq!(expression, "(5 / 0)");
        }
        _ => panic!("Expected division by zero, got {:?}", err),
    }
    assert_eq!(err.location(), SourceLocation::new(1, 2));
    assert_eq!(
        err.to_string(),
        "Division by zero in (5 / 0) at line 1, column 2"
    );
}

#[test]
fn test_leading_operator() {
    let err = evaluate_str("+3").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnexpectedToken {
            expected: "number",
            found: Token::Plus(_),
            ..
        })
    ));
}

#[test]
fn test_trailing_operator() {
    let err = evaluate_str("3+").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnexpectedToken {
            found: Token::Eof(_),
            ..
        })
    ));
    assert_eq!(err.location(), SourceLocation::new(1, 3));
}

#[test]
fn test_unrecognized_characters() {
    for (source, character, column) in [("3+a", 'a', 3), ("3 +4", ' ', 2), ("(1)", '(', 1)] {
        let err = evaluate_str(source).unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::Lex(LexError {
                character,
                location: SourceLocation::new(1, column),
            })),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_multi_digit_is_not_a_number() {
    let err = evaluate_str("12+1").unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnexpectedToken {
            expected: "end of input",
            found: Token::Number(2, _),
            ..
        })
    ));
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = evaluate_str("6/3*2-1");
    let second = evaluate_str("6/3*2-1");
    assert_eq!(first, Ok(3));
    assert_eq!(first, second);

    let tree = climb::parser::parse("6/3*2-1").unwrap();
    assert_eq!(evaluate(&tree), evaluate(&tree));
}

#[test]
fn test_overflow_is_an_error() {
    let err = evaluate_str("9*9*9*9*9*9*9*9*9*9").unwrap_err();
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::IntegerOverflow { .. })
    ));
}

#[test]
fn test_long_additive_chain() {
    let source = format!("1{}", "+0".repeat(100_000));
    assert_eq!(evaluate_str(&source), Ok(1));

    let source = format!("9{}", "-1+1".repeat(50_000));
    assert_eq!(run(&source), 9);
}

#[test]
fn test_long_multiplicative_chain() {
    let source = format!("7{}", "*1".repeat(100_000));
    assert_eq!(evaluate_str(&source), Ok(7));

    let source = format!("8{}", "/1*1".repeat(50_000));
    assert_eq!(run(&source), 8);
}

#[test]
fn test_long_chain_mixing_precedence() {
    // Each `+2*3/3` term adds 2.
    let source = format!("0{}", "+2*3/3".repeat(20_000));
    assert_eq!(evaluate_str(&source), Ok(40_000));
}
