use std::fs;

use reckon::{
    Context, compute,
    error::{EngineError, ParseError, RuntimeError},
    try_compute,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "calc")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, expression, expected) in extract_cases(&content) {
            count += 1;
            let actual = compute(&expression);
            assert!(same_value(actual, expected),
                    "Case on line {line_no} in {path:?} failed:\n{expression}\nExpected {expected}, got {actual}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Extracts `expression = expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(usize, String, f64)> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (expression, expected) =
                   line.rsplit_once(" = ")
                       .unwrap_or_else(|| panic!("Malformed case on line {}: {line}", i + 1));
               let expected = match expected.trim() {
                   "NaN" => f64::NAN,
                   "inf" => f64::INFINITY,
                   "-inf" => f64::NEG_INFINITY,
                   other => other.parse()
                                 .unwrap_or_else(|_| panic!("Bad expected value on line {}", i + 1)),
               };
               (i + 1, expression.trim().to_string(), expected)
           })
           .collect()
}

fn same_value(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

fn assert_value(src: &str, expected: f64) {
    match try_compute(src) {
        Ok(actual) => assert!(same_value(actual, expected),
                              "'{src}' evaluated to {actual}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(v) = try_compute(src) {
        panic!("'{src}' evaluated to {v} but was expected to fail")
    }
    assert!(compute(src).is_nan(), "'{src}' should collapse to NaN");
}

#[test]
fn single_operator() {
    assert_value("3+4", 7.0);
    assert_value("10%3", 1.0);
    assert_value("2^10", 1024.0);
    assert_value("9-12", -3.0);
    assert_value("7/2", 3.5);
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3^2", 18.0);
    assert_value("2-3*4+5", -5.0);
    assert_value("1+2*3^2-4/2", 17.0);
}

#[test]
fn same_priority_runs_left_to_right() {
    assert_value("8-3-2", 3.0);
    assert_value("8/4/2", 1.0);
    assert_value("2*6/4", 3.0);
    assert_value("2^3^2", 64.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2sin(0)", 0.0);
    assert_value("3√4", 6.0);
    assert_value("2abs(-3)", 6.0);
    assert_value("2cos(0)", 2.0);
}

#[test]
fn implicit_multiplication_only_follows_numbers() {
    assert_failure("(2)sin(0)");
    assert_failure("2(3)");
    assert_failure("(2)(3)");
}

#[test]
fn leading_negation() {
    assert_value("-5+2", -3.0);
    assert_value("-(2+3)", -5.0);
    assert_value("-2*3+1", -5.0);
    assert_value("(-4)*2", -8.0);
    assert_value("abs(-4)", 4.0);
}

#[test]
fn negation_after_an_operator_is_rejected() {
    assert_failure("2*-3");
    assert_value("2*(-3)", -6.0);
}

#[test]
fn nested_parentheses_and_functions() {
    assert_value("abs(-3*(2+2))", 12.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("((1))", 1.0);
    assert_value("sin(0)+cos(0)", 1.0);
    assert_value("log(100)*abs(-2)", 4.0);
    assert_value("(sin(0))", 0.0);
}

#[test]
fn stacked_prefixes_resolve_inside_out() {
    assert_value("√abs(-9)", 3.0);
    assert_value("√√16", 2.0);
    assert_value("√√√256", 2.0);
    assert_value("2^√16", 16.0);
    assert_value("√4^√4", 4.0);
}

#[test]
fn three_way_ties() {
    // Two implicit multiplications, each paired with a prefix at its position.
    assert_value("2√4√4", 8.0);
    assert_value("2√√16", 4.0);
    assert_value("3√abs(-16)", 12.0);
    assert_value("2^3√4", 16.0);
}

#[test]
fn decimal_separators() {
    assert_value("2,5*2", 5.0);
    assert_value("0.5+.5", 1.0);
    assert_failure("1.2.3");
    assert_failure("1,2.3");
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 2 + 3 * 4 ", 14.0);
    assert_value("2 sin( 0 )", 0.0);
}

#[test]
fn ieee_edge_cases_are_not_errors() {
    assert_eq!(try_compute("1/0"), Ok(f64::INFINITY));
    assert_eq!(try_compute("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(try_compute("0/0").unwrap().is_nan());
    assert!(try_compute("5%0").unwrap().is_nan());
    assert!(try_compute("log(-1)").unwrap().is_nan());
    assert!(try_compute("(-8)^0,5").unwrap().is_nan());
}

#[test]
fn malformed_input_is_nan() {
    for src in ["2+", "(2+3", "2++3", "", "   ", ")", "2)", "()", "sin()", "*3", "2x", "sin 0", "--5"] {
        assert_failure(src);
    }
}

#[test]
fn errors_name_their_cause() {
    assert_eq!(try_compute("(2+3"),
               Err(EngineError::Parse(ParseError::UnclosedParen { position: 0 })));
    assert_eq!(try_compute("2)"),
               Err(EngineError::Parse(ParseError::UnmatchedParen { position: 1 })));
    assert_eq!(try_compute("1+1.2.3"),
               Err(EngineError::Parse(ParseError::MalformedLiteral { literal:  "1.2.3".to_string(),
                                                                     position: 2, })));
    assert_eq!(try_compute(""), Err(EngineError::Parse(ParseError::EmptyExpression)));
    assert_eq!(try_compute("(2)(3)"),
               Err(EngineError::Runtime(RuntimeError::DanglingOperands { count: 2 })));
    assert!(matches!(try_compute("2+"),
                     Err(EngineError::Runtime(RuntimeError::OperandOutOfRange { .. }))));
    assert!(matches!(try_compute("2&3"),
                     Err(EngineError::Parse(ParseError::UnexpectedToken { position: 1, .. }))));
}

#[test]
fn nesting_is_bounded() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(reckon::MAX_DEPTH), 1.0);
    assert_eq!(try_compute(&nested(reckon::MAX_DEPTH + 1)),
               Err(EngineError::Parse(ParseError::TooDeeplyNested { depth:    reckon::MAX_DEPTH,
                                                                    position: reckon::MAX_DEPTH, })));
    assert!(compute(&nested(100_000)).is_nan());

    let shallow = Context::with_max_depth(3);
    assert_eq!(shallow.compute("abs(sin(√(0)))"), 0.0);
    assert!(shallow.compute("abs(sin(abs((0))))").is_nan());
}

#[test]
fn evaluation_is_idempotent() {
    for src in ["2+3*4", "√abs(-9)", "2^√16", "(2+3", "1/0"] {
        let first = compute(src);
        let second = compute(src);
        assert!(first.to_bits() == second.to_bits() || (first.is_nan() && second.is_nan()),
                "'{src}' gave {first} then {second}");
    }
}

#[test]
fn contexts_can_be_shared_between_threads() {
    let context = Context::new();
    let handles: Vec<_> = (0..4).map(|i| {
                                    std::thread::spawn(move || {
                                        context.compute(&format!("{i}*(2+3)"))
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().expect("thread panicked");
        assert_eq!(value, 5.0 * f64::from(u8::try_from(i).unwrap()));
    }
}
