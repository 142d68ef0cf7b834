use crate::lexer::prelude::Lexer;
use super::prelude::{parse_source, Parser, Precedence};

fn rendered(src: &str) -> String {
    parse_source(src)
        .unwrap_or_else(|errors| panic!("{src:?} should parse, got {errors:?}"))
        .to_string()
}

#[test]
fn test_precedence() {
    // `&` binds tighter than `|`/`^`, which bind tighter than `->`,
    // which binds tighter than `<->`
    assert_eq!(rendered("P & Q | R"), "((P & Q) | R)");
    assert_eq!(rendered("P | Q & R"), "(P | (Q & R))");
    assert_eq!(rendered("P <-> Q -> R"), "(P <-> (Q -> R))");
    assert_eq!(rendered("P -> Q | R"), "(P -> (Q | R))");
    assert_eq!(rendered("~P & Q"), "((~P) & Q)");
    assert_eq!(rendered("~P <-> Q ^ R -> S"), "((~P) <-> ((Q ^ R) -> S))");
}

#[test]
fn test_associativity() {
    assert_eq!(rendered("P | Q | R"), "((P | Q) | R)");
    assert_eq!(rendered("P | Q ^ R"), "((P | Q) ^ R)");
    assert_eq!(rendered("P -> Q -> R"), "((P -> Q) -> R)");
    assert_eq!(rendered("P & Q & R & S"), "(((P & Q) & R) & S)");
}

#[test]
fn test_grouping() {
    assert_eq!(rendered("(P)"), "P");
    assert_eq!(rendered("((P))"), "P");
    assert_eq!(rendered("P & (Q | R)"), "(P & (Q | R))");
    assert_eq!(rendered("(P <-> Q) -> R"), "((P <-> Q) -> R)");
    assert_eq!(rendered("~(P & Q)"), "(~(P & Q))");
}

#[test]
fn test_boolean_literals() {
    assert_eq!(rendered("true"), "true");
    assert_eq!(rendered("true & false"), "(true & false)");
    assert_eq!(rendered("~false"), "(~false)");
}

#[test]
fn test_prefix_chains() {
    assert_eq!(rendered("~~P"), "(~(~P))");
    assert_eq!(rendered("~~~P"), "(~(~(~P)))");
}

#[test]
fn test_pretty_print() {
    let expression = parse_source("~P").unwrap();

    assert_eq!(
        expression.pretty_print(""),
        "Prefix[\n  Operator: ~\n  Right:\n    Identifier(P)\n]"
    );

    let expression = parse_source("P & true").unwrap();

    assert_eq!(
        expression.pretty_print(""),
        "Infix[\n  Operator: &\n  Left:\n    Identifier(P)\n  Right:\n    Boolean(true)\n]"
    );
}

#[test]
fn test_missing_operand() {
    let errors = parse_source("P &").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].message().contains("no prefix parse function"),
        "unexpected message: {}",
        errors[0].message()
    );
}

#[test]
fn test_illegal_token() {
    let errors = parse_source("#").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "no prefix parse function for `#` found");
}

#[test]
fn test_missing_rparen() {
    let errors = parse_source("(P & Q").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].message().starts_with("expected next token to be `)`"),
        "unexpected message: {}",
        errors[0].message()
    );
}

#[test]
fn test_set_keyword_is_not_an_expression() {
    let errors = parse_source("SET").unwrap_err();

    assert_eq!(errors[0].message(), "no prefix parse function for `SET` found");
}

#[test]
fn test_errors_accumulate_across_retries() {
    let lexer = Lexer::new("&".char_indices().map(|(i, c)| (i as u32, c)));
    let mut parser = Parser::new(lexer);

    // the offending token is not consumed, so every retry records the
    // same failure
    assert!(parser.parse_expression(Precedence::Lowest).is_none());
    assert!(parser.parse_expression(Precedence::Lowest).is_none());

    assert_eq!(parser.errors().len(), 2);
}

#[test]
fn test_render_round_trip() {
    let inputs = [
        "P",
        "~P",
        "P & Q | R",
        "P -> Q -> R",
        "~(P & Q) | (R ^ S)",
        "((P -> Q) & (R -> S)) <-> (~P | ~R)",
        "P <-> Q ^ R & ~S -> true",
    ];

    for input in inputs {
        let first = rendered(input);
        let second = rendered(&first);

        assert_eq!(first, second, "rendering of {input:?} is not a fixpoint");
    }
}
