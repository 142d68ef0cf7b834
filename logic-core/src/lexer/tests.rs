use super::prelude::{Lexer, Token};

#[test]
fn test_connectives() {
    let input = "P & Q | (R ^ ~S) -> true <-> false SET x";

    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    let tokens = vec![
        Token::Ident(String::from("P")),
        Token::And,
        Token::Ident(String::from("Q")),
        Token::Or,
        Token::LParen,
        Token::Ident(String::from("R")),
        Token::Xor,
        Token::Not,
        Token::Ident(String::from("S")),
        Token::RParen,
        Token::Implies,
        Token::True,
        Token::Iff,
        Token::False,
        Token::Set,
        Token::Ident(String::from("x")),
        Token::Eof,
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = lexer.next_token();

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }
}

#[test]
fn test_no_whitespace() {
    let input = "~P&Q->R";

    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    let tokens = vec![
        Token::Not,
        Token::Ident(String::from("P")),
        Token::And,
        Token::Ident(String::from("Q")),
        Token::Implies,
        Token::Ident(String::from("R")),
        Token::Eof,
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = lexer.next_token();

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }
}

#[test]
fn test_illegal_characters() {
    // a lone `-` or a `<` that does not complete `<->` is not an operator
    let input = "- <- < # $ 5 .";

    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    let tokens = vec![
        Token::Illegal(String::from("-")),
        Token::Illegal(String::from("<-")),
        Token::Illegal(String::from("<")),
        Token::Illegal(String::from("#")),
        Token::Illegal(String::from("$")),
        Token::Illegal(String::from("5")),
        Token::Illegal(String::from(".")),
        Token::Eof,
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = lexer.next_token();

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    let input = "set True FALSE SETX";

    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

    let tokens = vec![
        Token::Ident(String::from("set")),
        Token::Ident(String::from("True")),
        Token::Ident(String::from("FALSE")),
        Token::Ident(String::from("SETX")),
        Token::Eof,
    ];

    for (idx, token) in tokens.iter().enumerate() {
        let (_, next_token, _) = lexer.next_token();

        assert_eq!(
            *token, next_token,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            next_token, token, idx
        );
    }
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("P".char_indices().map(|(i, c)| (i as u32, c)));

    assert_eq!(lexer.next_token().1, Token::Ident(String::from("P")));

    for _ in 0..3 {
        assert_eq!(lexer.next_token().1, Token::Eof);
    }
}

#[test]
fn test_spans() {
    let mut lexer = Lexer::new("P <-> Q".char_indices().map(|(i, c)| (i as u32, c)));

    assert_eq!(lexer.next_token(), (0, Token::Ident(String::from("P")), 1));
    assert_eq!(lexer.next_token(), (2, Token::Iff, 5));
    assert_eq!(lexer.next_token(), (6, Token::Ident(String::from("Q")), 7));
}
