use lox_scanner::{Literal, SAMPLE_PROGRAM, TokenType, debug, scan};

#[test]
fn scans_sample_program() {
    let output = scan(SAMPLE_PROGRAM);
    assert!(!output.had_error());

    let kinds: Vec<_> = output.tokens.iter().map(|t| t.token_type).collect();
    assert_eq!(
        kinds,
        vec![
            TokenType::Var,
            TokenType::Identifier,
            TokenType::Equal,
            TokenType::Number,
            TokenType::Plus,
            TokenType::Number,
            TokenType::Semicolon,
            TokenType::Var,
            TokenType::Identifier,
            TokenType::Equal,
            TokenType::String,
            TokenType::Semicolon,
            TokenType::Print,
            TokenType::Identifier,
            TokenType::Semicolon,
            TokenType::Identifier,
            TokenType::Equal,
            TokenType::String,
            TokenType::Semicolon,
            TokenType::Print,
            TokenType::Identifier,
            TokenType::Semicolon,
            TokenType::Eof,
        ]
    );

    assert_eq!(output.tokens[10].literal, Some(Literal::Str("bagels")));
    assert_eq!(output.tokens[17].literal, Some(Literal::Str("beignets")));
    assert_eq!(output.tokens[0].line, 2);
    assert_eq!(output.tokens.last().map(|t| t.line), Some(7));
}

#[test]
fn independent_scans_do_not_share_errors() {
    let bad = scan("var x = @;");
    let good = scan("var x = 1;");
    assert!(bad.had_error());
    assert!(!good.had_error());
    assert_eq!(bad.errors.len(), 1);
}

#[test]
fn listing_renders_every_token() {
    let output = scan("print \"hi\";");
    let listing = debug::token_listing(&output.tokens);
    assert!(listing.contains("STRING \"hi\" hi"));
    assert!(listing.ends_with("EOF  null\n"));
    assert_eq!(listing.lines().count(), output.tokens.len());
}
