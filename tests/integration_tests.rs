//! Integration tests for the lexer-to-AST pipeline.
//!
//! These tests drive the public API the way an embedding tool would:
//! source text goes through the lexer, the parser pulls tokens from it, and
//! the caller inspects the program and the recorded errors.

use imposter::{
    ast::ast::{Expression, Node, Program, Statement},
    lexer::lexer::{tokenize, Lexer},
    lexer::source::TokenStream,
    parser::parser::{parse, Parser},
    render_error,
};

fn parse_source(source: &str) -> (Parser, Program) {
    parse(Lexer::new(source.to_string(), Some("test.imp".to_string())))
}

#[test]
fn test_parse_mixed_program() {
    let source = r#"
        var x = 5;
        var y = 10 + x;
        // comments are skipped
        return x;
        foobar;
        42
    "#;
    let (parser, program) = parse_source(source);

    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    assert_eq!(program.len(), 5);
    assert!(matches!(&program.statements[0], Statement::Var(var) if var.name.value == "x"));
    assert!(matches!(&program.statements[1], Statement::Var(var) if var.name.value == "y"));
    assert!(matches!(&program.statements[2], Statement::Return(_)));
    assert!(matches!(
        &program.statements[3],
        Statement::Expression(stmt) if matches!(&stmt.expression, Expression::Identifier(ident) if ident.value == "foobar")
    ));
    assert!(matches!(
        &program.statements[4],
        Statement::Expression(stmt) if matches!(&stmt.expression, Expression::Integer(literal) if literal.value == 42)
    ));
    assert_eq!(program.token_literal(), "var");
}

#[test]
fn test_partial_program_survives_errors() {
    let source = "var a = 1;\nvar b 2;\nvar;\nreturn a;";
    let (parser, program) = parse_source(source);

    assert_eq!(
        parser.errors(),
        vec![
            "expected next token to be Assignment, got Integer instead",
            "expected next token to be Identifier, got Semicolon instead",
        ]
    );
    let vars: Vec<&str> = program
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::Var(var) => Some(var.name.value.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(vars, vec!["a"]);
    assert!(matches!(program.statements.last(), Some(Statement::Return(_))));
}

#[test]
fn test_lexer_and_token_stream_agree() {
    let source = "var x = 5;\nx;\nreturn 99999999999999999999;\n7;";

    let (lexer_parser, lexer_program) = parse_source(source);
    let tokens = tokenize(source.to_string(), Some("test.imp".to_string()));
    let (stream_parser, stream_program) = parse(TokenStream::new(tokens));

    assert_eq!(lexer_program, stream_program);
    assert_eq!(lexer_parser.errors(), stream_parser.errors());
}

#[test]
fn test_unterminated_statements_terminate() {
    for source in ["var x = 5", "return", "var x =", "return 1 2 3"] {
        let (parser, program) = parse_source(source);

        assert_eq!(
            parser.errors(),
            vec!["expected next token to be Semicolon, got EOF instead"],
            "{}",
            source
        );
        assert!(program.is_empty(), "{}", source);
    }
}

#[test]
fn test_render_recorded_error() {
    let source = "var ok = 1;\nvar broken 5;\n";
    let (parser, _) = parse_source(source);

    assert_eq!(parser.diagnostics().len(), 1);
    let rendered = render_error(&parser.diagnostics()[0], source, "test.imp");

    assert!(rendered.starts_with("Error: UnexpectedToken"));
    assert!(rendered.contains("-> test.imp"));
    assert!(rendered.contains("2 | var broken 5;"));
    assert!(rendered.contains("-----------^"));
}

#[test]
fn test_program_display() {
    let (parser, program) = parse_source("var x = 1; return x; y;");

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "var x = ;return;y");
}
