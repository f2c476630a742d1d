use leafref_path::{Env, Parser, PathArgument, PathErrorType};

fn must_parse(expr: &str) {
    PathArgument::new(expr).unwrap_or_else(|err| panic!("{}", err));
}

mod errors {
    use super::*;

    #[test]
    #[should_panic(expected = "expected a node identifier, found '/' [L1:C2]")]
    fn empty_segment() {
        must_parse("//a");
    }

    #[test]
    #[should_panic(expected = "lexer error: unexpected character '!' [L1:C3]")]
    fn illegal_character() {
        must_parse("a ! b");
    }

    #[test]
    #[should_panic(expected = "expected a node identifier, found ')' [L1:C7]")]
    fn empty_deref_argument() {
        must_parse("deref()");
    }

    #[test]
    #[should_panic(expected = "unexpected end of expression [L1:C8]")]
    fn deref_without_trailing_path() {
        must_parse("deref(a");
    }

    #[test]
    #[should_panic(expected = "expected '/', found 'a' [L1:C3]")]
    fn dots_without_separator() {
        must_parse("..a");
    }

    #[test]
    #[should_panic(expected = "unexpected end of expression [L1:C1]")]
    fn empty_path() {
        must_parse("");
    }

    #[test]
    #[should_panic(expected = "unexpected end of expression [L1:C4]")]
    fn trailing_slash() {
        must_parse("/a/");
    }

    #[test]
    #[should_panic(expected = "expected end of expression, found ' ' [L1:C5]")]
    fn trailing_whitespace() {
        must_parse("/a/b ");
    }

    #[test]
    #[should_panic(expected = "expected a node identifier, found ' ' [L1:C1]")]
    fn leading_whitespace() {
        must_parse(" /a");
    }

    #[test]
    #[should_panic(expected = "expected end of expression, found ' ' [L1:C3]")]
    fn whitespace_before_predicate() {
        must_parse("/a [k=current()/x]");
    }

    #[test]
    #[should_panic(expected = "expected a node identifier, found ' ' [L1:C5]")]
    fn whitespace_after_colon() {
        must_parse("/if: name");
    }

    #[test]
    #[should_panic(expected = "unexpected end of expression [L1:C20]")]
    fn relative_predicate_without_absolute_path() {
        must_parse("../a[k=current()/x]");
    }

    #[test]
    #[should_panic(expected = "expected 'current', found 'x' [L1:C6]")]
    fn predicate_without_current() {
        must_parse("/a[k=x]");
    }

    #[test]
    #[should_panic(expected = "expected '/', found ']' [L1:C15]")]
    fn predicate_without_key_path() {
        must_parse("/a[k=current()]");
    }

    #[test]
    #[should_panic(expected = "expected a node identifier, found '..' [L1:C18]")]
    fn predicate_dots_after_node() {
        must_parse("/a[k=current()/x/../y]");
    }

    #[test]
    #[should_panic(expected = "expected ']', found '[' [L1:C17]")]
    fn nested_predicate() {
        must_parse("/a[k=current()/x[l=current()/y]]");
    }

    #[test]
    #[should_panic(expected = "expected ')', found '(' [L1:C12]")]
    fn nested_deref() {
        must_parse("deref(deref(../a)/b)/c");
    }

    #[test]
    #[should_panic(expected = "expected end of expression, found '(' [L1:C8]")]
    fn current_outside_predicate() {
        must_parse("current()/a");
    }

    #[test]
    #[should_panic(expected = "expected a node identifier, found '/' [L1:C10]")]
    fn deref_with_absolute_path() {
        must_parse("deref(a)//b");
    }

    #[test]
    #[should_panic(expected = "lexer error: unexpected character '*' [L1:C4]")]
    fn wildcard() {
        must_parse("/a/*");
    }

    #[test]
    #[should_panic(expected = "syntax error: deref() is not permitted [L1:C1]")]
    fn strict_deref() {
        Parser::new(Env::rfc7950())
            .parse("deref(../a)/b")
            .unwrap_or_else(|err| panic!("{}", err));
    }
}

#[test]
fn error_kinds() {
    let err = PathArgument::new("a ! b").unwrap_err();
    assert_eq!(err.kind, PathErrorType::LexerError);
    assert_eq!((err.line, err.column), (1, 3));

    let err = PathArgument::new("//a").unwrap_err();
    assert_eq!(err.kind, PathErrorType::SyntaxError);
    assert_eq!((err.line, err.column), (1, 2));
    assert_eq!(err.msg, "expected a node identifier, found '/'");
}

#[test]
fn strict_parser_accepts_deref_identifier() {
    let parser = Parser::new(Env::rfc7950());
    let path = parser.parse("../deref/x").unwrap();
    assert_eq!(path.up, 1);
    assert_eq!(path.down.len(), 2);
    assert!(!path.has_deref());
}

#[test]
fn default_env_allows_deref() {
    assert_eq!(Env::default(), Env::standard());
    assert!(Parser::default().env().allow_deref);
    assert!(Parser::default().parse("deref(a)/b").is_ok());
}
