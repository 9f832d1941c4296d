//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::arena::ExprArena;
use crate::ast::{Expr, OpType};
use crate::builtins::{is_builtin_constant, is_builtin_function, BuiltinFunction};
use crate::lexer::Lexer;
use crate::parser::{parse, ParseErrorKind};
use crate::token::Token;

fn number(text: &str) -> Token {
    Token::Number {
        text: text.to_string(),
        has_dot: text.contains('.'),
    }
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_math() {
    let mut lexer = Lexer::new("1 + 2");

    assert_eq!(lexer.next_token(), number("1"));
    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), number("2"));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn lexer_tokenizes_all_operators() {
    let mut lexer = Lexer::new("+ - * / ^ ( ) , #");

    assert_eq!(lexer.next_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Minus);
    assert_eq!(lexer.next_token(), Token::Asterisk);
    assert_eq!(lexer.next_token(), Token::Slash);
    assert_eq!(lexer.next_token(), Token::Caret);
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::RParen);
    assert_eq!(lexer.next_token(), Token::Comma);
    assert_eq!(lexer.next_token(), Token::Hash);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn lexer_marks_decimal_point() {
    let mut lexer = Lexer::new("3.14 42");

    assert_eq!(
        lexer.next_token(),
        Token::Number {
            text: "3.14".to_string(),
            has_dot: true
        }
    );
    assert_eq!(
        lexer.next_token(),
        Token::Number {
            text: "42".to_string(),
            has_dot: false
        }
    );
}

#[test]
fn lexer_second_dot_ends_literal() {
    let mut lexer = Lexer::new("1.2.3");

    assert_eq!(lexer.next_token(), number("1.2"));
    assert_eq!(lexer.next_token(), Token::Illegal('.'));
    assert_eq!(lexer.next_token(), number("3"));
}

#[test]
fn lexer_tokenizes_identifiers_and_calls() {
    let mut lexer = Lexer::new("sin(x1)");

    assert_eq!(lexer.next_token(), Token::Identifier("sin".to_string()));
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::Identifier("x1".to_string()));
    assert_eq!(lexer.next_token(), Token::RParen);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn lexer_eof_is_idempotent() {
    let mut lexer = Lexer::new("  ");

    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn lexer_peek_does_not_advance() {
    let mut lexer = Lexer::new("1 + 2");

    assert_eq!(lexer.peek_token(), number("1"));
    assert_eq!(lexer.peek_token(), number("1"));
    assert_eq!(lexer.next_token(), number("1"));
    assert_eq!(lexer.peek_token(), Token::Plus);
    assert_eq!(lexer.next_token(), Token::Plus);
}

#[test]
fn lexer_reports_illegal_characters() {
    let mut lexer = Lexer::new("1 ? 2");

    assert_eq!(lexer.next_token(), number("1"));
    assert_eq!(lexer.next_token(), Token::Illegal('?'));
}

#[test]
fn lexer_current_char_tracks_cursor() {
    let mut lexer = Lexer::new("ab");

    assert_eq!(lexer.current_char(), Some('a'));
    lexer.next_token();
    assert_eq!(lexer.current_char(), None);
}

// ========================================
// PARSER TESTS - LITERALS AND SYMBOLS
// ========================================

#[test]
fn parser_parses_integer_literal() {
    let mut arena = ExprArena::new();
    let root = parse("42", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Integer(42));
}

#[test]
fn parser_parses_real_literal() {
    let mut arena = ExprArena::new();
    let root = parse("3.14159", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Real(3.14159));
}

#[test]
fn parser_parses_free_symbol() {
    let mut arena = ExprArena::new();
    let root = parse("foo", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Symbol("foo".to_string()));
}

#[test]
fn parser_parses_builtin_constant_as_symbol() {
    let mut arena = ExprArena::new();
    let root = parse("pi", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Symbol("pi".to_string()));
    assert!(is_builtin_constant("pi"));
    assert!(is_builtin_constant("e"));
    assert!(!is_builtin_constant("x"));
}

#[test]
fn parser_parses_empty_input_to_empty_node() {
    let mut arena = ExprArena::new();
    let root = parse("", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Empty);

    let root = parse("   ", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Empty);
}

#[test]
fn parser_accepts_max_integer_literal() {
    let mut arena = ExprArena::new();
    let root = parse("9223372036854775807", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Integer(i64::MAX));
}

// ========================================
// PARSER TESTS - PRECEDENCE AND SHAPE
// ========================================

#[test]
fn parser_gives_mul_higher_precedence_than_add() {
    let mut arena = ExprArena::new();
    let root = parse("1+2*3", &mut arena).unwrap();

    // Expected shape: Add(1, Mul(2, 3))
    let one = arena.integer(1);
    let two = arena.integer(2);
    let three = arena.integer(3);
    let mul = arena.binop(OpType::Mul, two, three);
    let expected = arena.binop(OpType::Add, one, mul);

    assert!(arena.structural_eq(root, expected));
}

#[test]
fn parser_respects_parentheses() {
    let mut arena = ExprArena::new();
    let root = parse("(1+2)*3", &mut arena).unwrap();

    let one = arena.integer(1);
    let two = arena.integer(2);
    let add = arena.binop(OpType::Add, one, two);
    let three = arena.integer(3);
    let expected = arena.binop(OpType::Mul, add, three);

    assert!(arena.structural_eq(root, expected));
}

#[test]
fn parser_makes_add_left_associative() {
    let mut arena = ExprArena::new();
    let root = parse("1-2-3", &mut arena).unwrap();

    // Expected shape: Sub(Sub(1, 2), 3)
    let one = arena.integer(1);
    let two = arena.integer(2);
    let inner = arena.binop(OpType::Sub, one, two);
    let three = arena.integer(3);
    let expected = arena.binop(OpType::Sub, inner, three);

    assert!(arena.structural_eq(root, expected));
}

#[test]
fn parser_makes_power_right_associative() {
    let mut arena = ExprArena::new();
    let root = parse("2^3^2", &mut arena).unwrap();

    // Expected shape: Pow(2, Pow(3, 2))
    let three = arena.integer(3);
    let two_inner = arena.integer(2);
    let inner = arena.binop(OpType::Pow, three, two_inner);
    let two = arena.integer(2);
    let expected = arena.binop(OpType::Pow, two, inner);

    assert!(arena.structural_eq(root, expected));
}

// ========================================
// PARSER TESTS - UNARY SIGN
// ========================================

#[test]
fn parser_records_unary_minus_as_its_own_operator() {
    let mut arena = ExprArena::new();
    let root = parse("-x", &mut arena).unwrap();

    match arena.get(root) {
        Expr::UnaryOp { op, operand } => {
            assert_eq!(*op, OpType::USub);
            assert_eq!(arena.get(*operand), &Expr::Symbol("x".to_string()));
        }
        other => panic!("expected unary node, got {:?}", other),
    }
}

#[test]
fn parser_records_unary_plus() {
    let mut arena = ExprArena::new();
    let root = parse("+x", &mut arena).unwrap();

    match arena.get(root) {
        Expr::UnaryOp { op, .. } => assert_eq!(*op, OpType::UAdd),
        other => panic!("expected unary node, got {:?}", other),
    }
}

#[test]
fn parser_parses_double_negation() {
    let mut arena = ExprArena::new();
    let root = parse("--x", &mut arena).unwrap();

    let x = arena.symbol("x");
    let inner = arena.unaryop(OpType::USub, x);
    let expected = arena.unaryop(OpType::USub, inner);

    assert!(arena.structural_eq(root, expected));
}

#[test]
fn parser_allows_signed_exponent() {
    let mut arena = ExprArena::new();
    let root = parse("2^-3", &mut arena).unwrap();

    let three = arena.integer(3);
    let neg = arena.unaryop(OpType::USub, three);
    let two = arena.integer(2);
    let expected = arena.binop(OpType::Pow, two, neg);

    assert!(arena.structural_eq(root, expected));
}

#[test]
fn parser_binds_unary_below_power() {
    // -2^2 parses as -(2^2), matching the precedence table.
    let mut arena = ExprArena::new();
    let root = parse("-2^2", &mut arena).unwrap();

    let two = arena.integer(2);
    let two2 = arena.integer(2);
    let pow = arena.binop(OpType::Pow, two, two2);
    let expected = arena.unaryop(OpType::USub, pow);

    assert!(arena.structural_eq(root, expected));
}

// ========================================
// PARSER TESTS - FUNCTION CALLS
// ========================================

#[test]
fn parser_parses_builtin_call() {
    let mut arena = ExprArena::new();
    let root = parse("sin(x)", &mut arena).unwrap();

    match arena.get(root) {
        Expr::Call { func, args } => {
            assert_eq!(*func, BuiltinFunction::Sin);
            assert_eq!(args.len(), 1);
            assert_eq!(arena.get(args[0]), &Expr::Symbol("x".to_string()));
        }
        other => panic!("expected call node, got {:?}", other),
    }
}

#[test]
fn parser_parses_empty_argument_list() {
    let mut arena = ExprArena::new();
    let root = parse("sqrt()", &mut arena).unwrap();

    match arena.get(root) {
        Expr::Call { func, args } => {
            assert_eq!(*func, BuiltinFunction::Sqrt);
            assert!(args.is_empty());
        }
        other => panic!("expected call node, got {:?}", other),
    }
}

#[test]
fn parser_parses_comma_separated_arguments() {
    let mut arena = ExprArena::new();
    let root = parse("log(x, 1+2)", &mut arena).unwrap();

    match arena.get(root) {
        Expr::Call { func, args } => {
            assert_eq!(*func, BuiltinFunction::Log);
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected call node, got {:?}", other),
    }
}

#[test]
fn parser_rejects_unknown_call_but_accepts_free_symbol() {
    let mut arena = ExprArena::new();

    let err = parse("foo(1)", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert!(err.message.contains("foo"));

    let root = parse("foo", &mut arena).unwrap();
    assert_eq!(arena.get(root), &Expr::Symbol("foo".to_string()));
}

// ========================================
// PARSER TESTS - ERRORS
// ========================================

#[test]
fn parser_rejects_trailing_operator() {
    let mut arena = ExprArena::new();
    let err = parse("1+", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

#[test]
fn parser_rejects_unmatched_parenthesis() {
    let mut arena = ExprArena::new();
    let err = parse("(1+2", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

#[test]
fn parser_rejects_trailing_tokens() {
    let mut arena = ExprArena::new();
    let err = parse("1 2", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert!(err.message.contains("after expression"));
}

#[test]
fn parser_reports_lexical_errors() {
    let mut arena = ExprArena::new();
    let err = parse("?", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Lexical);
}

#[test]
fn parser_rejects_stray_hash() {
    let mut arena = ExprArena::new();
    let err = parse("#", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

#[test]
fn parser_reports_integer_literal_overflow() {
    let mut arena = ExprArena::new();
    let err = parse("9223372036854775808", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Range);
}

#[test]
fn parser_rejects_malformed_argument_list() {
    let mut arena = ExprArena::new();
    let err = parse("sin(x,)", &mut arena).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

// ========================================
// BUILTIN TABLE TESTS
// ========================================

#[test]
fn builtin_function_table_round_trips_names() {
    for name in ["sqrt", "exp", "ln", "log", "sin", "cos", "tan", "abs"] {
        let func = BuiltinFunction::from_name(name).unwrap();
        assert_eq!(func.name(), name);
        assert!(is_builtin_function(name));
    }
    assert!(!is_builtin_function("frobnicate"));
}

// ========================================
// ARENA AND PREDICATE TESTS
// ========================================

#[test]
fn arena_alloc_and_get() {
    let mut arena = ExprArena::new();
    assert!(arena.is_empty());

    let a = arena.integer(1);
    let b = arena.symbol("x");
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(a), &Expr::Integer(1));
    assert_eq!(arena.get(b), &Expr::Symbol("x".to_string()));
}

#[test]
fn structural_eq_compares_shape_not_handles() {
    let mut arena = ExprArena::new();

    let first = parse("x+1", &mut arena).unwrap();
    let second = parse("x+1", &mut arena).unwrap();
    let different = parse("x+2", &mut arena).unwrap();

    assert_ne!(first, second); // distinct handles
    assert!(arena.structural_eq(first, second));
    assert!(!arena.structural_eq(first, different));
}

#[test]
fn same_kind_is_shallow() {
    let mut arena = ExprArena::new();

    let add = parse("1+2", &mut arena).unwrap();
    let other_add = parse("3+4", &mut arena).unwrap();
    let sub = parse("1-2", &mut arena).unwrap();

    assert!(arena.same_kind(add, other_add));
    assert!(!arena.same_kind(add, sub)); // same node kind, different operator
    assert!(!arena.structural_eq(add, other_add));
}

#[test]
fn contains_finds_subtrees() {
    let mut arena = ExprArena::new();

    let tree = parse("sin(x+1)*2", &mut arena).unwrap();
    let x = arena.symbol("x");
    let y = arena.symbol("y");

    assert!(arena.contains(tree, x));
    assert!(!arena.contains(tree, y));
}

#[test]
fn flatten_is_preorder() {
    let mut arena = ExprArena::new();

    let root = parse("1+2*3", &mut arena).unwrap();
    let flat = arena.flatten(root);

    assert_eq!(flat.len(), 5);
    assert_eq!(flat[0], root);
    assert_eq!(arena.get(flat[1]), &Expr::Integer(1));
    assert!(matches!(arena.get(flat[2]), Expr::BinOp { op: OpType::Mul, .. }));
    assert_eq!(arena.get(flat[3]), &Expr::Integer(2));
    assert_eq!(arena.get(flat[4]), &Expr::Integer(3));
}

#[test]
fn is_numeric_is_true_only_for_leaves() {
    let mut arena = ExprArena::new();

    let int = arena.integer(3);
    let real = arena.real(0.5);
    let sym = arena.symbol("x");
    let frac = parse("1/4", &mut arena).unwrap();

    assert!(arena.is_numeric(int));
    assert!(arena.is_numeric(real));
    assert!(!arena.is_numeric(sym));
    assert!(!arena.is_numeric(frac)); // a fraction node is a BinOp, not a leaf
}

#[test]
fn is_fraction_requires_integer_operands() {
    let mut arena = ExprArena::new();

    let int_div = parse("1/4", &mut arena).unwrap();
    let real_div = parse("1.0/4", &mut arena).unwrap();
    let sym_div = parse("x/4", &mut arena).unwrap();

    assert!(arena.is_fraction(int_div));
    assert!(!arena.is_fraction(real_div));
    assert!(!arena.is_fraction(sym_div));
}

#[test]
fn as_f64_coerces_numerics_and_fractions() {
    let mut arena = ExprArena::new();

    let int = arena.integer(3);
    let real = arena.real(0.25);
    let frac = parse("1/4", &mut arena).unwrap();
    let sym = arena.symbol("x");

    assert_eq!(arena.as_f64(int), Some(3.0));
    assert_eq!(arena.as_f64(real), Some(0.25));
    assert_eq!(arena.as_f64(frac), Some(0.25));
    assert_eq!(arena.as_f64(sym), None);
}
