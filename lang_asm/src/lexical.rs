//! Lexical rules for argument tokens.
//!
//! Every predicate matches the whole token; a rule that only matches a prefix
//! rejects the token.

use lang_tree::{ArgType, Argument};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, hex_digit1, oct_digit1, one_of, satisfy},
    combinator::{all_consuming, opt, recognize},
    multi::{count, many0},
    sequence::{pair, preceded, tuple},
    IResult, Parser,
};

const IDENT_SPECIAL: &str = "_-$&%*!?";

fn matches_fully<'a, O, P>(parser: P, token: &'a str) -> bool
where
    P: Parser<&'a str, O, nom::error::Error<&'a str>>,
{
    all_consuming(parser)(token).is_ok()
}

fn ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || IDENT_SPECIAL.contains(c)
}

fn ident_char(c: char) -> bool {
    ident_start(c) || c.is_ascii_digit()
}

fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(ident_start), take_while(ident_char)))(input)
}

fn frame(input: &str) -> IResult<&str, &str> {
    alt((tag("LF"), tag("TF"), tag("GF")))(input)
}

fn variable(input: &str) -> IResult<&str, &str> {
    recognize(tuple((frame, char('@'), ident)))(input)
}

fn int_payload(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            preceded(tag("0o"), oct_digit1),
            preceded(tag("0x"), hex_digit1),
            digit1,
        )),
    ))(input)
}

fn bool_payload(input: &str) -> IResult<&str, &str> {
    alt((tag("true"), tag("false")))(input)
}

fn plain_string_char(c: char) -> bool {
    !c.is_whitespace() && c != '#' && c != '\\'
}

fn escape_sequence(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('\\'), count(satisfy(|c| c.is_ascii_digit()), 3)))(input)
}

fn string_payload(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        recognize(satisfy(plain_string_char)),
        escape_sequence,
    ))))(input)
}

fn type_name(input: &str) -> IResult<&str, &str> {
    alt((tag("int"), tag("string"), tag("bool")))(input)
}

/// `LF@name`, `TF@name` or `GF@name`.
pub fn is_variable(token: &str) -> bool {
    matches_fully(variable, token)
}

pub fn is_label(token: &str) -> bool {
    matches_fully(ident, token)
}

pub fn is_type_name(token: &str) -> bool {
    matches_fully(type_name, token)
}

/// Decimal, `0o` octal or `0x` hex digits with an optional sign.
pub fn is_int_literal(payload: &str) -> bool {
    matches_fully(int_payload, payload)
}

pub fn is_bool_literal(payload: &str) -> bool {
    matches_fully(bool_payload, payload)
}

/// No raw whitespace or `#`; a backslash must start a `\DDD` escape.
pub fn is_string_literal(payload: &str) -> bool {
    matches_fully(string_payload, payload)
}

pub fn is_nil_literal(payload: &str) -> bool {
    payload == "nil"
}

/// Resolves a symbol token to a variable or a typed literal.
///
/// The text before the first `@` picks the rule, so a token can only ever
/// resolve to one tag. Literal payloads keep everything after that first `@`,
/// escape sequences included.
pub fn classify_symbol(token: &str) -> Option<Argument> {
    let (prefix, payload) = token.split_once('@')?;
    let (ty, valid) = match prefix {
        "LF" | "TF" | "GF" => {
            return is_variable(token).then(|| Argument::new(ArgType::Var, token));
        }
        "int" => (ArgType::Int, is_int_literal(payload)),
        "bool" => (ArgType::Bool, is_bool_literal(payload)),
        "string" => (ArgType::String, is_string_literal(payload)),
        "nil" => (ArgType::Nil, is_nil_literal(payload)),
        _ => return None,
    };
    valid.then(|| Argument::new(ty, payload))
}

pub fn is_symbol(token: &str) -> bool {
    classify_symbol(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables() {
        assert!(is_variable("GF@x"));
        assert!(is_variable("LF@_tmp1"));
        assert!(is_variable("TF@$&%*!?-"));
        assert!(!is_variable("gf@x"));
        assert!(!is_variable("XF@x"));
        assert!(!is_variable("GF@1x"));
        assert!(!is_variable("GF@"));
        assert!(!is_variable("GF@x y"));
        assert!(!is_variable("GF@x@y"));
    }

    #[test]
    fn labels() {
        assert!(is_label("loop"));
        assert!(is_label("_end-2"));
        assert!(is_label("int"));
        assert!(!is_label("2start"));
        assert!(!is_label("GF@x"));
        assert!(!is_label(""));
        assert!(!is_label("čau"));
    }

    #[test]
    fn type_names() {
        assert!(is_type_name("int"));
        assert!(is_type_name("string"));
        assert!(is_type_name("bool"));
        assert!(!is_type_name("nil"));
        assert!(!is_type_name("INT"));
        assert!(!is_type_name("integer"));
    }

    #[test]
    fn integers() {
        for ok in &["123", "-5", "+7", "0x1F", "0xff", "0o17", "-0o7", "+0xA", "0"] {
            assert!(is_int_literal(ok), "{} should be accepted", ok);
        }
        for bad in &["12.5", "abc", "", "-", "0x", "0o", "0o8", "0xG", "0X1F", "1_000", "--1"] {
            assert!(!is_int_literal(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn booleans() {
        assert!(is_bool_literal("true"));
        assert!(is_bool_literal("false"));
        assert!(!is_bool_literal("True"));
        assert!(!is_bool_literal("truefalse"));
        assert!(!is_bool_literal(""));
    }

    #[test]
    fn strings() {
        assert!(is_string_literal(""));
        assert!(is_string_literal("hello\\032world"));
        assert!(is_string_literal("\\010\\092"));
        assert!(is_string_literal("a@b<>&"));
        assert!(is_string_literal("žluťoučký"));
        assert!(!is_string_literal("bad\\world"));
        assert!(!is_string_literal("short\\12"));
        assert!(!is_string_literal("trailing\\"));
        assert!(!is_string_literal("with space"));
        assert!(!is_string_literal("hash#"));
    }

    #[test]
    fn four_digits_after_backslash_is_escape_then_digit() {
        assert!(is_string_literal("\\0321"));
    }

    #[test]
    fn nil() {
        assert!(is_nil_literal("nil"));
        assert!(!is_nil_literal("NIL"));
        assert!(!is_nil_literal(""));
    }

    #[test]
    fn symbols_resolve_to_one_tag() {
        let cases = [
            ("GF@x", ArgType::Var, "GF@x"),
            ("int@-5", ArgType::Int, "-5"),
            ("int@0x1F", ArgType::Int, "0x1F"),
            ("bool@false", ArgType::Bool, "false"),
            ("string@a@b", ArgType::String, "a@b"),
            ("string@", ArgType::String, ""),
            ("string@hello\\032world", ArgType::String, "hello\\032world"),
            ("nil@nil", ArgType::Nil, "nil"),
        ];
        for (token, ty, text) in &cases {
            assert_eq!(classify_symbol(token), Some(Argument::new(*ty, *text)), "{}", token);
        }
    }

    #[test]
    fn malformed_symbols() {
        for bad in &[
            "int@12.5",
            "int@abc",
            "bool@yes",
            "string@bad\\world",
            "nil@null",
            "float@1.0",
            "x",
            "label",
            "GF@1",
            "Int@1",
        ] {
            assert_eq!(classify_symbol(bad), None, "{}", bad);
            assert!(!is_symbol(bad));
        }
    }
}
