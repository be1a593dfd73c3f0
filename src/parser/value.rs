use chumsky::prelude::*;
use indexmap::IndexMap;

use crate::ast::{Numeric, Value};

use super::ParserError;

/// `ListOf(T) := (T (',' T)*)?` with insignificant whitespace. Zero elements
/// are valid, so empty arrays, dictionaries and argument lists all parse.
pub(super) fn list_of<T>(
    item: impl Parser<char, T, Error = ParserError> + Clone,
) -> impl Parser<char, Vec<T>, Error = ParserError> + Clone {
    item.padded().separated_by(just(',')).padded()
}

/// `Identifier := [A-Za-z0-9._:]+`
pub(super) fn identifier() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':'))
        .repeated()
        .at_least(1)
        .collect()
}

/// `String := '"' [^"]* '"'`
///
/// The payload is copied verbatim; the format has no escape sequences, so a
/// string simply cannot contain a quote character.
pub(super) fn string_literal() -> impl Parser<char, String, Error = ParserError> + Clone {
    just('"')
        .ignore_then(filter(|c: &char| *c != '"').repeated().collect())
        .then_ignore(just('"'))
}

/// `Boolean := 'true' | 'false'`, as whole keywords only. Any longer
/// identifier starting with one of them is not a boolean.
pub(super) fn boolean() -> impl Parser<char, bool, Error = ParserError> + Clone {
    text::keyword("true")
        .to(true)
        .or(text::keyword("false").to(false))
}

/// `Numeric := Float / Integer` in ordered-choice form: a literal with a
/// fractional part or exponent becomes a float and everything else stays an
/// integer. Conversion failures are emitted while the match succeeds, so a
/// sibling alternative failing further along cannot displace them; the
/// emitted error still fails the whole parse.
pub(super) fn numeric() -> impl Parser<char, Numeric, Error = ParserError> + Clone {
    let digits = filter(|c: &char| c.is_ascii_digit()).repeated().at_least(1);
    let integer_text = just('-').or_not().chain::<char, _, _>(digits.clone());

    let integer = integer_text
        .clone()
        .collect::<String>()
        .validate(|text, span, emit| match text.parse::<i64>() {
            Ok(parsed) => Numeric::Integer(parsed),
            Err(_) => {
                emit(Simple::custom(
                    span,
                    format!("integer literal '{}' does not fit in a 64-bit integer", text),
                ));
                Numeric::Integer(0)
            }
        });

    let exponent = just('e').chain::<char, _, _>(integer_text.clone());
    let float = integer_text
        .chain::<char, _, _>(just('.'))
        .chain::<char, _, _>(digits)
        .chain::<char, _, _>(exponent.or_not().flatten())
        .collect::<String>()
        .validate(|text, span, emit| match text.parse::<f64>() {
            Ok(parsed) => Numeric::Float(parsed),
            Err(_) => {
                emit(Simple::custom(
                    span,
                    format!("malformed float literal '{}'", text),
                ));
                Numeric::Float(f64::NAN)
            }
        });

    float.or(integer)
}

/// `Value := Constructable / Dictionary / Array / Boolean / String / Numeric`
///
/// Ordered choice: a constructable only wins when the identifier is followed
/// by `(`, and a bare identifier that is not `true`/`false` matches nothing.
pub(super) fn value() -> impl Parser<char, Value, Error = ParserError> + Clone {
    recursive(|value| {
        let constructable = identifier()
            .then(
                just('(')
                    .padded()
                    .ignore_then(list_of(value.clone()))
                    .then_ignore(just(')')),
            )
            .map(|(identifier, arguments)| Value::Constructable {
                identifier,
                arguments,
            });

        let property = string_literal()
            .padded()
            .then_ignore(just(':'))
            .then(value.clone().padded());

        let dictionary = property
            .separated_by(just(','))
            .padded()
            .delimited_by(just('{'), just('}'))
            .map(|properties| {
                let mut map = IndexMap::new();
                for (key, val) in properties {
                    // a repeated key keeps its last value
                    map.insert(key, val);
                }
                Value::Dictionary(map)
            });

        let array = list_of(value)
            .delimited_by(just('['), just(']'))
            .map(Value::Array);

        choice((
            constructable,
            dictionary,
            array,
            boolean().map(Value::Bool),
            string_literal().map(Value::String),
            numeric().map(Value::Numeric),
        ))
    })
}
