use chumsky::BoxedParser;
use chumsky::prelude::*;

use crate::TagresError;
use crate::ast::{Field, File, Tag};
use crate::diagnostics;

mod value;

pub(crate) type ParserError = Simple<char>;

/// The compiled grammar: an immutable value wrapping the matching engine's
/// parser for the whole format. Build it once and reuse it across parses;
/// it holds no mutable state. The boxed engine parser is `Rc`-backed, so a
/// `Grammar` stays on the thread that built it.
pub struct Grammar {
    file: BoxedParser<'static, char, File, ParserError>,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            file: file().boxed(),
        }
    }

    /// Run the grammar over a full input buffer.
    ///
    /// The engine's success indicator is always checked: any reported
    /// diagnostic fails the parse, and a missing output without diagnostics
    /// is an engine contract violation. No partial `File` ever escapes.
    pub fn parse(&self, input: &str) -> Result<File, TagresError> {
        let (output, errors) = self.file.parse_recovery(input);

        if !errors.is_empty() {
            return Err(diagnostics::into_parse_error(input, errors));
        }

        match output {
            Some(file) => Ok(file),
            None => Err(TagresError::InternalError {
                message: "matching engine reported success but produced no document".into(),
                hint: None,
                code: Some(103),
            }),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a complete document with a freshly compiled grammar.
pub fn parse(input: &str) -> Result<File, TagresError> {
    Grammar::new().parse(input)
}

/// `Field := Identifier '=' Value`
fn field() -> impl Parser<char, Field, Error = ParserError> + Clone {
    value::identifier()
        .then_ignore(just('=').padded())
        .then(value::value())
        .map(|(name, value)| Field { name, value })
}

/// `Tag := '[' Identifier Fields ']' Assignments?`
///
/// Assignments run until the next `[` or end of input. A tag with none gets
/// an empty list; the data model does not distinguish the two spellings.
fn tag() -> impl Parser<char, Tag, Error = ParserError> + Clone {
    just('[')
        .ignore_then(value::identifier().padded())
        .then(field().padded().repeated())
        .then_ignore(just(']'))
        .then(field().padded().repeated())
        .map(|((identifier, fields), assignments)| Tag {
            identifier,
            fields,
            assignments,
        })
}

/// `File := Tag+`
fn file() -> impl Parser<char, File, Error = ParserError> {
    tag()
        .padded()
        .repeated()
        .at_least(1)
        .then_ignore(end())
        .map(|tags| File { tags })
}
