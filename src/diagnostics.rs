use chumsky::error::{Simple, SimpleReason};
use serde::Serialize;

use crate::TagresError;

/// A structured view of one engine-reported error: a 1-based source
/// position plus the engine's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn from_engine_error(source: &str, error: &Simple<char>) -> Self {
        let (line, column) = offset_to_line_column(source, error.span().start);
        // the engine's Display drops custom reasons, which carry the
        // offending token text
        let message = match error.reason() {
            SimpleReason::Custom(message) => message.clone(),
            _ => error.to_string(),
        };
        Diagnostic {
            line,
            column,
            message,
        }
    }

    pub fn from_engine_errors(source: &str, errors: &[Simple<char>]) -> Vec<Self> {
        errors
            .iter()
            .map(|e| Self::from_engine_error(source, e))
            .collect()
    }
}

/// Fold the engine's error list into a single parse failure.
///
/// Numeric conversion failures are raised inside the reducers as custom
/// errors; nothing else in the grammar produces a custom reason, so that
/// reason tag is enough to tell the two kinds apart. Grammar mismatches keep
/// the engine's own message. An empty list means the engine reported failure
/// without telling us why, which it never should.
pub(crate) fn into_parse_error(source: &str, errors: Vec<Simple<char>>) -> TagresError {
    let numeric = errors
        .iter()
        .position(|e| matches!(e.reason(), SimpleReason::Custom(_)));

    match (numeric, errors.first()) {
        (Some(i), _) => {
            let diagnostic = Diagnostic::from_engine_error(source, &errors[i]);
            TagresError::NumericError {
                message: diagnostic.message,
                line: diagnostic.line,
                column: diagnostic.column,
                hint: Some("Use a value that fits the numeric type".into()),
                code: Some(102),
            }
        }
        (None, Some(error)) => {
            let diagnostic = Diagnostic::from_engine_error(source, error);
            TagresError::SyntaxError {
                message: diagnostic.message,
                line: diagnostic.line,
                column: diagnostic.column,
                hint: Some("Check your syntax".into()),
                code: Some(101),
            }
        }
        (None, None) => TagresError::InternalError {
            message: "parse failed but the matching engine produced no diagnostics".into(),
            hint: None,
            code: Some(103),
        },
    }
}

/// Map a character offset to a 1-based (line, column) pair.
pub(crate) fn offset_to_line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, c) in source.chars().enumerate() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

#[cfg(test)]
mod tests {
    use chumsky::Error;

    use super::*;

    #[test]
    fn test_offset_to_line_column() {
        let source = "ab\ncde\nf";

        assert_eq!(offset_to_line_column(source, 0), (1, 1));
        assert_eq!(offset_to_line_column(source, 1), (1, 2));
        assert_eq!(offset_to_line_column(source, 3), (2, 1));
        assert_eq!(offset_to_line_column(source, 5), (2, 3));
        assert_eq!(offset_to_line_column(source, 7), (3, 1));
    }

    #[test]
    fn test_offset_past_end_clamps_to_last_position() {
        let source = "ab";
        assert_eq!(offset_to_line_column(source, 99), (1, 3));
    }

    #[test]
    fn test_diagnostic_from_engine_error() {
        let source = "[A\nx=]";
        let error = Simple::expected_input_found(5..6, Vec::new(), Some(']'));

        let diagnostic = Diagnostic::from_engine_error(source, &error);
        assert_eq!(diagnostic.line, 2);
        assert_eq!(diagnostic.column, 3);
        assert!(!diagnostic.message.is_empty());
    }

    #[test]
    fn test_custom_reason_becomes_numeric_error() {
        let source = "x";
        let errors = vec![Simple::custom(0..1, "numeric literal out of range")];

        match into_parse_error(source, errors) {
            TagresError::NumericError { message, line, column, .. } => {
                assert!(message.contains("out of range"));
                assert_eq!((line, column), (1, 1));
            }
            other => panic!("Expected NumericError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_error_list_is_internal() {
        assert!(matches!(
            into_parse_error("", Vec::new()),
            TagresError::InternalError { .. }
        ));
    }
}
