use std::fmt;

/// The main error type for parsing and typed access.
#[derive(Debug, Clone, PartialEq)]
pub enum TagresError {
    /// The input does not match the grammar at some position.
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A numeric token cannot be represented in the chosen numeric type.
    NumericError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The matching engine broke its contract (failed without diagnostics,
    /// or reported success without output). A defect, not user input.
    InternalError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A parsed value could not be converted to the requested type.
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for TagresError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagresError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[tagres] Syntax Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            TagresError::NumericError { message, line, column, hint, code } =>
                write!(f, "[tagres] Numeric Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            TagresError::InternalError { message, hint, code } =>
                write!(f, "[tagres] Internal Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            TagresError::TypeError { message, line, column, hint, code } =>
                write!(f, "[tagres] Type Error at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            TagresError::FileError { message, path, hint, code } =>
                write!(f, "[tagres] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for TagresError {}

impl TagresError {
    /// Helper for file-related errors when loading resource files.
    pub fn file_error(message: String, path: String) -> Self {
        TagresError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(300),
        }
    }
}
