use thiserror::Error;

use crate::statement::ArgKind;

/// Exit code for a missing or malformed header line.
pub const EXIT_MISSING_HEADER: i32 = 21;
/// Exit code for an opcode absent from the schema.
pub const EXIT_UNKNOWN_OPCODE: i32 = 22;
/// Exit code for every other lexical or syntactic error.
pub const EXIT_SYNTAX: i32 = 23;
pub const EXIT_INTERNAL: i32 = 99;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("header is missing")]
    MissingHeader,

    #[error("line {line}: header appears more than once")]
    DuplicateHeader { line: usize },

    #[error("line {line}: unknown opcode {opcode}")]
    UnknownOpcode { line: usize, opcode: String },

    #[error("line {line}: {opcode} takes {expected} argument(s), found {found}")]
    ArityMismatch {
        line: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: argument {position} of {opcode} is not a valid {expected}: {token}")]
    InvalidArgument {
        line: usize,
        opcode: &'static str,
        position: usize,
        expected: ArgKind,
        token: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl TranslateError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TranslateError::MissingHeader => EXIT_MISSING_HEADER,
            TranslateError::UnknownOpcode { .. } => EXIT_UNKNOWN_OPCODE,
            TranslateError::DuplicateHeader { .. }
            | TranslateError::ArityMismatch { .. }
            | TranslateError::InvalidArgument { .. } => EXIT_SYNTAX,
            TranslateError::Internal(_) => EXIT_INTERNAL,
        }
    }
}
