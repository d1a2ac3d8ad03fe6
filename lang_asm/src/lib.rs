//! Front end for LANGUAGE source: validates every instruction and builds the
//! program tree handed to the interpreter.

pub mod compiler;
pub mod error;
pub mod lexical;
pub mod schema;
pub mod source;
pub mod statement;
pub mod validator;

pub use error::TranslateError;
pub use lang_tree::Program;
pub use schema::Schema;

use validator::Validator;

/// Runs the whole pipeline; fails on the first error without producing a tree.
pub fn translate(source: &str, schema: &Schema) -> Result<Program, TranslateError> {
    let statements = source::read(source)?;
    let valid = Validator::new(schema).validate_all(&statements)?;
    compiler::to_program(&valid)
}
