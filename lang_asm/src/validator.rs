use lang_tree::{ArgType, Argument};
use log::{debug, trace};

use crate::error::TranslateError;
use crate::lexical;
use crate::schema::Schema;
use crate::statement::{ArgKind, Statement, ValidStatement};

/// Checks statements against a [`Schema`], stopping at the first problem.
pub struct Validator<'a> {
    schema: &'a Schema,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema) -> Validator<'a> {
        Validator { schema }
    }

    pub fn validate_all(
        &self,
        statements: &[Statement],
    ) -> Result<Vec<ValidStatement>, TranslateError> {
        let valid = statements
            .iter()
            .map(|s| self.validate(s))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("validated {} statement(s)", valid.len());
        Ok(valid)
    }

    pub fn validate(&self, statement: &Statement) -> Result<ValidStatement, TranslateError> {
        let (opcode, kinds) = self.schema.lookup(statement.opcode()).ok_or_else(|| {
            TranslateError::UnknownOpcode {
                line: statement.line,
                opcode: statement.opcode().to_uppercase(),
            }
        })?;

        let tokens = statement.args();
        if tokens.len() != kinds.len() {
            return Err(TranslateError::ArityMismatch {
                line: statement.line,
                opcode,
                expected: kinds.len(),
                found: tokens.len(),
            });
        }

        let args = kinds
            .iter()
            .zip(tokens)
            .enumerate()
            .map(|(i, (&kind, &token))| {
                resolve(kind, token).ok_or_else(|| TranslateError::InvalidArgument {
                    line: statement.line,
                    opcode,
                    position: i + 1,
                    expected: kind,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!("line {}: {} {:?}", statement.line, opcode, args);
        Ok(ValidStatement {
            line: statement.line,
            opcode,
            kinds,
            args,
        })
    }
}

/// Classifies `token` against the kind required at its position.
pub fn resolve(kind: ArgKind, token: &str) -> Option<Argument> {
    match kind {
        ArgKind::Variable => {
            lexical::is_variable(token).then(|| Argument::new(ArgType::Var, token))
        }
        ArgKind::Symbol => lexical::classify_symbol(token),
        ArgKind::Label => lexical::is_label(token).then(|| Argument::new(ArgType::Label, token)),
        ArgKind::TypeName => {
            lexical::is_type_name(token).then(|| Argument::new(ArgType::Type, token))
        }
    }
}
