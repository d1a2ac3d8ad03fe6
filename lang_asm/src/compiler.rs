use lang_tree::{Instruction, Program};
use log::debug;

use crate::error::TranslateError;
use crate::statement::ValidStatement;

/// Builds the program tree, numbering instructions from 1 in source order.
pub fn to_program(statements: &[ValidStatement]) -> Result<Program, TranslateError> {
    let instructions = statements
        .iter()
        .enumerate()
        .map(|(i, statement)| to_instruction(i + 1, statement))
        .collect::<Result<Vec<Instruction>, _>>()?;
    debug!("built program of {} instruction(s)", instructions.len());
    Ok(Program::from(instructions))
}

fn to_instruction(order: usize, statement: &ValidStatement) -> Result<Instruction, TranslateError> {
    if statement.kinds.len() != statement.args.len() {
        return Err(TranslateError::Internal(format!(
            "{} on line {} has {} argument(s) for {} slot(s)",
            statement.opcode,
            statement.line,
            statement.args.len(),
            statement.kinds.len()
        )));
    }
    for (kind, arg) in statement.kinds.iter().zip(&statement.args) {
        if !kind.accepts().contains(arg.ty.flag()) {
            return Err(TranslateError::Internal(format!(
                "{} argument on line {} placed in a {} slot",
                arg.ty, statement.line, kind
            )));
        }
    }

    Ok(Instruction {
        order,
        opcode: statement.opcode.to_string(),
        args: statement.args.clone(),
    })
}
