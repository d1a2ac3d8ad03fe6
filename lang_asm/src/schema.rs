use std::collections::HashMap;

use crate::statement::ArgKind::{self, *};

const STANDARD: &[(&str, &[ArgKind])] = &[
    // Frames and function calls
    ("MOVE", &[Variable, Symbol]),
    ("CREATEFRAME", &[]),
    ("PUSHFRAME", &[]),
    ("POPFRAME", &[]),
    ("DEFVAR", &[Variable]),
    ("CALL", &[Label]),
    ("RETURN", &[]),
    // Data stack
    ("PUSHS", &[Symbol]),
    ("POPS", &[Variable]),
    // Arithmetic, relational, boolean and conversion
    ("ADD", &[Variable, Symbol, Symbol]),
    ("SUB", &[Variable, Symbol, Symbol]),
    ("MUL", &[Variable, Symbol, Symbol]),
    ("IDIV", &[Variable, Symbol, Symbol]),
    ("LT", &[Variable, Symbol, Symbol]),
    ("GT", &[Variable, Symbol, Symbol]),
    ("EQ", &[Variable, Symbol, Symbol]),
    ("AND", &[Variable, Symbol, Symbol]),
    ("OR", &[Variable, Symbol, Symbol]),
    ("NOT", &[Variable, Symbol]),
    ("INT2CHAR", &[Variable, Symbol]),
    ("STRI2INT", &[Variable, Symbol, Symbol]),
    // Input and output
    ("READ", &[Variable, TypeName]),
    ("WRITE", &[Symbol]),
    // Strings
    ("CONCAT", &[Variable, Symbol, Symbol]),
    ("STRLEN", &[Variable, Symbol]),
    ("GETCHAR", &[Variable, Symbol, Symbol]),
    ("SETCHAR", &[Variable, Symbol, Symbol]),
    // Types
    ("TYPE", &[Variable, Symbol]),
    // Control flow
    ("LABEL", &[Label]),
    ("JUMP", &[Label]),
    ("JUMPIFEQ", &[Label, Symbol, Symbol]),
    ("JUMPIFNEQ", &[Label, Symbol, Symbol]),
    ("EXIT", &[Symbol]),
    // Debugging
    ("DPRINT", &[Symbol]),
    ("BREAK", &[]),
];

/// Opcode table: canonical upper-case name to the kinds of its arguments.
///
/// Built once and shared by reference; opcodes missing from it are rejected.
#[derive(Debug, Clone)]
pub struct Schema {
    entries: HashMap<&'static str, &'static [ArgKind]>,
}

impl Schema {
    pub fn standard() -> Schema {
        Schema {
            entries: STANDARD.iter().copied().collect(),
        }
    }

    /// Case-insensitive lookup returning the canonical opcode and its argument kinds.
    pub fn lookup(&self, opcode: &str) -> Option<(&'static str, &'static [ArgKind])> {
        self.entries
            .get_key_value(opcode.to_ascii_uppercase().as_str())
            .map(|(name, kinds)| (*name, *kinds))
    }
}

#[cfg(test)]
impl Schema {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn opcodes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
