use serde::Serialize;

mod xml;

pub use xml::XmlError;

/// Value of the root `language` attribute.
pub const LANGUAGE: &str = "LANGUAGE";

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Program {
    language: &'static str,
    instructions: Vec<Instruction>,
}

impl Program {
    /// Looks up an instruction by its 1-based order.
    pub fn get(&self, order: usize) -> Option<&Instruction> {
        order
            .checked_sub(1)
            .and_then(|index| self.instructions.get(index))
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn language(&self) -> &str {
        self.language
    }

    /// Fails when an argument carries a character XML 1.0 cannot represent.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        xml::render(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Program {
        Program {
            language: LANGUAGE,
            instructions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub order: usize,
    pub opcode: String,
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub ty: ArgType,
    pub text: String,
}

impl Argument {
    pub fn new(ty: ArgType, text: impl Into<String>) -> Argument {
        Argument {
            ty,
            text: text.into(),
        }
    }
}

/// Concrete tag attached to every argument node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    Var,
    Int,
    Bool,
    String,
    Nil,
    Label,
    Type,
}

impl ArgType {
    pub fn name(self) -> &'static str {
        match self {
            ArgType::Var => "var",
            ArgType::Int => "int",
            ArgType::Bool => "bool",
            ArgType::String => "string",
            ArgType::Nil => "nil",
            ArgType::Label => "label",
            ArgType::Type => "type",
        }
    }

    pub fn flag(self) -> ArgTypes {
        match self {
            ArgType::Var => ArgTypes::VAR,
            ArgType::Int => ArgTypes::INT,
            ArgType::Bool => ArgTypes::BOOL,
            ArgType::String => ArgTypes::STRING,
            ArgType::Nil => ArgTypes::NIL,
            ArgType::Label => ArgTypes::LABEL,
            ArgType::Type => ArgTypes::TYPE,
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of concrete tags an argument slot may resolve to.
    pub struct ArgTypes: u8 {
        const VAR = 0b0000_0001;
        const INT = 0b0000_0010;
        const BOOL = 0b0000_0100;
        const STRING = 0b0000_1000;
        const NIL = 0b0001_0000;
        const LABEL = 0b0010_0000;
        const TYPE = 0b0100_0000;

        const LITERAL = Self::INT.bits | Self::BOOL.bits | Self::STRING.bits | Self::NIL.bits;
        const SYMBOL = Self::VAR.bits | Self::LITERAL.bits;
    }
}
