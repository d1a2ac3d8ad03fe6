use lang_tree::{ArgTypes, Argument};

/// Kind of argument an opcode expects at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Variable,
    Symbol,
    Label,
    TypeName,
}

impl ArgKind {
    /// Concrete tags a slot of this kind may resolve to.
    pub fn accepts(self) -> ArgTypes {
        match self {
            ArgKind::Variable => ArgTypes::VAR,
            ArgKind::Symbol => ArgTypes::SYMBOL,
            ArgKind::Label => ArgTypes::LABEL,
            ArgKind::TypeName => ArgTypes::TYPE,
        }
    }
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ArgKind::Variable => "variable",
            ArgKind::Symbol => "symbol",
            ArgKind::Label => "label",
            ArgKind::TypeName => "type name",
        };
        f.write_str(name)
    }
}

/// A source line with comments removed, split into whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'s> {
    /// 1-based line number in the original source.
    pub line: usize,
    pub tokens: Vec<&'s str>,
}

impl<'s> Statement<'s> {
    pub fn tokenize(line: usize, text: &'s str) -> Statement<'s> {
        Statement {
            line,
            tokens: text.split_whitespace().collect(),
        }
    }

    pub fn opcode(&self) -> &'s str {
        self.tokens.first().copied().unwrap_or_default()
    }

    pub fn args(&self) -> &[&'s str] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

/// A statement whose opcode, arity and arguments have all been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidStatement {
    pub line: usize,
    pub opcode: &'static str,
    pub kinds: &'static [ArgKind],
    pub args: Vec<Argument>,
}
