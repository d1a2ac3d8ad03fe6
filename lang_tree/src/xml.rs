//! Pretty-printed XML rendering of a [`Program`].

use std::fmt::Write;

use thiserror::Error;

use crate::{Argument, Instruction, Program};

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    #[error("character U+{code:04X} cannot appear in an XML 1.0 document")]
    ForbiddenChar { code: u32 },
}

pub(crate) fn render(program: &Program) -> Result<String, XmlError> {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    let root = format!("program language=\"{}\"", escape_attr(program.language())?);
    if program.is_empty() {
        writeln!(out, "<{}/>", root).ok();
        return Ok(out);
    }

    writeln!(out, "<{}>", root).ok();
    for instruction in program.instructions() {
        render_instruction(&mut out, instruction)?;
    }
    out.push_str("</program>\n");
    Ok(out)
}

fn render_instruction(out: &mut String, instruction: &Instruction) -> Result<(), XmlError> {
    let open = format!(
        "instruction order=\"{}\" opcode=\"{}\"",
        instruction.order,
        escape_attr(&instruction.opcode)?
    );
    if instruction.args.is_empty() {
        writeln!(out, "{}<{}/>", INDENT, open).ok();
        return Ok(());
    }

    writeln!(out, "{}<{}>", INDENT, open).ok();
    for (i, arg) in instruction.args.iter().enumerate() {
        render_argument(out, i + 1, arg)?;
    }
    writeln!(out, "{}</instruction>", INDENT).ok();
    Ok(())
}

fn render_argument(out: &mut String, position: usize, arg: &Argument) -> Result<(), XmlError> {
    let tag = format!("arg{}", position);
    if arg.text.is_empty() {
        writeln!(out, "{0}{0}<{1} type=\"{2}\"/>", INDENT, tag, arg.ty).ok();
    } else {
        writeln!(
            out,
            "{0}{0}<{1} type=\"{2}\">{3}</{1}>",
            INDENT,
            tag,
            arg.ty,
            escape_text(&arg.text)?
        )
        .ok();
    }
    Ok(())
}

/// `Char` production of XML 1.0. Surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn escape_text(s: &str) -> Result<String, XmlError> {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c if !is_xml_char(c) => return Err(XmlError::ForbiddenChar { code: c as u32 }),
            c => escaped.push(c),
        }
    }
    Ok(escaped)
}

fn escape_attr(s: &str) -> Result<String, XmlError> {
    Ok(escape_text(s)?.replace('"', "&quot;"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgType;

    fn instruction(order: usize, opcode: &str, args: Vec<Argument>) -> Instruction {
        Instruction {
            order,
            opcode: opcode.to_string(),
            args,
        }
    }

    #[test]
    fn empty_program_is_self_closing() {
        let xml = Program::from(vec![]).to_xml().unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<program language=\"LANGUAGE\"/>\n"
        );
    }

    #[test]
    fn nested_layout() {
        let program = Program::from(vec![
            instruction(1, "MOVE", vec![
                Argument::new(ArgType::Var, "GF@x"),
                Argument::new(ArgType::Int, "42"),
            ]),
            instruction(2, "BREAK", vec![]),
        ]);

        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<program language=\"LANGUAGE\">\n\
\x20   <instruction order=\"1\" opcode=\"MOVE\">\n\
\x20       <arg1 type=\"var\">GF@x</arg1>\n\
\x20       <arg2 type=\"int\">42</arg2>\n\
\x20   </instruction>\n\
\x20   <instruction order=\"2\" opcode=\"BREAK\"/>\n\
</program>\n";
        assert_eq!(program.to_xml().unwrap(), expected);
    }

    #[test]
    fn empty_string_argument_is_self_closing() {
        let program = Program::from(vec![instruction(1, "WRITE", vec![Argument::new(
            ArgType::String,
            "",
        )])]);
        assert!(program.to_xml().unwrap().contains("<arg1 type=\"string\"/>"));
    }

    #[test]
    fn text_is_escaped() {
        let program = Program::from(vec![instruction(1, "WRITE", vec![Argument::new(
            ArgType::String,
            "a<b>&c\"",
        )])]);
        assert!(program
            .to_xml()
            .unwrap()
            .contains("<arg1 type=\"string\">a&lt;b&gt;&amp;c\"</arg1>"));
    }

    #[test]
    fn attributes_escape_quotes() {
        assert_eq!(escape_attr("a\"&").unwrap(), "a&quot;&amp;");
    }

    #[test]
    fn control_characters_are_refused() {
        let program = Program::from(vec![instruction(1, "WRITE", vec![Argument::new(
            ArgType::String,
            "a\u{1}b",
        )])]);
        assert_eq!(program.to_xml(), Err(XmlError::ForbiddenChar { code: 1 }));
    }

    #[test]
    fn xml_char_ranges() {
        assert!(is_xml_char('a'));
        assert!(is_xml_char('\t'));
        assert!(is_xml_char('\u{D7FF}'));
        assert!(is_xml_char('\u{E000}'));
        assert!(is_xml_char('\u{1F600}'));
        assert!(!is_xml_char('\u{0}'));
        assert!(!is_xml_char('\u{1F}'));
        assert!(!is_xml_char('\u{FFFE}'));
        assert!(!is_xml_char('\u{FFFF}'));
    }
}
