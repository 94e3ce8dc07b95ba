//! Micro-template compilation: `{{name}}` placeholder substitution
//!
//! A template string is compiled once into an immutable [`CompiledTemplate`]
//! and can then be rendered any number of times against a locals map.
//! Compilation never fails: malformed input (unbalanced delimiters, empty
//! placeholders) degrades to literal text.

pub mod lexer;

use std::collections::HashMap;

use lexer::{lex, Token};

/// Locals map handed to [`CompiledTemplate::render`]: name → stringified value
pub type Locals<'a> = HashMap<&'a str, String>;

/// One parsed piece of a template string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Verbatim text between placeholders
    Literal(String),
    /// Trimmed name from a `{{...}}` pair
    Placeholder(String),
}

/// An immutable compiled template
///
/// Rendering is pure: it consults nothing besides the compiled segments and
/// the supplied locals, so a compiled value can be reused freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    segments: Vec<Segment>,
}

/// Compile a template string.
///
/// Placeholders are the non-greedy `{{...}}` regions of the input: the first
/// `}}` after a `{{` closes it, and an inner `{{` contributes two literal
/// brace characters to the name rather than nesting. A `{{` with no closing
/// pair, and the empty pair `{{}}`, stay literal text.
pub fn compile(template: &str) -> CompiledTemplate {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut tokens = lex(template);

    while let Some(tok) = tokens.next() {
        match tok {
            Token::Open => {
                let mut name = String::new();
                let mut closed = false;
                for inner in tokens.by_ref() {
                    match inner {
                        Token::Close => {
                            closed = true;
                            break;
                        }
                        other => name.push_str(other.slice()),
                    }
                }
                if closed && !name.is_empty() {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name.trim().to_string()));
                } else if closed {
                    // `{{}}` has no name to substitute
                    literal.push_str("{{}}");
                } else {
                    // unterminated placeholder
                    literal.push_str("{{");
                    literal.push_str(&name);
                }
            }
            other => literal.push_str(other.slice()),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    CompiledTemplate { segments }
}

impl CompiledTemplate {
    /// Render against a locals map.
    ///
    /// Literal segments pass through verbatim; placeholders substitute the
    /// named local, or the empty string when the name is absent.
    pub fn render(&self, locals: &Locals<'_>) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = locals.get(name.as_str()) {
                        output.push_str(value);
                    }
                }
            }
        }
        output
    }

    /// The parsed segments, in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
