//! Lexer for template strings using logos
//!
//! Template text is split into brace delimiters and text runs. There are no
//! skip patterns: every input byte lands in some token, so the original
//! string can always be reassembled from the slices.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'src> {
    // Placeholder delimiters (longest match wins over lone braces)
    #[token("{{")]
    Open,
    #[token("}}")]
    Close,

    // Lone braces are plain text
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Everything else, newlines included
    #[regex(r"[^{}]+", |lex| lex.slice())]
    Text(&'src str),
}

impl<'src> Token<'src> {
    /// The raw source text this token was lexed from
    pub fn slice(&self) -> &'src str {
        match self {
            Token::Open => "{{",
            Token::Close => "}}",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Text(s) => s,
        }
    }
}

/// Lex a template string into tokens
pub fn lex(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    Token::lexer(input).filter_map(|tok| tok.ok())
}
