//! Graphviz DOT description of a graph.
//!
//! [`write_dot`] emits one statement per vertex (in index order) followed by
//! one statement per edge (in insertion order):
//!
//! ```text
//! digraph knot {
//!     "A";
//!     "B";
//!     "A" -> "B" [label="5"];
//! }
//! ```
//!
//! [`parse_dot`] reads exactly this subset back. Names are written as DOT
//! quoted strings with `\\`, `\"`, `\n` and `\r` escaped, so any name the
//! graph accepts survives the round trip, whatever the configured forbidden
//! characters.
//!
//! Rendering the description to an image is left to Graphviz itself.

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fmt::{self, Write};
use std::iter::Peekable;
use std::str::Chars;
use std::vec::IntoIter;

/// Graph identifier used in the `digraph` header.
pub const GRAPH_NAME: &str = "knot";

const INDENT: &str = "    ";

/// Write the DOT description of `graph` to `out`.
///
/// # Errors
///
/// Returns any error reported by the underlying writer.
pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> fmt::Result {
    writeln!(out, "digraph {GRAPH_NAME} {{")?;
    for name in graph.vertices() {
        writeln!(out, "{INDENT}{};", Quoted(name))?;
    }
    for edge in graph.edges() {
        writeln!(
            out,
            "{INDENT}{} -> {} [label=\"{}\"];",
            Quoted(edge.start),
            Quoted(edge.end),
            edge.length
        )?;
    }
    writeln!(out, "}}")
}

/// DOT description of `graph` as a string.
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(graph, &mut out);
    out
}

/// A name rendered as an escaped DOT string.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

/// Lexical unit of the supported DOT subset.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Quoted(String),
    Arrow,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Equals,
    Semicolon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(word) => f.write_str(word),
            Self::Quoted(text) => write!(f, "{}", Quoted(text)),
            Self::Arrow => f.write_str("->"),
            Self::OpenBrace => f.write_str("{"),
            Self::CloseBrace => f.write_str("}"),
            Self::OpenBracket => f.write_str("["),
            Self::CloseBracket => f.write_str("]"),
            Self::Equals => f.write_str("="),
            Self::Semicolon => f.write_str(";"),
        }
    }
}

/// A token and the line it starts on.
#[derive(Debug)]
struct Spanned {
    token: Token,
    line: usize,
}

/// Split `input` into tokens, skipping whitespace and `//` comments.
fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let mut chars = input.chars().peekable();
    let mut tokens = Vec::new();
    let mut line = 1;

    while let Some(c) = chars.next() {
        let start = line;
        let token = match c {
            '\n' => {
                line += 1;
                continue;
            }
            c if c.is_whitespace() => continue,
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&c| c != '\n').is_some() {}
                continue;
            }
            '-' if chars.next_if_eq(&'>').is_some() => Token::Arrow,
            '"' => Token::Quoted(read_quoted(&mut chars, &mut line, start)?),
            '{' => Token::OpenBrace,
            '}' => Token::CloseBrace,
            '[' => Token::OpenBracket,
            ']' => Token::CloseBracket,
            '=' => Token::Equals,
            ';' => Token::Semicolon,
            c if is_word_char(c) => {
                let mut word = String::from(c);
                while let Some(c) = chars.next_if(|&c| is_word_char(c)) {
                    word.push(c);
                }
                Token::Word(word)
            }
            c => return Err(invalid(line, format!("unexpected character '{c}'"))),
        };
        tokens.push(Spanned { token, line: start });
    }

    Ok(tokens)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Body of a quoted string whose opening quote was already consumed.
///
/// Unknown escapes keep their backslash, as Graphviz does.
fn read_quoted(
    chars: &mut Peekable<Chars<'_>>,
    line: &mut usize,
    start: usize,
) -> Result<String> {
    let mut text = String::new();
    loop {
        match chars.next() {
            None => return Err(invalid(start, "unterminated quoted string")),
            Some('"') => return Ok(text),
            Some('\\') => match chars.next() {
                Some('\\') => text.push('\\'),
                Some('"') => text.push('"'),
                Some('n') => text.push('\n'),
                Some('r') => text.push('\r'),
                Some(other) => {
                    if other == '\n' {
                        *line += 1;
                    }
                    text.push('\\');
                    text.push(other);
                }
                None => return Err(invalid(start, "unterminated quoted string")),
            },
            Some(c) => {
                if c == '\n' {
                    *line += 1;
                }
                text.push(c);
            }
        }
    }
}

/// Token cursor with the line to blame once input runs out.
struct Cursor {
    tokens: Peekable<IntoIter<Spanned>>,
    last_line: usize,
}

impl Cursor {
    fn advance(&mut self) -> Option<Spanned> {
        self.tokens.next()
    }

    /// Line of the next token, or the last line at end of input.
    fn line(&mut self) -> usize {
        self.tokens.peek().map_or(self.last_line, |t| t.line)
    }

    /// Consume the next token if it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        self.tokens.next_if(|t| &t.token == expected).is_some()
    }

    fn expect(&mut self, expected: &Token, message: &str) -> Result<()> {
        let line = self.line();
        if self.eat(expected) {
            Ok(())
        } else {
            Err(invalid(line, message))
        }
    }

    /// A quoted string, or a bare word when `allow_word` is set.
    fn text(&mut self, allow_word: bool, what: &str) -> Result<String> {
        let line = self.line();
        match self.advance() {
            Some(Spanned {
                token: Token::Quoted(text),
                ..
            }) => Ok(text),
            Some(Spanned {
                token: Token::Word(word),
                ..
            }) if allow_word => Ok(word),
            Some(Spanned { token, .. }) => {
                Err(invalid(line, format!("expected {what}, got '{token}'")))
            }
            None => Err(invalid(line, format!("expected {what}, got end of input"))),
        }
    }
}

/// Parse a DOT description produced by [`write_dot`] into a new graph.
///
/// Whitespace, including line breaks between tokens, and `//` comments are
/// ignored. Vertex statements are added with [`Graph::add_vertex`] and edge
/// statements with [`Graph::add_edge`], so their errors propagate unchanged.
///
/// # Errors
///
/// - [`Error::InvalidFormat`] for anything outside the supported subset
/// - graph errors (`InvalidArgument`, `AlreadyExists`, ...) from building
pub fn parse_dot(input: &str, config: GraphConfig) -> Result<Graph> {
    let mut cursor = Cursor {
        tokens: tokenize(input)?.into_iter().peekable(),
        last_line: input.lines().count().max(1),
    };

    parse_header(&mut cursor)?;

    let mut graph = Graph::with_config(config);
    loop {
        if cursor.eat(&Token::CloseBrace) {
            break;
        }
        if cursor.tokens.peek().is_none() {
            return Err(invalid(cursor.last_line, "missing closing '}'"));
        }
        parse_statement(&mut cursor, &mut graph)?;
    }

    if let Some(extra) = cursor.advance() {
        return Err(invalid(extra.line, "unexpected content after closing '}'"));
    }
    Ok(graph)
}

fn parse_header(cursor: &mut Cursor) -> Result<()> {
    match cursor.advance() {
        Some(Spanned {
            token: Token::Word(word),
            ..
        }) if word == "digraph" => {}
        Some(Spanned { line, .. }) => return Err(invalid(line, "expected 'digraph' header")),
        None => return Err(invalid(1, "missing 'digraph' header")),
    }

    // The graph identifier is optional and not kept.
    cursor.tokens.next_if(|t| matches!(t.token, Token::Word(_) | Token::Quoted(_)));
    cursor.expect(&Token::OpenBrace, "expected '{' after graph name")
}

fn parse_statement(cursor: &mut Cursor, graph: &mut Graph) -> Result<()> {
    let line = cursor.line();
    let start = cursor.text(false, "a quoted name")?;

    if !cursor.eat(&Token::Arrow) {
        if !cursor.eat(&Token::Semicolon) {
            return Err(invalid(line, "statement must end with ';'"));
        }
        graph.add_vertex(&start)?;
        return Ok(());
    }

    let end = cursor.text(false, "a quoted name")?;
    let length = parse_label(cursor)?;
    if !cursor.eat(&Token::Semicolon) {
        return Err(invalid(line, "statement must end with ';'"));
    }

    graph.add_edge(&start, &end, length)
}

/// Length from `[label="N"]`.
fn parse_label(cursor: &mut Cursor) -> Result<u64> {
    cursor.expect(&Token::OpenBracket, "edge is missing its [label=...] length")?;
    let line = cursor.line();
    if cursor.text(true, "'label' attribute")? != "label" {
        return Err(invalid(line, "expected 'label' attribute"));
    }
    cursor.expect(&Token::Equals, "expected '=' after 'label'")?;

    let line = cursor.line();
    let digits = cursor.text(true, "an edge length")?;
    let length = digits.parse().map_err(|_| {
        invalid(
            line,
            format!("edge length '{digits}' is not a non-negative integer"),
        )
    })?;

    cursor.expect(&Token::CloseBracket, "unterminated attribute list")?;
    Ok(length)
}

fn invalid(line: usize, message: impl Into<String>) -> Error {
    Error::InvalidFormat {
        line,
        message: message.into(),
    }
}
