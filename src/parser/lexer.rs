//! Line Lexer
//!
//! Splits one input line into tokens and classifies each as an integer
//! or a word. No knowledge of which line is which.

/// Token types in the rover input format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Optionally signed run of decimal digits, e.g. "12" or "-3"
    Integer,
    /// Anything else, e.g. "N" or "5.5"
    Word,
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Tokenize a line into whitespace-separated tokens
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        let mut end_idx = start_idx + ch.len_utf8();
        while let Some(&(idx, next_ch)) = chars.peek() {
            if next_ch.is_whitespace() {
                break;
            }
            end_idx = idx + next_ch.len_utf8();
            chars.next();
        }

        tokens.push(classify(&line[start_idx..end_idx]));
    }

    tokens
}

/// Tokenize a line on single spaces only
///
/// Leading, trailing or repeated spaces produce empty tokens, and tabs
/// stay inside a token, so callers see them as malformed.
pub fn tokenize_spaced(line: &str) -> Vec<Token<'_>> {
    line.split(' ').map(classify).collect()
}

fn classify(text: &str) -> Token<'_> {
    let kind = if is_integer_text(text) {
        TokenKind::Integer
    } else {
        TokenKind::Word
    };
    Token { kind, text }
}

/// Sign followed by at least one ASCII digit and nothing else
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
