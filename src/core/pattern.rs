//! Pattern mini-language compiler
//!
//! Turns a printf-like pattern string such as `"%d [%p] %f:%l %m%n"` into an
//! ordered sequence of [`FormatItem`]s. Compilation is a single left-to-right
//! pass with no backtracking and is fail-soft: malformed input produces a
//! visible error token in the compiled sequence plus a readable error flag,
//! never a panic or an `Err`.

use super::format_item::FormatItem;

/// Rendered in place of the whole remaining pattern when a `{` is never closed.
pub const PATTERN_ERROR: &str = "<<pattern_error>>";

/// Whether a token is verbatim text or a `%x` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Literal,
    Directive,
}

/// One parsed span of a pattern: the directive name (or literal text), its
/// optional `{...}` sub-format, and which of the two it is. Token order is
/// source order and is preserved through compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternToken {
    pub text: String,
    pub sub_format: String,
    pub kind: TokenKind,
}

impl PatternToken {
    fn literal(text: String) -> Self {
        Self {
            text,
            sub_format: String::new(),
            kind: TokenKind::Literal,
        }
    }

    fn directive(name: String, sub_format: String) -> Self {
        Self {
            text: name,
            sub_format,
            kind: TokenKind::Directive,
        }
    }
}

/// Split a pattern into literal and directive tokens.
///
/// Returns the tokens plus an error flag, set only when a `{` sub-format is
/// opened but never closed. In that case a [`PATTERN_ERROR`] literal token is
/// appended and scanning stops; everything parsed before the malformed
/// directive survives.
pub fn tokenize(pattern: &str) -> (Vec<PatternToken>, bool) {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut error = false;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '%' {
            literal.push(chars[i]);
            i += 1;
            continue;
        }

        // "%%" escapes a literal percent and never opens a directive.
        if chars.get(i + 1) == Some(&'%') {
            literal.push('%');
            i += 2;
            continue;
        }

        // Directive name: the run of alphabetic characters after '%'. A bare
        // '%' before a non-letter (or at the end) stays a literal percent.
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_alphabetic() {
            j += 1;
        }
        if j == i + 1 {
            literal.push('%');
            i += 1;
            continue;
        }
        let name: String = chars[i + 1..j].iter().collect();

        // Optional "{...}" sub-format immediately after the name.
        let mut sub_format = String::new();
        if chars.get(j) == Some(&'{') {
            match chars[j + 1..].iter().position(|&c| c == '}') {
                Some(len) => {
                    sub_format = chars[j + 1..j + 1 + len].iter().collect();
                    j += len + 2;
                }
                None => {
                    if !literal.is_empty() {
                        tokens.push(PatternToken::literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(PatternToken::literal(PATTERN_ERROR.to_string()));
                    error = true;
                    break;
                }
            }
        }

        // Interleave: flush pending literal text ahead of the directive.
        if !literal.is_empty() {
            tokens.push(PatternToken::literal(std::mem::take(&mut literal)));
        }
        tokens.push(PatternToken::directive(name, sub_format));
        i = j;
    }

    if !literal.is_empty() {
        tokens.push(PatternToken::literal(literal));
    }
    (tokens, error)
}

/// Compile a pattern string into renderable [`FormatItem`]s.
///
/// An unrecognized directive `%X` compiles to a literal `<<error_format %X>>`
/// and does not set the error flag; only an unterminated `{` does.
pub fn compile(pattern: &str) -> (Vec<FormatItem>, bool) {
    let (tokens, error) = tokenize(pattern);
    let items = tokens
        .into_iter()
        .map(|token| match token.kind {
            TokenKind::Literal => FormatItem::Literal(token.text),
            TokenKind::Directive => FormatItem::from_directive(&token.text, &token.sub_format)
                .unwrap_or_else(|| FormatItem::Literal(format!("<<error_format %{}>>", token.text))),
        })
        .collect();
    (items, error)
}
