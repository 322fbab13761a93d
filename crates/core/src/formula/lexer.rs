use super::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum TokenKind {
    /// A real literal such as `2`, `0.5` or `1e-3`.
    Number(f64),
    /// An imaginary literal such as `2i` or `0.5j`.
    Imaginary(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// Both `^` and `**`.
    Caret,
    LeftParen,
    RightParen,
    Eof,
}

/// Splits formula text into tokens.
pub(super) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];
        let start = pos;

        let kind = match ch {
            c if c.is_whitespace() => {
                pos += 1;
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '*' => {
                if chars.get(pos + 1) == Some(&'*') {
                    pos += 1;
                    TokenKind::Caret
                } else {
                    TokenKind::Star
                }
            }
            c if c.is_ascii_digit() || c == '.' => {
                let (kind, end) = number(&chars, pos)?;
                tokens.push(Token { kind, pos: start });
                pos = end;
                continue;
            }
            c if c.is_alphabetic() || c == '_' => {
                let end = scan(&chars, pos, |c| c.is_alphanumeric() || c == '_');
                let name: String = chars[pos..end].iter().collect();
                tokens.push(Token {
                    kind: TokenKind::Ident(name),
                    pos: start,
                });
                pos = end;
                continue;
            }
            other => {
                return Err(ParseError::UnexpectedChar {
                    ch: other,
                    pos: start,
                });
            }
        };

        tokens.push(Token { kind, pos: start });
        pos += 1;
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        pos: chars.len(),
    });
    Ok(tokens)
}

/// Scans a numeric literal starting at `start`, including an optional
/// exponent and an optional imaginary suffix.
fn number(chars: &[char], start: usize) -> Result<(TokenKind, usize), ParseError> {
    let mut end = scan(chars, start, |c| c.is_ascii_digit());
    if chars.get(end) == Some(&'.') {
        end = scan(chars, end + 1, |c| c.is_ascii_digit());
    }

    // Only treat `e` as an exponent when digits follow; otherwise `2e` stays
    // available as the constant `e` (and fails later as a missing operator).
    if matches!(chars.get(end), Some('e' | 'E')) {
        let mut digits_at = end + 1;
        if matches!(chars.get(digits_at), Some('+' | '-')) {
            digits_at += 1;
        }
        if chars.get(digits_at).is_some_and(char::is_ascii_digit) {
            end = scan(chars, digits_at, |c| c.is_ascii_digit());
        }
    }

    let text: String = chars[start..end].iter().collect();
    let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
        text: text.clone(),
        pos: start,
    })?;

    let is_suffix = matches!(chars.get(end), Some('i' | 'j'))
        && !chars
            .get(end + 1)
            .is_some_and(|c| c.is_alphanumeric() || *c == '_');
    if is_suffix {
        Ok((TokenKind::Imaginary(value), end + 1))
    } else {
        Ok((TokenKind::Number(value), end))
    }
}

fn scan(chars: &[char], mut pos: usize, accept: impl Fn(char) -> bool) -> usize {
    while chars.get(pos).is_some_and(|&c| accept(c)) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("should tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn operators_and_power_spellings() {
        assert_eq!(
            kinds("x^2 ** 3*x"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Caret,
                TokenKind::Number(2.0),
                TokenKind::Caret,
                TokenKind::Number(3.0),
                TokenKind::Star,
                TokenKind::Ident("x".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn numbers_with_exponent_and_suffix() {
        assert_eq!(
            kinds("1.5e-3 2i .5j 4e"),
            vec![
                TokenKind::Number(1.5e-3),
                TokenKind::Imaginary(2.0),
                TokenKind::Imaginary(0.5),
                TokenKind::Number(4.0),
                TokenKind::Ident("e".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn suffix_followed_by_letters_is_not_imaginary() {
        assert_eq!(
            kinds("2in"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Ident("in".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x $ 2"),
            Err(ParseError::UnexpectedChar { ch: '$', pos: 2 })
        );
    }

    #[test]
    fn rejects_lone_point() {
        assert!(matches!(
            tokenize("."),
            Err(ParseError::InvalidNumber { pos: 0, .. })
        ));
    }
}
