//! Expression tokenizer: one left-to-right pass over the input.

use crate::expr::token::{Token, TokenKind};

/// Lex `input` into a flat token stream.
///
/// Parens and commas are the only delimiters; everything between them
/// accumulates into one buffer and flushes as a single token. A flushed
/// word that exactly matches a boolean keyword becomes an `Op` token,
/// anything else a `Value` token. There is no quoting or escaping, and
/// whitespace inside a value is preserved verbatim (which is how a
/// datetime literal like `2025-03-20 00:00:00` survives as one token).
///
/// Never fails for the defined alphabet.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();

    for ch in input.chars() {
        match ch {
            '(' => {
                flush(&mut tokens, &mut buffer);
                tokens.push(Token::new(TokenKind::LParen, "("));
            }
            ')' => {
                flush(&mut tokens, &mut buffer);
                tokens.push(Token::new(TokenKind::RParen, ")"));
            }
            ',' => {
                flush(&mut tokens, &mut buffer);
                tokens.push(Token::new(TokenKind::Comma, ","));
            }
            _ => buffer.push(ch),
        }
    }
    flush(&mut tokens, &mut buffer);

    tokens
}

fn flush(tokens: &mut Vec<Token>, buffer: &mut String) {
    if buffer.is_empty() {
        return;
    }
    let kind = if is_keyword(buffer) {
        TokenKind::Op
    } else {
        TokenKind::Value
    };
    tokens.push(Token::new(kind, buffer.as_str()));
    buffer.clear();
}

fn is_keyword(word: &str) -> bool {
    matches!(word, "and" | "or" | "&&" | "||")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_full_expression() {
        let input = "((string,1,contain,banana)or(time,2,>,2025-03-20 00:00:00))and(int,3,==,1000)";

        let expected = vec![
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::Value, "string"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "1"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "contain"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "banana"),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::Op, "or"),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::Value, "time"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "2"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, ">"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "2025-03-20 00:00:00"),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::RParen, ")"),
            Token::new(TokenKind::Op, "and"),
            Token::new(TokenKind::LParen, "("),
            Token::new(TokenKind::Value, "int"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "3"),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "=="),
            Token::new(TokenKind::Comma, ","),
            Token::new(TokenKind::Value, "1000"),
            Token::new(TokenKind::RParen, ")"),
        ];

        assert_eq!(tokenize(input), expected);
    }

    #[test]
    fn test_boolean_keywords() {
        for word in ["and", "or", "&&", "||"] {
            let tokens = tokenize(word);
            assert_eq!(tokens, vec![Token::new(TokenKind::Op, word)]);
        }

        // Only exact matches are keywords.
        assert_eq!(
            tokenize("android"),
            vec![Token::new(TokenKind::Value, "android")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_trailing_buffer_is_flushed() {
        let tokens = tokenize("(a)b");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::LParen, "("),
                Token::new(TokenKind::Value, "a"),
                Token::new(TokenKind::RParen, ")"),
                Token::new(TokenKind::Value, "b"),
            ]
        );
    }
}
