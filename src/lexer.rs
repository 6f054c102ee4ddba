use logos::Logos;
use std::fmt;

use crate::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")] // Skip whitespace
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    // Anything that is neither whitespace nor a parenthesis is atom text.
    // There is no comment, string or quote syntax: `;`, `"` and `'` are
    // ordinary atom characters.
    #[regex(r"[^ \t\n\r()]+", |lex| lex.slice().to_string())]
    Atom(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

// Implement Display for easy printing
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Atom(s) => write!(f, "{}", s),
        }
    }
}

/// Splits a program string into tokens. Parentheses always occupy their own
/// token slot no matter how the source is spaced, so `(foo)` and `( foo )`
/// tokenize identically.
///
/// The three rules above cover every input byte, so tokenization never
/// fails; empty or whitespace-only input yields an empty vector.
pub fn tokenize(input: &str) -> Vec<Token> {
    TokenKind::lexer(input)
        .spanned()
        .map(|(result, range)| {
            let kind =
                result.unwrap_or_else(|_| TokenKind::Atom(input[range.clone()].to_string()));
            Token {
                kind,
                span: Span {
                    start: range.start,
                    end: range.end,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to simplify testing token sequences
    fn assert_tokens(input: &str, expected: Vec<TokenKind>) {
        let kinds: Vec<TokenKind> = tokenize(input).into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, expected, "Input: '{}'", input);
    }

    fn atom(s: &str) -> TokenKind {
        TokenKind::Atom(s.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert_tokens("", vec![]);
        assert_tokens("   \t\n\r  ", vec![]);
    }

    #[test]
    fn test_parentheses() {
        assert_tokens("()", vec![TokenKind::LParen, TokenKind::RParen]);
        assert_tokens("( )", vec![TokenKind::LParen, TokenKind::RParen]);
        assert_tokens("((()))", vec![
            TokenKind::LParen,
            TokenKind::LParen,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::RParen,
            TokenKind::RParen,
        ]);
    }

    #[test]
    fn test_parens_need_no_surrounding_space() {
        let expected = vec![TokenKind::LParen, atom("foo"), TokenKind::RParen];
        assert_tokens("(foo)", expected.clone());
        assert_tokens("( foo )", expected.clone());
        assert_tokens("(foo )", expected);
    }

    #[test]
    fn test_atoms_are_unclassified_text() {
        // Numbers are still plain text at this stage
        assert_tokens("123 4.5 -6", vec![atom("123"), atom("4.5"), atom("-6")]);
        assert_tokens("+ <=? a-b", vec![atom("+"), atom("<=?"), atom("a-b")]);
    }

    #[test]
    fn test_no_comment_or_string_syntax() {
        // `;` and `"` have no special meaning and lex as atom text
        assert_tokens("; not a comment", vec![atom(";"), atom("not"), atom("a"), atom("comment")]);
        assert_tokens("\"hello", vec![atom("\"hello")]);
        assert_tokens("'quoted", vec![atom("'quoted")]);
    }

    #[test]
    fn test_sequences_and_whitespace() {
        assert_tokens("(+ 1 2)", vec![
            TokenKind::LParen,
            atom("+"),
            atom("1"),
            atom("2"),
            TokenKind::RParen,
        ]);
        assert_tokens("  ( define x 10 )  ", vec![
            TokenKind::LParen,
            atom("define"),
            atom("x"),
            atom("10"),
            TokenKind::RParen,
        ]);
    }

    #[test]
    fn test_area_program_token_count() {
        let tokens = tokenize("(begin (define r 10) (* pi (* r r)))");
        assert_eq!(tokens.len(), 17);
        assert_eq!(tokens[0].kind, TokenKind::LParen);
        assert_eq!(tokens[1].kind, atom("begin"));
        assert_eq!(tokens[5].kind, atom("10"));
        assert_eq!(tokens[16].kind, TokenKind::RParen);
    }

    #[test]
    fn test_retokenize_joined_tokens() {
        // Rendering a token sequence with single spaces and tokenizing it
        // again must reproduce the sequence
        let tokens = tokenize("(begin   (define r 10)\n\t(* pi (* r r)))");
        let joined = tokens
            .iter()
            .map(|t| t.kind.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
        let rekinds: Vec<TokenKind> = tokenize(&joined).into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, rekinds);
    }

    #[test]
    fn test_tokenize_spans() {
        // Verify spans manually for a simple case
        let input = "(+ 1)";
        let tokens = tokenize(input);

        assert_eq!(tokens.len(), 4);

        assert_eq!(tokens[0].kind, TokenKind::LParen);
        assert_eq!(tokens[0].span, Span { start: 0, end: 1 });

        assert_eq!(tokens[1].kind, atom("+"));
        assert_eq!(tokens[1].span, Span { start: 1, end: 2 });

        assert_eq!(tokens[2].kind, atom("1"));
        assert_eq!(tokens[2].span, Span { start: 3, end: 4 });

        assert_eq!(tokens[3].kind, TokenKind::RParen);
        assert_eq!(tokens[3].span, Span { start: 4, end: 5 });
    }
}
