use crate::source::Span;
use std::fmt; // For custom display formatting

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: Sexpr, // The actual S-expression data
    pub span: Span,  // The source span it covers
}

impl Node {
    pub fn new(kind: Sexpr, span: Span) -> Self {
        Node { kind, span }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Sexpr's Display implementation
        write!(f, "{}", self.kind)
    }
}

/// An indivisible value: an exact integer, a floating-point number, or a
/// symbol naming an identifier, operator or keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Integer(i64),
    Float(f64),
    Symbol(String),
}

impl Atom {
    /// Classifies one token's text. The integer parse is tried first, then
    /// the float parse; anything that is not a number is a symbol, so
    /// classification is total.
    ///
    /// `f64` also accepts the `inf`/`nan` spellings, so those tokens come
    /// out as floats rather than symbols. Integers too large for `i64`
    /// fall through to the float parse.
    pub fn from_token(token: &str) -> Atom {
        if let Ok(n) = token.parse::<i64>() {
            Atom::Integer(n)
        } else if let Ok(n) = token.parse::<f64>() {
            Atom::Float(n)
        } else {
            Atom::Symbol(token.to_string())
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Integer(n) => write!(f, "{}", n),
            Atom::Float(n) => write!(f, "{}", n),
            Atom::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// An S-expression: an atom, or an ordered sequence of sub-expressions.
/// Sequence order is significant and preserved exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Sexpr {
    Atom(Atom),
    List(Vec<Node>), // e.g. (+ 1 2), (define x 10)
}

impl fmt::Display for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexpr::Atom(atom) => write!(f, "{}", atom),
            Sexpr::List(list) => {
                write!(f, "(")?;
                let mut first = true;
                for expr in list {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", expr)?;
                    first = false;
                }
                write!(f, ")")
            }
        }
    }
}
