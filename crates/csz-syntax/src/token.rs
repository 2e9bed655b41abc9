//! Tokens and token-stream indices.

use csz_common::Span;
use serde::{Deserialize, Serialize};

use crate::syntax_kind::SyntaxKind;

/// A terminal element: a kind tag plus the source span it covers.
///
/// The distinguished `Token::NONE` represents "absent" (for example the
/// missing semicolon of a block-bodied method). Boundary checks treat it as
/// an unbounded right edge: every position is "before" it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl Token {
    /// The sentinel absent token.
    pub const NONE: Token = Token {
        kind: SyntaxKind::None,
        span: Span::EMPTY,
    };

    #[inline]
    pub fn new(kind: SyntaxKind, span: Span) -> Token {
        Token { kind, span }
    }

    /// Whether this is the sentinel absent token.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

/// Index of a token in its tree's source-ordered token stream.
///
/// `TokenIndex::NONE` is the index-level counterpart of `Token::NONE`:
/// resolving it through the tree yields the sentinel token. Node data uses
/// it wherever the grammar makes a token optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenIndex(pub u32);

impl TokenIndex {
    pub const NONE: TokenIndex = TokenIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == TokenIndex::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_index_sentinel() {
        let index = TokenIndex(0);
        assert!(index.is_some());
        assert!(!index.is_none());

        let none = TokenIndex::NONE;
        assert!(none.is_none());
        assert!(!none.is_some());
    }

    #[test]
    fn test_none_token_kind() {
        assert!(Token::NONE.is_none());
        assert!(Token::NONE.span.is_empty());
        assert!(Token::new(SyntaxKind::Identifier, Span::new(0, 3)).is_some());
    }
}
