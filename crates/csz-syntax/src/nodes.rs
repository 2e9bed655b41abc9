//! Typed node data stored in the tree's per-category pools.
//!
//! Each node category keeps exactly the named children and tokens its scope
//! boundaries are defined over. Children are referenced by pool index;
//! optional tokens use `TokenIndex::NONE`; optional children use `Option`.
//! Nothing here holds a parent pointer and nothing is mutable once built.

use csz_common::Span;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::token::TokenIndex;

macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_index!(
    /// Index of a statement in the tree's statement pool.
    StmtId
);
define_index!(
    /// Index of a block in the tree's block pool.
    BlockId
);
define_index!(
    /// Index of a catch clause in the tree's catch-clause pool.
    CatchClauseId
);
define_index!(
    /// Index of a method declaration.
    MethodId
);
define_index!(
    /// Index of a constructor declaration.
    ConstructorId
);
define_index!(
    /// Index of a property or indexer declaration.
    PropertyId
);
define_index!(
    /// Index of a delegate declaration.
    DelegateId
);
define_index!(
    /// Index of a type (class/struct/interface/enum) declaration.
    TypeDeclId
);
define_index!(
    /// Index of a namespace declaration.
    NamespaceId
);
define_index!(
    /// Index of an anonymous function or query expression.
    FunctionId
);
define_index!(
    /// Index of an XML documentation attribute.
    XmlAttributeId
);

/// Data for blocks (`{ ... }`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub span: Span,
    pub open_brace: TokenIndex,
    pub close_brace: TokenIndex,
}

/// Data for expression bodies (`=> expr`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ArrowClauseData {
    pub span: Span,
    pub arrow_token: TokenIndex,
}

/// Data for one attribute list (`[Attr, ...]`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AttributeListData {
    pub span: Span,
    pub open_bracket: TokenIndex,
    pub close_bracket: TokenIndex,
}

/// Data for type parameter lists (`<T, U>`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TypeParameterListData {
    pub span: Span,
    pub less_than: TokenIndex,
    pub greater_than: TokenIndex,
}

/// Data for parameter lists (`(int x, string y)`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParameterListData {
    pub span: Span,
    pub open_paren: TokenIndex,
    pub close_paren: TokenIndex,
}

/// Data for method declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    /// Span of the whole declaration, attributes and modifiers included.
    pub span: Span,
    pub attribute_lists: SmallVec<[AttributeListData; 2]>,
    /// Span of the return type node.
    pub return_type_span: Span,
    /// First token of the explicit interface qualifier, or `NONE`.
    pub explicit_interface_start: TokenIndex,
    /// The method's name token.
    pub identifier: TokenIndex,
    pub type_parameter_list: Option<TypeParameterListData>,
    pub parameter_list: ParameterListData,
    pub body: Option<BlockId>,
    pub expression_body: Option<ArrowClauseData>,
    /// Terminator token; `NONE` when a block body is present.
    pub semicolon: TokenIndex,
}

/// Data for constructor declarations.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConstructorDeclData {
    pub span: Span,
    pub parameter_list: ParameterListData,
    /// Leading `:` of the constructor initializer, or `NONE`.
    pub initializer_colon: TokenIndex,
    pub body: Option<BlockId>,
    /// The declaration's last token, for next-token navigation.
    pub last_token: TokenIndex,
}

/// Data for property and indexer declarations.
///
/// Only the expression-body form is represented; block-bodied accessors
/// belong to accessor declarations, a different node category that this
/// pool does not model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub span: Span,
    pub expression_body: Option<ArrowClauseData>,
    pub semicolon: TokenIndex,
}

/// Data for delegate declarations.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DelegateDeclData {
    pub span: Span,
    pub semicolon: TokenIndex,
}

/// Data for type declarations (class, struct, interface, enum).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TypeDeclData {
    pub span: Span,
    pub keyword: TokenIndex,
    pub close_brace: TokenIndex,
}

/// Data for namespace declarations.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NamespaceDeclData {
    pub span: Span,
    pub namespace_keyword: TokenIndex,
    pub close_brace: TokenIndex,
}

/// Data for catch clauses.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CatchClauseData {
    pub span: Span,
    pub block: BlockId,
    pub filter: Option<CatchFilterData>,
}

/// Data for catch filter clauses (`when (expr)`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CatchFilterData {
    pub span: Span,
    pub open_paren: TokenIndex,
    pub close_paren: TokenIndex,
}

/// Data for XML documentation attributes (`name="value"`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct XmlAttributeData {
    pub span: Span,
    pub start_quote: TokenIndex,
    pub end_quote: TokenIndex,
}

/// The body of an anonymous function: a statement (block lambda, anonymous
/// method) or a bare expression.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum AnonymousBody {
    Statement(StmtId),
    Expression {
        /// The expression's last token, for next-token navigation.
        last_token: TokenIndex,
    },
}

/// Data for anonymous functions and query expressions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum AnonymousFunctionData {
    /// `x => ...` or `(x, y) => ...`. `first_parameter` is the lambda's
    /// first token: the lone parameter, or the parameter list's `(`.
    Lambda {
        span: Span,
        first_parameter: TokenIndex,
        body: AnonymousBody,
    },
    /// `delegate (...) { ... }`.
    AnonymousMethod {
        span: Span,
        delegate_keyword: TokenIndex,
        body: AnonymousBody,
    },
    /// Any other scope-introducing expression, classified generically as a
    /// query clause: scope runs from just past the leading keyword to just
    /// past the last token.
    Query {
        span: Span,
        first_token: TokenIndex,
        last_token: TokenIndex,
    },
}

/// A statement of the closed statement grammar.
///
/// The boundary tables in the binder match exhaustively over this enum, so
/// growing the grammar forces every table to be revisited at compile time.
/// Wrapper and loop variants reference their wrapped statement by `StmtId`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum StatementData {
    Block(BlockId),
    Break {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
    /// `checked { ... }` or `unchecked { ... }`.
    Checked {
        keyword: TokenIndex,
        body: StmtId,
    },
    Continue {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
    Do {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
    Empty {
        semicolon: TokenIndex,
    },
    Expression {
        first_token: TokenIndex,
        semicolon: TokenIndex,
    },
    Fixed {
        keyword: TokenIndex,
        body: StmtId,
    },
    For {
        keyword: TokenIndex,
        /// First token of the loop-variable declaration, or `NONE`.
        declaration_first: TokenIndex,
        body: StmtId,
    },
    ForEach {
        keyword: TokenIndex,
        /// First token of the iteration-variable declaration, or `NONE`.
        declaration_first: TokenIndex,
        body: StmtId,
    },
    Goto {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
    If {
        keyword: TokenIndex,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    Labeled {
        label: TokenIndex,
        body: StmtId,
    },
    LocalDeclaration {
        first_token: TokenIndex,
        semicolon: TokenIndex,
    },
    Lock {
        keyword: TokenIndex,
        body: StmtId,
    },
    Return {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
    Switch {
        keyword: TokenIndex,
        close_brace: TokenIndex,
    },
    Throw {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
    Try {
        keyword: TokenIndex,
        block: BlockId,
        catches: SmallVec<[CatchClauseId; 1]>,
        finally_block: Option<BlockId>,
    },
    Unsafe {
        keyword: TokenIndex,
        body: StmtId,
    },
    Using {
        keyword: TokenIndex,
        body: StmtId,
    },
    While {
        keyword: TokenIndex,
        body: StmtId,
    },
    Yield {
        keyword: TokenIndex,
        semicolon: TokenIndex,
    },
}
