//! C# syntax tree types for the csz compiler front end.
//!
//! This crate provides the immutable tree surface the binder layer is
//! written against:
//! - `SyntaxKind` - Terminal kinds (the closed shape set)
//! - `Token` / `TokenIndex` - Terminals and their stream indices, with the
//!   `NONE` sentinel
//! - Typed node data (`BlockData`, `MethodDeclData`, `StatementData`, ...)
//! - `SyntaxTree` - The single backing arena owning the token stream and
//!   one pool per node category
//!
//! Trees are produced once by the parser (or by test fixtures) through the
//! `add_*` methods and are immutable afterwards; consumers only borrow.

pub mod nodes;
pub mod syntax_kind;
pub mod token;
pub mod tree;

pub use nodes::{
    AnonymousBody, AnonymousFunctionData, ArrowClauseData, AttributeListData, BlockData, BlockId,
    CatchClauseData, CatchClauseId, CatchFilterData, ConstructorDeclData, ConstructorId,
    DelegateDeclData, DelegateId, FunctionId, MethodDeclData, MethodId, NamespaceDeclData,
    NamespaceId, ParameterListData, PropertyDeclData, PropertyId, StatementData, StmtId,
    TypeDeclData, TypeDeclId, TypeParameterListData, XmlAttributeData, XmlAttributeId,
};
pub use syntax_kind::SyntaxKind;
pub use token::{Token, TokenIndex};
pub use tree::SyntaxTree;
