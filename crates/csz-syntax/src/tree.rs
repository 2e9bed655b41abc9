//! The syntax tree arena.
//!
//! A `SyntaxTree` is the single backing allocation for one parsed source
//! file: the source-ordered token stream plus one pool per node category.
//! The parser appends into it through the `add_*` methods; after that the
//! tree is immutable and may be shared freely across threads.
//!
//! Ids handed out by `add_*` are stable indices into the pools. Passing an
//! id from another tree is a caller defect and panics on pool access rather
//! than misclassifying.

use csz_common::Span;
use serde::{Deserialize, Serialize};

use crate::nodes::*;
use crate::syntax_kind::SyntaxKind;
use crate::token::{Token, TokenIndex};

/// Arena for the tokens and nodes of one source file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SyntaxTree {
    tokens: Vec<Token>,
    statements: Vec<StatementData>,
    blocks: Vec<BlockData>,
    catch_clauses: Vec<CatchClauseData>,
    methods: Vec<MethodDeclData>,
    constructors: Vec<ConstructorDeclData>,
    properties: Vec<PropertyDeclData>,
    delegates: Vec<DelegateDeclData>,
    type_decls: Vec<TypeDeclData>,
    namespaces: Vec<NamespaceDeclData>,
    functions: Vec<AnonymousFunctionData>,
    xml_attributes: Vec<XmlAttributeData>,
}

impl SyntaxTree {
    pub fn new() -> SyntaxTree {
        SyntaxTree::default()
    }

    // =========================================================================
    // Token stream
    // =========================================================================

    /// Append the next token of the source.
    ///
    /// Tokens must arrive in source order with non-overlapping spans; a
    /// violation is a scanner defect and panics.
    pub fn add_token(&mut self, kind: SyntaxKind, span: Span) -> TokenIndex {
        assert!(!kind.is_none(), "the sentinel kind cannot be added to a token stream");
        if let Some(last) = self.tokens.last() {
            assert!(
                span.start >= last.span.end,
                "token at offset {} overlaps or precedes the previous token ending at {}",
                span.start,
                last.span.end
            );
        }
        let index = TokenIndex(self.tokens.len() as u32);
        self.tokens.push(Token::new(kind, span));
        index
    }

    /// Resolve a token index. `TokenIndex::NONE` yields the sentinel token.
    #[inline]
    pub fn token(&self, index: TokenIndex) -> Token {
        if index.is_none() {
            Token::NONE
        } else {
            self.tokens[index.0 as usize]
        }
    }

    /// The token immediately following `index` in the stream, or the
    /// sentinel token past the end (and for `NONE` itself).
    #[inline]
    pub fn token_after(&self, index: TokenIndex) -> Token {
        if index.is_none() {
            return Token::NONE;
        }
        self.tokens
            .get(index.0 as usize + 1)
            .copied()
            .unwrap_or(Token::NONE)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    // =========================================================================
    // Node pools
    // =========================================================================

    pub fn add_statement(&mut self, data: StatementData) -> StmtId {
        let id = StmtId(self.statements.len() as u32);
        self.statements.push(data);
        id
    }

    #[inline]
    pub fn statement(&self, id: StmtId) -> &StatementData {
        &self.statements[id.index()]
    }

    pub fn add_block(&mut self, data: BlockData) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(data);
        id
    }

    #[inline]
    pub fn block(&self, id: BlockId) -> &BlockData {
        &self.blocks[id.index()]
    }

    pub fn add_catch_clause(&mut self, data: CatchClauseData) -> CatchClauseId {
        let id = CatchClauseId(self.catch_clauses.len() as u32);
        self.catch_clauses.push(data);
        id
    }

    #[inline]
    pub fn catch_clause(&self, id: CatchClauseId) -> &CatchClauseData {
        &self.catch_clauses[id.index()]
    }

    pub fn add_method(&mut self, data: MethodDeclData) -> MethodId {
        let id = MethodId(self.methods.len() as u32);
        self.methods.push(data);
        id
    }

    #[inline]
    pub fn method(&self, id: MethodId) -> &MethodDeclData {
        &self.methods[id.index()]
    }

    pub fn add_constructor(&mut self, data: ConstructorDeclData) -> ConstructorId {
        let id = ConstructorId(self.constructors.len() as u32);
        self.constructors.push(data);
        id
    }

    #[inline]
    pub fn constructor(&self, id: ConstructorId) -> &ConstructorDeclData {
        &self.constructors[id.index()]
    }

    pub fn add_property(&mut self, data: PropertyDeclData) -> PropertyId {
        let id = PropertyId(self.properties.len() as u32);
        self.properties.push(data);
        id
    }

    #[inline]
    pub fn property(&self, id: PropertyId) -> &PropertyDeclData {
        &self.properties[id.index()]
    }

    pub fn add_delegate(&mut self, data: DelegateDeclData) -> DelegateId {
        let id = DelegateId(self.delegates.len() as u32);
        self.delegates.push(data);
        id
    }

    #[inline]
    pub fn delegate(&self, id: DelegateId) -> &DelegateDeclData {
        &self.delegates[id.index()]
    }

    pub fn add_type_decl(&mut self, data: TypeDeclData) -> TypeDeclId {
        let id = TypeDeclId(self.type_decls.len() as u32);
        self.type_decls.push(data);
        id
    }

    #[inline]
    pub fn type_decl(&self, id: TypeDeclId) -> &TypeDeclData {
        &self.type_decls[id.index()]
    }

    pub fn add_namespace(&mut self, data: NamespaceDeclData) -> NamespaceId {
        let id = NamespaceId(self.namespaces.len() as u32);
        self.namespaces.push(data);
        id
    }

    #[inline]
    pub fn namespace(&self, id: NamespaceId) -> &NamespaceDeclData {
        &self.namespaces[id.index()]
    }

    pub fn add_function(&mut self, data: AnonymousFunctionData) -> FunctionId {
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(data);
        id
    }

    #[inline]
    pub fn function(&self, id: FunctionId) -> &AnonymousFunctionData {
        &self.functions[id.index()]
    }

    pub fn add_xml_attribute(&mut self, data: XmlAttributeData) -> XmlAttributeId {
        let id = XmlAttributeId(self.xml_attributes.len() as u32);
        self.xml_attributes.push(data);
        id
    }

    #[inline]
    pub fn xml_attribute(&self, id: XmlAttributeId) -> &XmlAttributeData {
        &self.xml_attributes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_resolution_and_sentinel() {
        let mut tree = SyntaxTree::new();
        let a = tree.add_token(SyntaxKind::Identifier, Span::new(0, 3));
        let b = tree.add_token(SyntaxKind::SemicolonToken, Span::new(3, 4));

        assert_eq!(tree.token(a).kind, SyntaxKind::Identifier);
        assert_eq!(tree.token_after(a), tree.token(b));
        assert!(tree.token_after(b).is_none());
        assert!(tree.token(TokenIndex::NONE).is_none());
        assert!(tree.token_after(TokenIndex::NONE).is_none());
    }

    #[test]
    #[should_panic(expected = "overlaps or precedes")]
    fn test_out_of_order_tokens_panic() {
        let mut tree = SyntaxTree::new();
        tree.add_token(SyntaxKind::Identifier, Span::new(5, 8));
        tree.add_token(SyntaxKind::SemicolonToken, Span::new(4, 5));
    }

    #[test]
    #[should_panic(expected = "sentinel kind")]
    fn test_adding_sentinel_kind_panics() {
        let mut tree = SyntaxTree::new();
        tree.add_token(SyntaxKind::None, Span::new(0, 0));
    }

    #[test]
    fn test_zero_width_tokens_are_accepted() {
        // Error-recovery tokens may be zero width; ordering still holds.
        let mut tree = SyntaxTree::new();
        tree.add_token(SyntaxKind::Identifier, Span::new(0, 3));
        tree.add_token(SyntaxKind::SemicolonToken, Span::new(3, 3));
        tree.add_token(SyntaxKind::EndOfFile, Span::new(3, 3));
        assert_eq!(tree.token_count(), 3);
    }
}
