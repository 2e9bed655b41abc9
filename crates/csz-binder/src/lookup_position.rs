//! Position-to-scope classification over an immutable syntax tree.
//!
//! Given a zero-based character offset and a reference to a construct of a
//! known shape, the predicates here decide whether the offset lies inside
//! that construct's lexical scope. Scope selection in the binder depends on
//! these answers: a wrong boundary means names resolve against the wrong
//! symbol table.
//!
//! Every predicate reduces to a handful of token boundary checks. The
//! sentinel `Token::NONE` acts as an unbounded right edge (every position is
//! "before" it), which is what makes open-ended boundaries - a method with
//! no terminator yet, a query at the end of the file - fall out of the same
//! primitives. All checks are O(1) or O(nesting depth); none allocate.

use csz_common::Span;
use csz_syntax::{
    AnonymousBody, AnonymousFunctionData, ArrowClauseData, AttributeListData, BlockId,
    CatchClauseId, CatchFilterData, ConstructorId, DelegateId, FunctionId, MethodId, NamespaceId,
    ParameterListData, PropertyId, StatementData, StmtId, SyntaxTree, Token, TokenIndex,
    TypeDeclId, TypeParameterListData, XmlAttributeId,
};
use tracing::trace;

// =============================================================================
// Token boundary resolver
// =============================================================================

/// True if `position` precedes `token`'s first character. The sentinel
/// absent token is an unbounded right edge: every position precedes it.
#[inline]
fn is_before_token(position: u32, token: Token) -> bool {
    token.is_none() || position < token.span.start
}

/// True if `position` is inside `node_span` and before `first_excluded`.
#[inline]
fn is_in_node_before_token(position: u32, node_span: Span, first_excluded: Token) -> bool {
    is_before_token(position, first_excluded) && position >= node_span.start
}

/// True if `position` is at or after `first_included`'s start and before
/// `first_excluded`.
#[inline]
pub fn is_between_tokens(position: u32, first_included: Token, first_excluded: Token) -> bool {
    position >= first_included.span.start && is_before_token(position, first_excluded)
}

// =============================================================================
// Per-construct predicates
// =============================================================================

/// Whether `position` is within `block`, from its open brace (inclusive) to
/// its close brace (exclusive). An absent block never contains a position.
pub fn is_in_block(tree: &SyntaxTree, position: u32, block: Option<BlockId>) -> bool {
    match block {
        Some(block) => {
            let block = tree.block(block);
            is_in_node_before_token(position, block.span, tree.token(block.close_brace))
        }
        None => false,
    }
}

/// Whether `position` is within an expression body, from the arrow clause's
/// start to the terminator token.
pub fn is_in_expression_body(
    tree: &SyntaxTree,
    position: u32,
    body: Option<&ArrowClauseData>,
    semicolon: TokenIndex,
) -> bool {
    match body {
        Some(body) => is_in_node_before_token(position, body.span, tree.token(semicolon)),
        None => false,
    }
}

/// Whether `position` is within the body of a property or indexer.
///
/// Only the expression-body form is considered; block-bodied accessors hang
/// off accessor declarations, a different node, and are deliberately not
/// checked here.
pub fn is_in_property_or_indexer_body(tree: &SyntaxTree, position: u32, property: PropertyId) -> bool {
    let property = tree.property(property);
    is_in_expression_body(tree, position, property.expression_body.as_ref(), property.semicolon)
}

/// Whether `position` is within a method-like body: its expression body or
/// its block body, whichever is present.
pub fn is_in_method_body(tree: &SyntaxTree, position: u32, method: MethodId) -> bool {
    let method = tree.method(method);
    is_in_expression_body(tree, position, method.expression_body.as_ref(), method.semicolon)
        || is_in_block(tree, position, method.body)
}

/// Whether `position` is within the attribute specification: from the first
/// list's open bracket to the last list's close bracket. No lists, no span.
pub fn is_in_attribute_specification(
    tree: &SyntaxTree,
    position: u32,
    attribute_lists: &[AttributeListData],
) -> bool {
    let (Some(first), Some(last)) = (attribute_lists.first(), attribute_lists.last()) else {
        return false;
    };
    is_between_tokens(position, tree.token(first.open_bracket), tree.token(last.close_bracket))
}

/// Whether `position` is within the type parameter list, up to its `>`.
pub fn is_in_type_parameter_list(
    tree: &SyntaxTree,
    position: u32,
    list: Option<&TypeParameterListData>,
) -> bool {
    match list {
        Some(list) => is_in_node_before_token(position, list.span, tree.token(list.greater_than)),
        None => false,
    }
}

/// Whether `position` is within the parameter list, up to its `)`.
pub fn is_in_parameter_list(tree: &SyntaxTree, position: u32, list: &ParameterListData) -> bool {
    is_in_node_before_token(position, list.span, tree.token(list.close_paren))
}

/// Whether `position` is within the method declaration: from the
/// declaration's start to the block body's close brace, or to the
/// terminator when there is no block body.
pub fn is_in_method_declaration(tree: &SyntaxTree, position: u32, method: MethodId) -> bool {
    let method = tree.method(method);
    let last_excluded = match method.body {
        Some(body) => tree.token(tree.block(body).close_brace),
        None => tree.token(method.semicolon),
    };
    is_in_node_before_token(position, method.span, last_excluded)
}

/// Whether `position` is within the delegate declaration, up to its
/// terminator.
pub fn is_in_delegate_declaration(tree: &SyntaxTree, position: u32, delegate: DelegateId) -> bool {
    let delegate = tree.delegate(delegate);
    is_in_node_before_token(position, delegate.span, tree.token(delegate.semicolon))
}

/// Whether `position` is within the type declaration, up to its close brace.
pub fn is_in_type_declaration(tree: &SyntaxTree, position: u32, decl: TypeDeclId) -> bool {
    let decl = tree.type_decl(decl);
    is_in_node_before_token(position, decl.span, tree.token(decl.close_brace))
}

/// Whether `position` is within the namespace declaration, from the
/// `namespace` keyword to the close brace.
pub fn is_in_namespace_declaration(tree: &SyntaxTree, position: u32, namespace: NamespaceId) -> bool {
    let namespace = tree.namespace(namespace);
    is_between_tokens(
        position,
        tree.token(namespace.namespace_keyword),
        tree.token(namespace.close_brace),
    )
}

/// Whether `position` is within the scope of the constructor's parameters.
///
/// Parameters are visible to the constructor initializer and to the body,
/// but not before the parameter list closes: with no initializer the scope
/// opens immediately after the close paren, with an initializer it opens at
/// the initializer's leading `:`. It runs to the body's close brace, or -
/// with no body - to whatever token follows the declaration.
pub fn is_in_constructor_parameter_scope(
    tree: &SyntaxTree,
    position: u32,
    constructor: ConstructorId,
) -> bool {
    let constructor = tree.constructor(constructor);
    let close_paren = tree.token(constructor.parameter_list.close_paren);
    let initializer_colon = tree.token(constructor.initializer_colon);

    match constructor.body {
        None => {
            let next_token = tree.token_after(constructor.last_token);
            if initializer_colon.is_none() {
                position >= close_paren.span.end && is_before_token(position, next_token)
            } else {
                is_between_tokens(position, initializer_colon, next_token)
            }
        }
        Some(body) => {
            let close_brace = tree.token(tree.block(body).close_brace);
            if initializer_colon.is_none() {
                position >= close_paren.span.end && is_before_token(position, close_brace)
            } else {
                is_between_tokens(position, initializer_colon, close_brace)
            }
        }
    }
}

/// Whether `position` is within the scope of the method's type parameters.
///
/// The whole return type is in scope even though it lexically precedes the
/// type parameter list: `T Method<T>()` may name `T` in its return type.
/// Attribute lists are not in scope, and neither is the method's own name
/// (nor its explicit interface qualifier): the stretch from the first name
/// token up to the token that follows the name is carved out.
pub fn is_in_method_type_parameter_scope(tree: &SyntaxTree, position: u32, method: MethodId) -> bool {
    let method = tree.method(method);

    if method.type_parameter_list.is_none() {
        return false;
    }

    if is_in_attribute_specification(tree, position, &method.attribute_lists) {
        return false;
    }

    if method.return_type_span.contains(position) {
        return true;
    }

    let first_name_token = if method.explicit_interface_start.is_some() {
        tree.token(method.explicit_interface_start)
    } else {
        tree.token(method.identifier)
    };
    let first_post_name_token = match &method.type_parameter_list {
        Some(type_parameters) => tree.token(type_parameters.less_than),
        None => tree.token(method.parameter_list.open_paren),
    };

    !is_between_tokens(position, first_name_token, first_post_name_token)
}

/// Whether `position` is within the catch clause's block, strictly between
/// its braces.
pub fn is_in_catch_block_scope(tree: &SyntaxTree, position: u32, catch_clause: CatchClauseId) -> bool {
    let block = tree.block(tree.catch_clause(catch_clause).block);
    is_between_tokens(position, tree.token(block.open_brace), tree.token(block.close_brace))
}

/// Whether `position` is within the catch filter's parentheses.
pub fn is_in_catch_filter_scope(tree: &SyntaxTree, position: u32, filter: &CatchFilterData) -> bool {
    is_between_tokens(position, tree.token(filter.open_paren), tree.token(filter.close_paren))
}

/// Whether `position` is within the scope introduced by an anonymous
/// function or query expression.
///
/// A lambda scopes from its first parameter token, an anonymous method from
/// its `delegate` keyword; both run to their body's own excluded boundary
/// (a statement body), or to the token just past the body expression. Any
/// other shape is treated as a query clause: from just past its leading
/// keyword to just past its last token.
pub fn is_in_anonymous_function_or_query(
    tree: &SyntaxTree,
    position: u32,
    function: FunctionId,
) -> bool {
    let (first_included, first_excluded) = match tree.function(function) {
        AnonymousFunctionData::Lambda {
            first_parameter,
            body,
            ..
        } => (tree.token(*first_parameter), body_first_excluded_token(tree, body)),
        AnonymousFunctionData::AnonymousMethod {
            delegate_keyword,
            body,
            ..
        } => (tree.token(*delegate_keyword), body_first_excluded_token(tree, body)),
        AnonymousFunctionData::Query {
            first_token,
            last_token,
            ..
        } => (tree.token_after(*first_token), tree.token_after(*last_token)),
    };
    is_between_tokens(position, first_included, first_excluded)
}

fn body_first_excluded_token(tree: &SyntaxTree, body: &AnonymousBody) -> Token {
    match body {
        AnonymousBody::Statement(statement) => first_excluded_token(tree, *statement),
        AnonymousBody::Expression { last_token } => tree.token_after(*last_token),
    }
}

/// Whether `position` is within an XML attribute value, strictly between
/// its quote tokens.
pub fn is_in_xml_attribute_value(tree: &SyntaxTree, position: u32, attribute: XmlAttributeId) -> bool {
    let attribute = tree.xml_attribute(attribute);
    is_between_tokens(position, tree.token(attribute.start_quote), tree.token(attribute.end_quote))
}

// =============================================================================
// Statement scope
// =============================================================================

/// Whether `position` is within the scope of `statement`, per the statement
/// boundary tables below.
pub fn is_in_statement_scope(tree: &SyntaxTree, position: u32, statement: StmtId) -> bool {
    let first_included = first_included_token(tree, statement, true);

    // The empty statement owns no tokens and no scope; reject it before
    // asking for the excluded side.
    if first_included.is_none() {
        return false;
    }

    let first_excluded = first_excluded_token(tree, statement);
    trace!(position, ?first_included, ?first_excluded, "statement scope boundaries");
    is_between_tokens(position, first_included, first_excluded)
}

/// First token included in the scope of `statement`.
///
/// `on_entry` distinguishes the outer classification of a loop statement
/// from the internal re-entry used when the loop declares no variable: the
/// scope of a loop variable begins at its declaration, while a
/// declaration-less loop scopes from its keyword.
fn first_included_token(tree: &SyntaxTree, statement: StmtId, on_entry: bool) -> Token {
    match tree.statement(statement) {
        StatementData::Block(block) => tree.token(tree.block(*block).open_brace),
        StatementData::Break { keyword, .. }
        | StatementData::Checked { keyword, .. }
        | StatementData::Continue { keyword, .. }
        | StatementData::Do { keyword, .. }
        | StatementData::Fixed { keyword, .. }
        | StatementData::Goto { keyword, .. }
        | StatementData::If { keyword, .. }
        | StatementData::Lock { keyword, .. }
        | StatementData::Return { keyword, .. }
        | StatementData::Switch { keyword, .. }
        | StatementData::Throw { keyword, .. }
        | StatementData::Try { keyword, .. }
        | StatementData::Unsafe { keyword, .. }
        | StatementData::Using { keyword, .. }
        | StatementData::While { keyword, .. }
        | StatementData::Yield { keyword, .. } => tree.token(*keyword),
        StatementData::Empty { .. } => Token::NONE,
        StatementData::Expression { first_token, .. }
        | StatementData::LocalDeclaration { first_token, .. } => tree.token(*first_token),
        StatementData::Labeled { label, .. } => tree.token(*label),
        StatementData::For {
            declaration_first, ..
        }
        | StatementData::ForEach {
            declaration_first, ..
        } if on_entry => {
            if declaration_first.is_some() {
                // The scope of a loop variable starts at its declaration,
                // not at the enclosing loop keyword.
                tree.token(*declaration_first)
            } else {
                first_included_token(tree, statement, false)
            }
        }
        StatementData::For { keyword, .. } | StatementData::ForEach { keyword, .. } => {
            tree.token(*keyword)
        }
    }
}

/// First token excluded from the scope of `statement`.
///
/// Wrapper statements delegate to the statement they wrap, so the scope of
/// e.g. a `while` or a label runs to the end of the wrapped body; a `try`
/// runs to the end of its finally block, failing that its last catch block,
/// failing that its own block.
fn first_excluded_token(tree: &SyntaxTree, statement: StmtId) -> Token {
    match tree.statement(statement) {
        StatementData::Block(block) => tree.token(tree.block(*block).close_brace),
        StatementData::Break { semicolon, .. }
        | StatementData::Continue { semicolon, .. }
        | StatementData::Do { semicolon, .. }
        | StatementData::Empty { semicolon, .. }
        | StatementData::Expression { semicolon, .. }
        | StatementData::Goto { semicolon, .. }
        | StatementData::LocalDeclaration { semicolon, .. }
        | StatementData::Return { semicolon, .. }
        | StatementData::Throw { semicolon, .. }
        | StatementData::Yield { semicolon, .. } => tree.token(*semicolon),
        StatementData::Checked { body, .. }
        | StatementData::Fixed { body, .. }
        | StatementData::For { body, .. }
        | StatementData::ForEach { body, .. }
        | StatementData::Labeled { body, .. }
        | StatementData::Lock { body, .. }
        | StatementData::Unsafe { body, .. }
        | StatementData::Using { body, .. }
        | StatementData::While { body, .. } => first_excluded_token(tree, *body),
        StatementData::If {
            then_branch,
            else_branch,
            ..
        } => match else_branch {
            Some(else_branch) => first_excluded_token(tree, *else_branch),
            None => first_excluded_token(tree, *then_branch),
        },
        StatementData::Switch { close_brace, .. } => tree.token(*close_brace),
        StatementData::Try {
            block,
            catches,
            finally_block,
            ..
        } => {
            if let Some(finally_block) = finally_block {
                tree.token(tree.block(*finally_block).close_brace)
            } else if let Some(last_catch) = catches.last() {
                tree.token(tree.block(tree.catch_clause(*last_catch).block).close_brace)
            } else {
                tree.token(tree.block(*block).close_brace)
            }
        }
    }
}
