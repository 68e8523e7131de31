//! Concrete syntax tree.
//!
//! Every token the parser consumes ends up as a [`Child::Token`] leaf, so a
//! node's leaves, read left to right, are exactly the tokens of its source
//! range. Nodes are built with [`NodeBuilder`] and are immutable afterwards.

mod kind;
mod operators;
mod walk;

pub use kind::NodeKind;
pub use operators::{AssignOp, BinaryOp, LiteralKind, PostfixOp, UnaryOp};
pub use walk::{Descendants, Preorder, WalkEvent};

use crate::{Span, Token, TokenKind};

/// A consumed token as stored in the tree: kind plus location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenRef {
    pub kind: TokenKind,
    pub span: Span,
}

impl From<Token> for TokenRef {
    fn from(token: Token) -> Self {
        TokenRef {
            kind: token.kind,
            span: token.span,
        }
    }
}

/// A child slot: either a nested node or a token leaf.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Child {
    Node(Node),
    Token(TokenRef),
}

impl Child {
    pub fn span(&self) -> Span {
        match self {
            Child::Node(node) => node.span,
            Child::Token(token) => token.span,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<TokenRef> {
        match self {
            Child::Node(_) => None,
            Child::Token(token) => Some(*token),
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<TokenRef> for Child {
    fn from(token: TokenRef) -> Self {
        Child::Token(token)
    }
}

/// A syntax tree node.
///
/// The span runs from the start of the first consumed token to the end of
/// the last one. A node that consumed nothing (an empty `Modifiers` list,
/// say) has a zero-width span at the position where it was started.
///
/// Left-deep operator chains can nest tens of thousands of levels, so
/// `Drop` and `PartialEq` walk the tree with an explicit stack.
#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    span: Span,
    children: Vec<Child>,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Direct child nodes, skipping token leaves.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Direct token leaves, skipping child nodes.
    pub fn child_tokens(&self) -> impl Iterator<Item = TokenRef> + '_ {
        self.children.iter().filter_map(Child::as_token)
    }

    /// First direct child node of `kind`.
    pub fn find_child(&self, kind: NodeKind) -> Option<&Node> {
        self.child_nodes().find(|n| n.kind == kind)
    }

    /// True if a direct token leaf has `kind`.
    pub fn has_token(&self, kind: TokenKind) -> bool {
        self.child_tokens().any(|t| t.kind == kind)
    }

    /// Source text covered by this node.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or("")
    }

    /// True if the node consumed no tokens.
    ///
    /// Every token the parser can consume has a non-empty lexeme; only the
    /// `Eof` sentinel is zero-width and it is never a child.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if !self.children.iter().any(|c| matches!(c, Child::Node(_))) {
            return;
        }
        let mut pending: Vec<Node> = Vec::new();
        detach_child_nodes(&mut self.children, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_child_nodes(&mut node.children, &mut pending);
            // `node` is dropped here with no child nodes left.
        }
    }
}

fn detach_child_nodes(children: &mut Vec<Child>, pending: &mut Vec<Node>) {
    for child in children.drain(..) {
        if let Child::Node(node) = child {
            pending.push(node);
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((left, right)) = pairs.pop() {
            if left.kind != right.kind
                || left.span != right.span
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for pair in left.children.iter().zip(&right.children) {
                match pair {
                    (Child::Node(a), Child::Node(b)) => pairs.push((a, b)),
                    (Child::Token(a), Child::Token(b)) if a == b => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

/// Incremental constructor for a [`Node`].
///
/// Children are pushed in source order; `finish` computes the span and
/// freezes the node.
#[derive(Debug)]
pub struct NodeBuilder {
    kind: NodeKind,
    start: u32,
    children: Vec<Child>,
}

impl NodeBuilder {
    /// Begin a node of `kind` whose empty span would sit at `start`.
    pub fn new(kind: NodeKind, start: u32) -> Self {
        NodeBuilder {
            kind,
            start,
            children: Vec::new(),
        }
    }

    /// Begin a node whose first child is an already-built node.
    ///
    /// Used when a left operand is parsed before the rule that wraps it is
    /// known (binary operators, selectors, postfix operators).
    pub fn wrapping(kind: NodeKind, first: Node) -> Self {
        NodeBuilder {
            kind,
            start: first.span.start,
            children: vec![Child::Node(first)],
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Change the kind before finishing, for rules whose alternative is
    /// only known after a shared prefix has been consumed.
    pub fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    pub fn push(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    pub fn push_node(&mut self, node: Node) {
        self.children.push(Child::Node(node));
    }

    pub fn push_token(&mut self, token: TokenRef) {
        self.children.push(Child::Token(token));
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Freeze the node.
    ///
    /// Children that consumed no tokens do not contribute to the span.
    pub fn finish(self) -> Node {
        let span = self
            .children
            .iter()
            .filter(|c| match c {
                Child::Node(node) => !node.is_empty(),
                Child::Token(_) => true,
            })
            .map(Child::span)
            .reduce(Span::cover)
            .unwrap_or(Span::point(self.start));
        Node {
            kind: self.kind,
            span,
            children: self.children,
        }
    }
}
