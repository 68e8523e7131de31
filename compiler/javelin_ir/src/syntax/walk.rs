//! Generic tree walking.
//!
//! Consumers that need enter/exit callbacks match on [`WalkEvent`]s from
//! [`Node::preorder`] instead of implementing a listener per rule.

use std::fmt::Write;

use super::{Child, Node, TokenRef};

/// One step of a preorder traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter(&'a Node),
    Token(TokenRef),
    Leave(&'a Node),
}

/// Preorder traversal with explicit enter/leave events.
///
/// Uses an explicit stack, so deep trees do not recurse.
pub struct Preorder<'a> {
    stack: Vec<(&'a Node, usize)>,
    root: Option<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push((root, 0));
            return Some(WalkEvent::Enter(root));
        }
        let (node, index) = self.stack.last_mut()?;
        let node: &'a Node = *node;
        let child = node.children.get(*index);
        if child.is_some() {
            *index += 1;
        }
        match child {
            Some(Child::Node(inner)) => {
                self.stack.push((inner, 0));
                Some(WalkEvent::Enter(inner))
            }
            Some(Child::Token(token)) => Some(WalkEvent::Token(*token)),
            None => {
                self.stack.pop();
                Some(WalkEvent::Leave(node))
            }
        }
    }
}

/// Every node in the subtree, root first.
pub struct Descendants<'a> {
    inner: Preorder<'a>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                WalkEvent::Enter(node) => return Some(node),
                WalkEvent::Token(_) | WalkEvent::Leave(_) => {}
            }
        }
    }
}

impl Node {
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: Vec::new(),
            root: Some(self),
        }
    }

    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            inner: self.preorder(),
        }
    }

    /// All token leaves of the subtree in source order.
    pub fn tokens(&self) -> impl Iterator<Item = TokenRef> + '_ {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Token(token) => Some(token),
            WalkEvent::Enter(_) | WalkEvent::Leave(_) => None,
        })
    }

    /// Render the subtree as an S-expression, tokens spelled from `source`.
    ///
    /// `1 + 2` renders as `(Binary(Add) (Literal(Integer) 1) + (Literal(Integer) 2))`.
    /// Spans are left out, so two parses of the same text at different
    /// offsets render identically.
    pub fn to_sexp(&self, source: &str) -> String {
        let mut out = String::new();
        let mut first_in_list = true;
        for event in self.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    if !first_in_list {
                        out.push(' ');
                    }
                    // Writing into a String cannot fail.
                    let _ = write!(out, "({:?}", node.kind());
                    first_in_list = false;
                }
                WalkEvent::Token(token) => {
                    out.push(' ');
                    out.push_str(source.get(token.span.to_range()).unwrap_or("?"));
                }
                WalkEvent::Leave(_) => out.push(')'),
            }
        }
        out
    }
}
