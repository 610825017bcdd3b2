// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Arena syntax tree
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Nodes are
//! stored in preorder, so a node's id is always smaller than the ids of its
//! descendants. [`SyntaxNode`] is a cheap copyable cursor pairing a tree with
//! an id.

use std::fmt::{self, Write as _};

use crate::kind::SyntaxKind;

/// Index of a node in its [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
}

/// Immutable syntax tree
///
/// Always has a root at index 0. Build one with
/// [`TreeBuilder`](crate::TreeBuilder).
#[derive(Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// A tree holding only an empty `SourceFile` spanning `0..len`
    pub fn empty(len: usize) -> Self {
        Self {
            nodes: vec![NodeData {
                kind: SyntaxKind::SourceFile,
                from: 0,
                to: len,
                parent: None,
                first_child: None,
                last_child: None,
                prev_sibling: None,
                next_sibling: None,
            }],
        }
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            tree: self,
            id: NodeId(0),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<SyntaxNode<'_>> {
        (id.index() < self.nodes.len()).then_some(SyntaxNode { tree: self, id })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in preorder
    pub fn iter(&self) -> impl Iterator<Item = SyntaxNode<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| SyntaxNode {
            tree: self,
            id: NodeId(i as u32),
        })
    }

    /// All error nodes in document order
    pub fn errors(&self) -> impl Iterator<Item = SyntaxNode<'_>> + '_ {
        self.iter().filter(|node| node.is_error())
    }

    /// Innermost node that ends at or covers `pos`
    ///
    /// A child is entered when `from < pos <= to`, so a cursor placed right
    /// after a token resolves to that token. Falls back to the root.
    pub fn resolve(&self, pos: usize) -> SyntaxNode<'_> {
        let mut current = self.root();
        'descend: loop {
            for child in current.children().rev() {
                if child.from() < pos && pos <= child.to() {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    /// Innermost error node whose span touches `pos` (`from <= pos <= to`)
    pub fn error_at(&self, pos: usize) -> Option<SyntaxNode<'_>> {
        self.errors()
            .filter(|node| node.from() <= pos && pos <= node.to())
            .max_by_key(|node| node.depth())
    }

    /// Indented outline of the tree, one node per line
    pub fn dump(&self, source: &str) -> String {
        let mut out = String::new();
        for node in self.iter() {
            let indent = "  ".repeat(node.depth());
            let _ = write!(out, "{indent}{}@{}..{}", node.kind(), node.from(), node.to());
            if node.first_child().is_none() && node.from() < node.to() {
                let _ = write!(out, " {:?}", node.text(source));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowed handle to one node of a [`SyntaxTree`]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    fn data(&self) -> &'t NodeData {
        &self.tree.nodes[self.id.index()]
    }

    fn at(&self, id: Option<NodeId>) -> Option<SyntaxNode<'t>> {
        id.map(|id| SyntaxNode {
            tree: self.tree,
            id,
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind() == kind
    }

    pub fn is_error(&self) -> bool {
        self.kind().is_error()
    }

    pub fn from(&self) -> usize {
        self.data().from
    }

    pub fn to(&self) -> usize {
        self.data().to
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.from()..self.to()
    }

    /// Source text covered by this node
    ///
    /// Returns an empty string when the span does not fit `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range()).unwrap_or_default()
    }

    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        self.at(self.data().parent)
    }

    pub fn first_child(&self) -> Option<SyntaxNode<'t>> {
        self.at(self.data().first_child)
    }

    pub fn last_child(&self) -> Option<SyntaxNode<'t>> {
        self.at(self.data().last_child)
    }

    pub fn prev_sibling(&self) -> Option<SyntaxNode<'t>> {
        self.at(self.data().prev_sibling)
    }

    pub fn next_sibling(&self) -> Option<SyntaxNode<'t>> {
        self.at(self.data().next_sibling)
    }

    /// Direct children in order
    pub fn children(&self) -> Children<'t> {
        Children {
            front: self.first_child(),
            back: self.last_child(),
        }
    }

    /// Direct children of one kind
    pub fn children_of(
        &self,
        kind: SyntaxKind,
    ) -> impl DoubleEndedIterator<Item = SyntaxNode<'t>> + use<'t> {
        self.children().filter(move |child| child.is(kind))
    }

    /// First direct child of one kind
    pub fn child(&self, kind: SyntaxKind) -> Option<SyntaxNode<'t>> {
        self.children_of(kind).next()
    }

    /// Proper ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode<'t>> + use<'t> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Nearest proper ancestor of one kind
    pub fn ancestor(&self, kind: SyntaxKind) -> Option<SyntaxNode<'t>> {
        self.ancestors().find(|node| node.is(kind))
    }

    pub fn has_ancestor(&self, kind: SyntaxKind) -> bool {
        self.ancestor(kind).is_some()
    }

    /// This node and everything below it, in preorder
    pub fn descendants(&self) -> Descendants<'t> {
        Descendants {
            root: *self,
            next: Some(*self),
        }
    }

    /// Number of proper ancestors
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.kind(), self.from(), self.to())
    }
}

/// Iterator over the direct children of a node
#[derive(Debug, Clone)]
pub struct Children<'t> {
    front: Option<SyntaxNode<'t>>,
    back: Option<SyntaxNode<'t>>,
}

impl<'t> Iterator for Children<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.front?;
        if self.back == Some(node) {
            self.front = None;
            self.back = None;
        } else {
            self.front = node.next_sibling();
        }
        Some(node)
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.back?;
        if self.front == Some(node) {
            self.front = None;
            self.back = None;
        } else {
            self.back = node.prev_sibling();
        }
        Some(node)
    }
}

/// Preorder walk of a subtree
#[derive(Debug, Clone)]
pub struct Descendants<'t> {
    root: SyntaxNode<'t>,
    next: Option<SyntaxNode<'t>>,
}

impl<'t> Iterator for Descendants<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.first_child().or_else(|| {
            let mut node = current;
            loop {
                if node == self.root {
                    return None;
                }
                if let Some(sibling) = node.next_sibling() {
                    return Some(sibling);
                }
                node = node.parent()?;
            }
        });
        Some(current)
    }
}
