// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Event-style tree construction

use crate::kind::SyntaxKind;
use crate::tree::{NodeData, NodeId, SyntaxTree};

/// Builds a [`SyntaxTree`] from start/finish events
///
/// Parsers call [`start_node`](Self::start_node) when entering a rule,
/// [`leaf`](Self::leaf) for each token and [`finish_node`](Self::finish_node)
/// when leaving. The first node started becomes the root.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a node starting at `from`
    pub fn start_node(&mut self, kind: SyntaxKind, from: usize) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.stack.last().copied();
        let prev_sibling = parent.and_then(|p| self.nodes[p.index()].last_child);

        self.nodes.push(NodeData {
            kind,
            from,
            to: from,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling,
            next_sibling: None,
        });

        if let Some(prev) = prev_sibling {
            self.nodes[prev.index()].next_sibling = Some(id);
        }
        if let Some(parent) = parent {
            let data = &mut self.nodes[parent.index()];
            data.first_child.get_or_insert(id);
            data.last_child = Some(id);
        }

        self.stack.push(id);
        id
    }

    /// Close the innermost open node at `to`
    ///
    /// The end never precedes the node's start or its last child's end.
    pub fn finish_node(&mut self, to: usize) {
        let Some(id) = self.stack.pop() else {
            return;
        };
        let child_end = self.nodes[id.index()]
            .last_child
            .map(|c| self.nodes[c.index()].to)
            .unwrap_or(0);
        let data = &mut self.nodes[id.index()];
        data.to = to.max(data.from).max(child_end);
    }

    /// Add a childless node
    pub fn leaf(&mut self, kind: SyntaxKind, from: usize, to: usize) -> NodeId {
        let id = self.start_node(kind, from);
        self.finish_node(to);
        id
    }

    /// Add an empty error node at `pos`
    pub fn error(&mut self, pos: usize) -> NodeId {
        self.leaf(SyntaxKind::Error, pos, pos)
    }

    /// Close any open nodes and return the tree
    ///
    /// An empty builder yields an empty `SourceFile`.
    pub fn finish(mut self) -> SyntaxTree {
        while let Some(&id) = self.stack.last() {
            let end = self.nodes[id.index()].to;
            self.finish_node(end);
        }
        if self.nodes.is_empty() {
            return SyntaxTree::empty(0);
        }
        SyntaxTree { nodes: self.nodes }
    }
}
