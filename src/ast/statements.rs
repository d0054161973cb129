use std::slice::Iter;

use crate::{errors::errors::ErrorImpl, Position};

use super::{
    ast::{AstNode, Node, NodeKind, NodeRef},
    expressions::IdentifierExp,
};

/// Compound Statement
/// The contents of a `{ ... }` block; the braces themselves are not kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    statements: Vec<Node>,
}

impl CompoundStmt {
    pub fn new(statements: Vec<Node>) -> Self {
        CompoundStmt { statements }
    }

    pub fn statements(&self) -> &[Node] {
        &self.statements
    }

    pub fn iter(&self) -> Iter<'_, Node> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        for statement in self.statements.iter_mut() {
            statement.for_each_identifier_mut(f);
        }
    }
}

impl AstNode for CompoundStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::CompoundStmt
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.statements.iter().map(Node::as_node_ref).collect()
    }
}

/// Return Statement
/// A missing value means a bare `return;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    value: Option<Box<Node>>,
    position: Position,
}

impl ReturnStmt {
    pub fn new(value: Option<Node>, position: Position) -> Result<Self, ErrorImpl> {
        if let Some(value) = &value {
            if !value.kind().is_expression() {
                return Err(ErrorImpl::IncompleteNode {
                    kind: NodeKind::ReturnStmt.to_string(),
                });
            }
        }

        Ok(ReturnStmt {
            value: value.map(Box::new),
            position,
        })
    }

    pub fn value(&self) -> Option<&Node> {
        self.value.as_deref()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        if let Some(value) = self.value.as_deref_mut() {
            value.for_each_identifier_mut(f);
        }
    }
}

impl AstNode for ReturnStmt {
    fn kind(&self) -> NodeKind {
        NodeKind::ReturnStmt
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.value
            .iter()
            .map(|value| value.as_node_ref())
            .collect()
    }
}
