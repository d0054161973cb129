use crate::errors::errors::ErrorImpl;

use super::{
    ast::{AstNode, Node, NodeKind, NodeRef},
    types::{BinaryOp, DeclaredType},
};

fn require_expression(node: &Node, parent: NodeKind) -> Result<(), ErrorImpl> {
    if node.kind().is_expression() {
        Ok(())
    } else {
        Err(ErrorImpl::IncompleteNode {
            kind: parent.to_string(),
        })
    }
}

// LITERALS

/// Number Expression
/// Represents an integer literal. Its name mirrors the value's text form.
#[derive(Debug, Clone, PartialEq)]
pub struct NumExp {
    value: i32,
    text: String,
}

impl NumExp {
    pub fn new(value: i32) -> Self {
        NumExp {
            value,
            text: value.to_string(),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl AstNode for NumExp {
    fn kind(&self) -> NodeKind {
        NodeKind::NumExp
    }
    fn name(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// String Expression
/// Represents a string literal with escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StrExp {
    value: String,
}

impl StrExp {
    pub fn new(value: String) -> Self {
        StrExp { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl AstNode for StrExp {
    fn kind(&self) -> NodeKind {
        NodeKind::StrExp
    }
    fn name(&self) -> Option<&str> {
        Some(&self.value)
    }
}

/// Identifier Expression
///
/// The resolved type starts unset. The parser never fills it in.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExp {
    name: String,
    resolved_type: Option<DeclaredType>,
}

impl IdentifierExp {
    pub fn new(name: String) -> Self {
        IdentifierExp {
            name,
            resolved_type: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.name
    }

    pub fn set_type(&mut self, resolved_type: DeclaredType) {
        self.resolved_type = Some(resolved_type);
    }

    pub fn resolved_type(&self) -> Option<DeclaredType> {
        self.resolved_type
    }
}

impl AstNode for IdentifierExp {
    fn kind(&self) -> NodeKind {
        NodeKind::IdentifierExp
    }
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

// COMPLEX

/// Binary Expression
/// Both operands are always present expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExp {
    op: BinaryOp,
    left: Box<Node>,
    right: Box<Node>,
}

impl BinaryExp {
    pub fn new(op: BinaryOp, left: Node, right: Node) -> Result<Self, ErrorImpl> {
        require_expression(&left, NodeKind::BinaryExp)?;
        require_expression(&right, NodeKind::BinaryExp)?;

        Ok(BinaryExp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        self.left.for_each_identifier_mut(f);
        self.right.for_each_identifier_mut(f);
    }
}

impl AstNode for BinaryExp {
    fn kind(&self) -> NodeKind {
        NodeKind::BinaryExp
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![self.left.as_node_ref(), self.right.as_node_ref()]
    }
}

/// Call Expression
/// Argument order matches the source.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExp {
    name: String,
    args: Vec<Node>,
}

impl CallExp {
    pub fn new(name: String, args: Vec<Node>) -> Result<Self, ErrorImpl> {
        for arg in args.iter() {
            require_expression(arg, NodeKind::CallExp)?;
        }

        Ok(CallExp { name, args })
    }

    pub fn called_fun_name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        for arg in self.args.iter_mut() {
            arg.for_each_identifier_mut(f);
        }
    }
}

impl AstNode for CallExp {
    fn kind(&self) -> NodeKind {
        NodeKind::CallExp
    }
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.args.iter().map(Node::as_node_ref).collect()
    }
}

/// Spawn Expression
///
/// Marks a call for deferred execution by a later stage. The wrapped call
/// is identical to the one an unmarked call would produce.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnExp {
    call: CallExp,
}

impl SpawnExp {
    pub fn new(call: CallExp) -> Self {
        SpawnExp { call }
    }

    pub fn call(&self) -> &CallExp {
        &self.call
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        self.call.for_each_identifier_mut(f);
    }
}

impl AstNode for SpawnExp {
    fn kind(&self) -> NodeKind {
        NodeKind::SpawnExp
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![NodeRef::CallExp(&self.call)]
    }
}
