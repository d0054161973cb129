use std::fmt::Display;

use super::{
    declarations::{FunDecl, Program, VarDecl, VarParamDecl},
    expressions::{BinaryExp, CallExp, IdentifierExp, NumExp, SpawnExp, StrExp},
    statements::{CompoundStmt, ReturnStmt},
};

/// Node Kinds
///
/// The closed set of constructs a tree can contain.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Program,
    VarDecl,
    VarParamDecl,
    FunDecl,
    CompoundStmt,
    ReturnStmt,
    BinaryExp,
    CallExp,
    SpawnExp,
    IdentifierExp,
    NumExp,
    StrExp,
    Error,
}

impl NodeKind {
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::BinaryExp
                | NodeKind::CallExp
                | NodeKind::SpawnExp
                | NodeKind::IdentifierExp
                | NodeKind::NumExp
                | NodeKind::StrExp
        )
    }

    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::Program | NodeKind::VarDecl | NodeKind::VarParamDecl | NodeKind::FunDecl
        )
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, NodeKind::CompoundStmt | NodeKind::ReturnStmt)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Node Trait
///
/// The view every node shares: its kind, its optional name, and its
/// children in their fixed order. Anything variant-specific lives on the
/// concrete node structs.
pub trait AstNode {
    fn kind(&self) -> NodeKind;
    /// Identifier, function name or literal text, depending on the kind.
    fn name(&self) -> Option<&str> {
        None
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        Vec::new()
    }
}

/// An owned tree node.
///
/// `Error` is the sentinel for "no valid construct was parsed here".
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    VarDecl(VarDecl),
    VarParamDecl(VarParamDecl),
    FunDecl(FunDecl),
    CompoundStmt(CompoundStmt),
    ReturnStmt(ReturnStmt),
    BinaryExp(BinaryExp),
    CallExp(CallExp),
    SpawnExp(SpawnExp),
    IdentifierExp(IdentifierExp),
    NumExp(NumExp),
    StrExp(StrExp),
    Error,
}

/// A borrowed view of any node, used for generic traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    VarDecl(&'a VarDecl),
    VarParamDecl(&'a VarParamDecl),
    FunDecl(&'a FunDecl),
    CompoundStmt(&'a CompoundStmt),
    ReturnStmt(&'a ReturnStmt),
    BinaryExp(&'a BinaryExp),
    CallExp(&'a CallExp),
    SpawnExp(&'a SpawnExp),
    IdentifierExp(&'a IdentifierExp),
    NumExp(&'a NumExp),
    StrExp(&'a StrExp),
    Error,
}

macro_rules! dispatch {
    ($value:expr, $enum:ident, $node:ident => $body:expr, $error:expr) => {
        match $value {
            $enum::Program($node) => $body,
            $enum::VarDecl($node) => $body,
            $enum::VarParamDecl($node) => $body,
            $enum::FunDecl($node) => $body,
            $enum::CompoundStmt($node) => $body,
            $enum::ReturnStmt($node) => $body,
            $enum::BinaryExp($node) => $body,
            $enum::CallExp($node) => $body,
            $enum::SpawnExp($node) => $body,
            $enum::IdentifierExp($node) => $body,
            $enum::NumExp($node) => $body,
            $enum::StrExp($node) => $body,
            $enum::Error => $error,
        }
    };
}

impl Node {
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Program(node) => NodeRef::Program(node),
            Node::VarDecl(node) => NodeRef::VarDecl(node),
            Node::VarParamDecl(node) => NodeRef::VarParamDecl(node),
            Node::FunDecl(node) => NodeRef::FunDecl(node),
            Node::CompoundStmt(node) => NodeRef::CompoundStmt(node),
            Node::ReturnStmt(node) => NodeRef::ReturnStmt(node),
            Node::BinaryExp(node) => NodeRef::BinaryExp(node),
            Node::CallExp(node) => NodeRef::CallExp(node),
            Node::SpawnExp(node) => NodeRef::SpawnExp(node),
            Node::IdentifierExp(node) => NodeRef::IdentifierExp(node),
            Node::NumExp(node) => NodeRef::NumExp(node),
            Node::StrExp(node) => NodeRef::StrExp(node),
            Node::Error => NodeRef::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Node::Error)
    }

    /// Visits every identifier in this subtree, allowing its resolved type
    /// to be filled in. Nothing else in the tree can be changed this way.
    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        match self {
            Node::Program(node) => node.for_each_identifier_mut(f),
            Node::VarDecl(node) => node.for_each_identifier_mut(f),
            Node::FunDecl(node) => node.for_each_identifier_mut(f),
            Node::CompoundStmt(node) => node.for_each_identifier_mut(f),
            Node::ReturnStmt(node) => node.for_each_identifier_mut(f),
            Node::BinaryExp(node) => node.for_each_identifier_mut(f),
            Node::CallExp(node) => node.for_each_identifier_mut(f),
            Node::SpawnExp(node) => node.for_each_identifier_mut(f),
            Node::IdentifierExp(node) => f(node),
            Node::VarParamDecl(_) | Node::NumExp(_) | Node::StrExp(_) | Node::Error => {}
        }
    }
}

impl AstNode for Node {
    fn kind(&self) -> NodeKind {
        dispatch!(self, Node, node => node.kind(), NodeKind::Error)
    }
    fn name(&self) -> Option<&str> {
        dispatch!(self, Node, node => node.name(), None)
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        dispatch!(self, Node, node => node.children(), Vec::new())
    }
}

impl NodeRef<'_> {
    pub fn is_error(&self) -> bool {
        matches!(self, NodeRef::Error)
    }
}

impl AstNode for NodeRef<'_> {
    fn kind(&self) -> NodeKind {
        dispatch!(self, NodeRef, node => node.kind(), NodeKind::Error)
    }
    fn name(&self) -> Option<&str> {
        dispatch!(self, NodeRef, node => node.name(), None)
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        dispatch!(self, NodeRef, node => node.children(), Vec::new())
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        node.as_node_ref()
    }
}
