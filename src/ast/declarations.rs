use crate::{errors::errors::ErrorImpl, Position};

use super::{
    ast::{AstNode, Node, NodeKind, NodeRef},
    expressions::IdentifierExp,
    statements::CompoundStmt,
    types::DeclaredType,
};

/// A top-level declaration: the only things a [`Program`] holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Fun(FunDecl),
    Error,
}

impl Decl {
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Decl::Var(decl) => NodeRef::VarDecl(decl),
            Decl::Fun(decl) => NodeRef::FunDecl(decl),
            Decl::Error => NodeRef::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Decl::Error)
    }
}

impl From<VarDecl> for Decl {
    fn from(decl: VarDecl) -> Self {
        Decl::Var(decl)
    }
}

impl From<FunDecl> for Decl {
    fn from(decl: FunDecl) -> Self {
        Decl::Fun(decl)
    }
}

/// Program Declaration
/// The root of every parsed tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    decls: Vec<Decl>,
}

impl Program {
    pub fn new(decls: Vec<Decl>) -> Self {
        Program { decls }
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// Declarations that parsed successfully.
    pub fn valid_decls(&self) -> impl Iterator<Item = &Decl> {
        self.decls.iter().filter(|decl| !decl.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.decls.iter().filter(|decl| decl.is_error()).count()
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        for decl in self.decls.iter_mut() {
            match decl {
                Decl::Var(decl) => decl.for_each_identifier_mut(f),
                Decl::Fun(decl) => decl.for_each_identifier_mut(f),
                Decl::Error => {}
            }
        }
    }
}

impl AstNode for Program {
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.decls.iter().map(Decl::as_node_ref).collect()
    }
}

/// Variable Declaration
/// `var NAME : TYPE (= EXPR)?;` and function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    name: String,
    var_type: DeclaredType,
    value: Option<i32>,
    initializer: Option<Box<Node>>,
    position: Position,
}

impl VarDecl {
    /// Fails for `void` variables and for initializers that are not expressions.
    pub fn new(
        name: String,
        var_type: DeclaredType,
        initializer: Option<Node>,
        position: Position,
    ) -> Result<Self, ErrorImpl> {
        if var_type.is_void() {
            return Err(ErrorImpl::VoidVariableType);
        }

        if let Some(initializer) = &initializer {
            if !initializer.kind().is_expression() {
                return Err(ErrorImpl::IncompleteNode {
                    kind: NodeKind::VarDecl.to_string(),
                });
            }
        }

        let value = match &initializer {
            Some(Node::NumExp(num)) => Some(num.value()),
            _ => None,
        };

        Ok(VarDecl {
            name,
            var_type,
            value,
            initializer: initializer.map(Box::new),
            position,
        })
    }

    pub fn var_name(&self) -> &str {
        &self.name
    }

    pub fn var_type(&self) -> DeclaredType {
        self.var_type
    }

    /// The integer value when the initializer is a plain number literal.
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn initializer(&self) -> Option<&Node> {
        self.initializer.as_deref()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        if let Some(initializer) = self.initializer.as_deref_mut() {
            initializer.for_each_identifier_mut(f);
        }
    }
}

impl AstNode for VarDecl {
    fn kind(&self) -> NodeKind {
        NodeKind::VarDecl
    }
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.initializer
            .iter()
            .map(|initializer| initializer.as_node_ref())
            .collect()
    }
}

/// Parameter list of a function declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VarParamDecl {
    params: Vec<VarDecl>,
}

impl VarParamDecl {
    pub fn new(params: Vec<VarDecl>) -> Self {
        VarParamDecl { params }
    }

    pub fn params(&self) -> &[VarDecl] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl AstNode for VarParamDecl {
    fn kind(&self) -> NodeKind {
        NodeKind::VarParamDecl
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        self.params.iter().map(NodeRef::VarDecl).collect()
    }
}

/// Function Declaration
/// Always exactly two children: the parameter list and the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunDecl {
    name: String,
    return_type: DeclaredType,
    params: VarParamDecl,
    body: CompoundStmt,
    position: Position,
}

impl FunDecl {
    pub fn new(
        name: String,
        return_type: DeclaredType,
        params: VarParamDecl,
        body: CompoundStmt,
        position: Position,
    ) -> Self {
        FunDecl {
            name,
            return_type,
            params,
            body,
            position,
        }
    }

    pub fn fun_name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> DeclaredType {
        self.return_type
    }

    pub fn params(&self) -> &VarParamDecl {
        &self.params
    }

    pub fn body(&self) -> &CompoundStmt {
        &self.body
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn for_each_identifier_mut(&mut self, f: &mut dyn FnMut(&mut IdentifierExp)) {
        self.body.for_each_identifier_mut(f);
    }
}

impl AstNode for FunDecl {
    fn kind(&self) -> NodeKind {
        NodeKind::FunDecl
    }
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
    fn children(&self) -> Vec<NodeRef<'_>> {
        vec![
            NodeRef::VarParamDecl(&self.params),
            NodeRef::CompoundStmt(&self.body),
        ]
    }
}
