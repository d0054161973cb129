//! Unit tests for the AST node model.
//!
//! These cover construction contracts (which constructions are refused),
//! the per-kind child layout exposed through [`AstNode`], and the single
//! mutable slot on identifiers.

use std::rc::Rc;

use crate::{errors::errors::ErrorImpl, Position};

use super::{
    ast::{AstNode, Node, NodeKind, NodeRef},
    declarations::{Decl, FunDecl, Program, VarDecl, VarParamDecl},
    expressions::{BinaryExp, CallExp, IdentifierExp, NumExp, SpawnExp, StrExp},
    statements::{CompoundStmt, ReturnStmt},
    types::{BinaryOp, DeclaredType},
};

fn pos() -> Position {
    Position(0, Rc::new("test.lang".to_string()))
}

fn num(value: i32) -> Node {
    Node::NumExp(NumExp::new(value))
}

fn ident(name: &str) -> Node {
    Node::IdentifierExp(IdentifierExp::new(name.to_string()))
}

fn kinds(children: Vec<NodeRef<'_>>) -> Vec<NodeKind> {
    children.iter().map(|child| child.kind()).collect()
}

#[test]
fn test_num_exp_name_mirrors_value() {
    let node = num(-17);

    assert_eq!(node.kind(), NodeKind::NumExp);
    assert_eq!(node.name(), Some("-17"));
    assert!(node.children().is_empty());
}

#[test]
fn test_str_exp_name_is_literal_text() {
    let node = Node::StrExp(StrExp::new("hello".to_string()));

    assert_eq!(node.kind(), NodeKind::StrExp);
    assert_eq!(node.name(), Some("hello"));
}

#[test]
fn test_identifier_type_starts_unset() {
    let mut identifier = IdentifierExp::new("x".to_string());
    assert_eq!(identifier.resolved_type(), None);

    identifier.set_type(DeclaredType::Int);
    assert_eq!(identifier.resolved_type(), Some(DeclaredType::Int));
    assert_eq!(identifier.identifier(), "x");
}

#[test]
fn test_binary_exp_has_two_ordered_children() {
    let exp = BinaryExp::new(BinaryOp::Sub, ident("a"), num(1)).unwrap();

    assert_eq!(exp.op().symbol(), "-");
    assert_eq!(
        kinds(exp.children()),
        vec![NodeKind::IdentifierExp, NodeKind::NumExp]
    );
    assert_eq!(exp.left().name(), Some("a"));
    assert_eq!(exp.right().name(), Some("1"));
}

#[test]
fn test_binary_exp_rejects_error_operand() {
    let result = BinaryExp::new(BinaryOp::Add, num(1), Node::Error);

    assert_eq!(
        result.unwrap_err(),
        ErrorImpl::IncompleteNode {
            kind: "BinaryExp".to_string()
        }
    );
    assert!(BinaryExp::new(BinaryOp::Add, Node::Error, num(1)).is_err());
}

#[test]
fn test_binary_exp_rejects_non_expression_operand() {
    let block = Node::CompoundStmt(CompoundStmt::new(vec![]));

    assert!(BinaryExp::new(BinaryOp::Mul, block, num(2)).is_err());
}

#[test]
fn test_call_exp_preserves_argument_order() {
    let call = CallExp::new("f".to_string(), vec![num(1), ident("y"), num(3)]).unwrap();

    assert_eq!(call.called_fun_name(), "f");
    assert_eq!(call.name(), Some("f"));
    let names: Vec<_> = call.children().iter().map(|c| c.name().unwrap().to_string()).collect();
    assert_eq!(names, vec!["1", "y", "3"]);
}

#[test]
fn test_call_exp_rejects_error_argument() {
    assert!(CallExp::new("f".to_string(), vec![num(1), Node::Error]).is_err());
}

#[test]
fn test_spawn_exp_wraps_call() {
    let call = CallExp::new("worker".to_string(), vec![num(1)]).unwrap();
    let spawn = SpawnExp::new(call.clone());

    assert_eq!(spawn.kind(), NodeKind::SpawnExp);
    assert_eq!(kinds(spawn.children()), vec![NodeKind::CallExp]);
    assert_eq!(spawn.call(), &call);
}

#[test]
fn test_var_decl_rejects_void() {
    let result = VarDecl::new("x".to_string(), DeclaredType::Void, None, pos());

    assert_eq!(result.unwrap_err(), ErrorImpl::VoidVariableType);
}

#[test]
fn test_var_decl_records_literal_value() {
    let decl = VarDecl::new("x".to_string(), DeclaredType::Int, Some(num(5)), pos()).unwrap();

    assert_eq!(decl.var_name(), "x");
    assert_eq!(decl.var_type(), DeclaredType::Int);
    assert_eq!(decl.value(), Some(5));
    assert_eq!(kinds(decl.children()), vec![NodeKind::NumExp]);
}

#[test]
fn test_var_decl_without_initializer_has_no_children() {
    let decl = VarDecl::new("s".to_string(), DeclaredType::Str, None, pos()).unwrap();

    assert_eq!(decl.value(), None);
    assert!(decl.initializer().is_none());
    assert!(decl.children().is_empty());
}

#[test]
fn test_var_decl_value_only_for_number_literals() {
    let init = Node::BinaryExp(BinaryExp::new(BinaryOp::Add, num(1), num(2)).unwrap());
    let decl = VarDecl::new("x".to_string(), DeclaredType::Int, Some(init), pos()).unwrap();

    assert_eq!(decl.value(), None);
    assert_eq!(kinds(decl.children()), vec![NodeKind::BinaryExp]);
}

#[test]
fn test_var_decl_rejects_error_initializer() {
    let result = VarDecl::new("x".to_string(), DeclaredType::Int, Some(Node::Error), pos());

    assert!(matches!(result, Err(ErrorImpl::IncompleteNode { .. })));
}

#[test]
fn test_fun_decl_has_params_and_body() {
    let param = VarDecl::new("a".to_string(), DeclaredType::Int, None, pos()).unwrap();
    let ret = ReturnStmt::new(Some(ident("a")), pos()).unwrap();
    let fun = FunDecl::new(
        "id".to_string(),
        DeclaredType::Int,
        VarParamDecl::new(vec![param]),
        CompoundStmt::new(vec![Node::ReturnStmt(ret)]),
        pos(),
    );

    assert_eq!(fun.name(), Some("id"));
    assert_eq!(fun.return_type(), DeclaredType::Int);
    assert_eq!(
        kinds(fun.children()),
        vec![NodeKind::VarParamDecl, NodeKind::CompoundStmt]
    );
    assert_eq!(fun.params().len(), 1);
    assert_eq!(fun.body().len(), 1);
}

#[test]
fn test_return_stmt_bare_and_valued() {
    let bare = ReturnStmt::new(None, pos()).unwrap();
    assert!(bare.value().is_none());
    assert!(bare.children().is_empty());

    let valued = ReturnStmt::new(Some(num(0)), pos()).unwrap();
    assert_eq!(kinds(valued.children()), vec![NodeKind::NumExp]);

    assert!(ReturnStmt::new(Some(Node::Error), pos()).is_err());
}

#[test]
fn test_program_children_are_declarations() {
    let var = VarDecl::new("x".to_string(), DeclaredType::Int, None, pos()).unwrap();
    let program = Program::new(vec![Decl::Var(var), Decl::Error]);

    assert_eq!(program.kind(), NodeKind::Program);
    assert_eq!(
        kinds(program.children()),
        vec![NodeKind::VarDecl, NodeKind::Error]
    );
    assert_eq!(program.error_count(), 1);
    assert_eq!(program.valid_decls().count(), 1);
}

#[test]
fn test_node_ref_matches_owned_node() {
    let node = Node::CallExp(CallExp::new("g".to_string(), vec![num(4)]).unwrap());
    let view = NodeRef::from(&node);

    assert_eq!(view.kind(), node.kind());
    assert_eq!(view.name(), node.name());
    assert_eq!(view.children().len(), 1);
}

#[test]
fn test_node_kind_categories() {
    assert!(NodeKind::SpawnExp.is_expression());
    assert!(!NodeKind::Error.is_expression());
    assert!(NodeKind::FunDecl.is_declaration());
    assert!(NodeKind::ReturnStmt.is_statement());
}

#[test]
fn test_for_each_identifier_mut_reaches_nested_identifiers() {
    let sum = BinaryExp::new(BinaryOp::Add, ident("a"), ident("b")).unwrap();
    let call = CallExp::new("f".to_string(), vec![Node::BinaryExp(sum)]).unwrap();
    let mut node = Node::SpawnExp(SpawnExp::new(call));

    let mut seen = Vec::new();
    node.for_each_identifier_mut(&mut |identifier: &mut IdentifierExp| {
        seen.push(identifier.identifier().to_string());
        identifier.set_type(DeclaredType::Int);
    });

    assert_eq!(seen, vec!["a", "b"]);

    let Node::SpawnExp(spawn) = &node else {
        panic!("expected spawn");
    };
    let Node::BinaryExp(sum) = &spawn.call().args()[0] else {
        panic!("expected binary expression");
    };
    let Node::IdentifierExp(a) = sum.left() else {
        panic!("expected identifier");
    };
    assert_eq!(a.resolved_type(), Some(DeclaredType::Int));
}
