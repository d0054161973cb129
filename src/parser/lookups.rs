use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::types::BinaryOp, lexer::tokens::TokenKind};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Relational,
    Additive,
    Multiplicative,
}

pub type BPLookup = HashMap<TokenKind, (BinaryOp, BindingPower)>;

lazy_static! {
    pub static ref BINARY_OPERATOR_LOOKUP: BPLookup = {
        let mut map = HashMap::new();

        // Logical
        map.insert(TokenKind::And, (BinaryOp::And, BindingPower::Logical));
        map.insert(TokenKind::Or, (BinaryOp::Or, BindingPower::Logical));

        // Relational
        map.insert(TokenKind::Less, (BinaryOp::Less, BindingPower::Relational));
        map.insert(TokenKind::LessEquals, (BinaryOp::LessEq, BindingPower::Relational));
        map.insert(TokenKind::Greater, (BinaryOp::Greater, BindingPower::Relational));
        map.insert(TokenKind::GreaterEquals, (BinaryOp::GreaterEq, BindingPower::Relational));
        map.insert(TokenKind::Equals, (BinaryOp::Eq, BindingPower::Relational));
        map.insert(TokenKind::NotEquals, (BinaryOp::NotEq, BindingPower::Relational));

        // Additive and multiplicative
        map.insert(TokenKind::Plus, (BinaryOp::Add, BindingPower::Additive));
        map.insert(TokenKind::Dash, (BinaryOp::Sub, BindingPower::Additive));
        map.insert(TokenKind::Star, (BinaryOp::Mul, BindingPower::Multiplicative));
        map.insert(TokenKind::Slash, (BinaryOp::Div, BindingPower::Multiplicative));
        map.insert(TokenKind::Percent, (BinaryOp::Rem, BindingPower::Multiplicative));

        map
    };
}

/// Maps an operator token to its canonical operator and binding power.
pub fn binary_operator(kind: TokenKind) -> Option<(BinaryOp, BindingPower)> {
    BINARY_OPERATOR_LOOKUP.get(&kind).copied()
}
