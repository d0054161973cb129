/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed node enum, node kinds, and the common node trait
/// - declarations: Program, variable, parameter-list and function declarations
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for block and return statements
/// - types: Declared types and binary operators
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
