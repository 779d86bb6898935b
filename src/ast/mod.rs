/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The parse root, identifiers and type names
/// - declarations: Variable and function declarations
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - printer: Explicit text rendering of the tree for debug dumps
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod printer;
pub mod statements;
