/// AST (Abstract Syntax Tree) module
/// Contains the node model produced by the parser
///
/// Submodules:
/// - ast: Node definitions, constructors and the generic kind/children/value view
pub mod ast;
