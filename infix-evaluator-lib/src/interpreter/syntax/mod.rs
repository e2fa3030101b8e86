pub mod expression_tree;
pub mod serialized;
pub(crate) mod syntax_visitor;
