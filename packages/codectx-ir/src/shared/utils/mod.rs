pub mod tree_sitter;
