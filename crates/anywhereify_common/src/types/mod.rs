pub mod dependency_snapshot;
pub mod export_node;
pub mod export_tree;
pub mod package_json;
pub mod source;
pub mod source_joiner;
