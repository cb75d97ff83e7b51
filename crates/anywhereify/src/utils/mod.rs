pub mod load_config;
pub mod normalize_options;
