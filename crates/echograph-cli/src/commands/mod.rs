pub mod recommend;
pub mod validate_config;
