pub mod config;
pub mod error;
pub mod types;

pub use config::{ClientConfig, GlobalConfig, config_path, load_config, parse_config_str, save_config};
pub use error::{Error, Result};
pub use types::*;
