pub mod cli;
pub mod config;

pub use cli::Command;
pub use config::{init_logger, load_configuration};
