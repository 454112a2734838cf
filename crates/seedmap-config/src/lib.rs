//! Configuration for the seedmap tool.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, DimensionSetting, OutputConfig, ShadeSetting, ViewConfig,
    WorldConfig, default_config_dir,
};
pub use error::ConfigError;
