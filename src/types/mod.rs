//! Core types module

mod config;


pub use config::{
    ClientConfig, ClientConfigBuilder, ENV_DEFAULT_TIMEOUT, ENV_OUTPUT, OutputFormat, Verbosity,
};
