pub mod config;
pub mod csv_io;
pub mod error;
pub mod interface_utils;
pub mod scoring;
pub mod types;

pub use config::*;
pub use error::*;
pub use scoring::*;
pub use types::*;
