#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{
    etl::EtlEngine,
    flatten::{flatten, infer_city},
    output::render_csv,
    pipeline::FlattenPipeline,
};
pub use crate::domain::model::{City, FlatRow, VenueRecord, VenueType};
pub use crate::utils::error::{EtlError, Result};
