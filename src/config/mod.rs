pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "input.json";
pub const DEFAULT_OUTPUT_PATH: &str = "flattened_output.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "venue-flatten")]
#[command(about = "Flatten a JSON array of venues into a fixed-column CSV table")]
pub struct CliConfig {
    /// JSON file holding an array of venue objects; its name also picks the city
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    #[arg(skip = String::from(DEFAULT_OUTPUT_PATH))]
    pub output_path: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_path", &self.output_path)
    }
}
