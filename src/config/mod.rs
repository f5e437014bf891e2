pub mod pool_file;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "santa-draw")]
#[command(about = "Draw Secret Santa assignments for a pool of participants")]
pub struct CliConfig {
    #[arg(long, default_value = "santa.toml", help = "Pool definition file")]
    pub pool_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Exchange year, defaults to the current year")]
    pub year: Option<i32>,

    #[arg(long, help = "Maximum shuffle attempts before giving up")]
    pub max_attempts: Option<u32>,

    #[arg(long, help = "Fixed RNG seed for a reproducible draw")]
    pub seed: Option<u64>,

    #[arg(long, help = "Also export the assignment list as CSV")]
    pub export_csv: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("pool_file", &self.pool_file)?;
        validation::validate_path("output_path", &self.output_path)?;

        if let Some(max_attempts) = self.max_attempts {
            validation::validate_positive_number("max_attempts", max_attempts as usize, 1)?;
        }

        Ok(())
    }
}
