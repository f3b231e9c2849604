use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "nova-landing",
    about = "NovaMind landing page core: waitlist capture and testimonial carousel"
)]
pub struct CliConfig {
    /// Directory holding the persisted waitlist
    #[arg(long, default_value = ".nova-landing")]
    pub storage_path: String,

    /// TOML file overriding the built-in page catalog
    #[arg(long)]
    pub catalog_file: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("storage_path", &self.storage_path)?;
        if let Some(catalog_file) = &self.catalog_file {
            validation::validate_path("catalog_file", catalog_file)?;
        }
        Ok(())
    }
}
