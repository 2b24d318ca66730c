//! `shop-catalog overnight` subcommand

use std::path::PathBuf;

use clap::Args;

use crate::config::CatalogConfig;
use crate::services::CatalogLoader;
use crate::types::OvernightInfo;

/// Estimate overnight stays for a single start time or an availability file
#[derive(Args, Debug)]
pub struct OvernightArgs {
    /// Start time (HH:MM)
    #[arg(long, requires = "duration", conflicts_with = "availability")]
    pub start: Option<String>,

    /// Service duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// Closing time (HH:MM, default from config)
    #[arg(long)]
    pub close: Option<String>,

    /// Availability JSON file; every slot is annotated
    #[arg(long, value_name = "FILE", required_unless_present = "start")]
    pub availability: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl OvernightArgs {
    pub fn run(self, config: &CatalogConfig) -> anyhow::Result<()> {
        let calculator = config.overnight_calculator();
        let close = self.close.as_deref().unwrap_or(&config.business_close);

        if let Some(path) = &self.availability {
            let window = CatalogLoader::load_availability(path)?;
            let estimates = calculator.annotate_slots(&window, close)?;

            if self.json {
                println!("{}", serde_json::to_string_pretty(&estimates)?);
                return Ok(());
            }
            for estimate in &estimates {
                println!(
                    "{}-{}  techs {:>2}  {}",
                    estimate.slot.start,
                    estimate.slot.end,
                    estimate.slot.available_techs,
                    describe(estimate.overnight)
                );
            }
            return Ok(());
        }

        let (Some(start), Some(duration)) = (self.start.as_deref(), self.duration) else {
            anyhow::bail!("Provide --start and --duration, or --availability");
        };
        let estimate = calculator.estimate_str(start, duration, close)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        } else {
            println!("{}", describe(estimate.info));
        }
        Ok(())
    }
}

fn describe(info: OvernightInfo) -> String {
    if info.overnight {
        format!("overnight, {} days", info.estimated_days)
    } else {
        "same day".to_string()
    }
}
