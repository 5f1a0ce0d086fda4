//! Arguments shared by the stage binaries

use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::logging::init_logging;
use crate::{Result, Settings};

/// Options every stage accepts
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// JSON settings file; fields left out keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory input and output files are resolved against
    #[arg(short = 'C', long)]
    pub work_dir: Option<PathBuf>,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialise logging and load settings with command line overrides
    pub fn init(&self) -> Result<Settings> {
        init_logging(self.verbose);

        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(dir) = &self.work_dir {
            settings = settings.with_work_dir(dir);
        }
        Ok(settings)
    }
}
