use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use wrapgen_model::ModelFile;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the model file (defaults to ./wrapgen.toml)
    #[arg(short, long, default_value = "wrapgen.toml")]
    pub model: PathBuf,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let model_file = ModelFile::open(&self.model).unwrap_or_exit();
        let report = ops::list(&model_file)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode listing")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
