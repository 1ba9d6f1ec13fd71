use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wrapgen_model::ModelFile;

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model file (defaults to ./wrapgen.toml)
    #[arg(short, long, default_value = "wrapgen.toml")]
    pub model: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let model_file = ModelFile::open(&self.model).unwrap_or_exit();

        let report = ops::check(&model_file)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
