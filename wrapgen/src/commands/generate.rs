use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wrapgen_model::ModelFile;

use super::UnwrapOrExit;
use crate::ops::{self, GenerateOptions};
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the model file (defaults to ./wrapgen.toml)
    #[arg(short, long, default_value = "wrapgen.toml")]
    pub model: PathBuf,

    /// Output directory (overrides `paths.output` of the model)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let model_file = ModelFile::open(&self.model).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| model_file.output_dir());

        let report = ops::generate(
            &model_file,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
