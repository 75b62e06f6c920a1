use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use drift_core::io::load_grid;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let grid = load_grid(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", grid.width(), grid.height());
    println!("Pixels:      {}", grid.width() * grid.height());

    Ok(())
}
