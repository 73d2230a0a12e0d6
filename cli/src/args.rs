use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about, version)]
pub struct Args {
    /// Path to read the SVG file from.
    pub input: PathBuf,
}
