use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "arca")]
#[clap(about = "Cause registry service and Pareto page renderer", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (defaults to ~/arca/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
