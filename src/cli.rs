use std::path::PathBuf;

use clap::Parser;

use crate::patterns::PatternGroup;
use crate::types::{OutputFormat, View};

#[derive(Parser, Debug)]
#[command(
    name = "ignore-catalog",
    about = "Print built-in glob ignore patterns and binary file extensions",
    version,
    after_help = "Set RUST_LOG to override the -v verbosity filter."
)]
pub struct Args {
    /// Restrict the groups view to these pattern groups (repeatable)
    #[arg(short, long, value_enum, action = clap::ArgAction::Append)]
    pub group: Vec<PatternGroup>,

    /// Extra glob patterns layered on top of the built-in ones (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// What to print
    #[arg(long, value_enum, default_value_t = View::Groups)]
    pub view: View,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
