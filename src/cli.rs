use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CI compliance gate for dependency licenses and vulnerability ignore entries
#[derive(Parser, Debug)]
#[command(name = "compliance-gate")]
#[command(version)]
#[command(
    about = "Fail CI on unapproved dependency licenses or stale vulnerability ignore entries",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./compliance-gate.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare installed dependency licenses against the approved list
    Licenses {
        /// Approved dependency file (defaults to .approved-dep.csv)
        #[arg(long, value_name = "PATH")]
        approved_file: Option<PathBuf>,

        /// Also write the findings as JSON to this file
        #[arg(long, value_name = "PATH")]
        json_report: Option<PathBuf>,
    },

    /// Validate the reason and expiry of every vulnerability ignore entry
    Ignores {
        /// Maximum number of days an ignore entry may extend into the future
        #[arg(long, value_name = "N")]
        max_days: u32,

        /// Ignore file (defaults to .trivyignore)
        #[arg(long, value_name = "PATH")]
        ignore_file: Option<PathBuf>,

        /// Warn about entries expiring more than N days from now (defaults to 30)
        #[arg(long, value_name = "N")]
        warn_days: Option<u32>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
