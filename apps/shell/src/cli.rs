use clap::{Parser, Subcommand};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Bolt Bucket: customize, save and list cars from the terminal.
#[derive(Debug, Parser)]
#[command(name = "bolt", version, about)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to `bolt.toml` in the working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every customizable feature with its options and prices.
    Features,

    /// List saved cars.
    Cars,

    /// Configure and save a new car.
    Create {
        #[arg(long)]
        name: String,

        /// Mark the car as convertible (required for soft tops).
        #[arg(long)]
        convertible: bool,

        /// Choose an option, e.g. `--pick color=blue` or `--pick 1=11`. Repeatable.
        #[arg(long = "pick", value_name = "FEATURE=OPTION")]
        picks: Vec<Pick>,
    },

    /// Change a saved car.
    Edit {
        id: String,

        /// New name; keeps the saved one when omitted.
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_name = "BOOL")]
        convertible: Option<bool>,

        #[arg(long = "pick", value_name = "FEATURE=OPTION")]
        picks: Vec<Pick>,
    },
}

/// `FEATURE=OPTION`, each side a name or a numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub feature: String,
    pub option: String,
}

impl FromStr for Pick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (feature, option) =
            s.split_once('=').ok_or_else(|| format!("expected FEATURE=OPTION, got '{s}'"))?;
        let (feature, option) = (feature.trim(), option.trim());
        if feature.is_empty() || option.is_empty() {
            return Err(format!("expected FEATURE=OPTION, got '{s}'"));
        }

        Ok(Self { feature: feature.to_owned(), option: option.to_owned() })
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.feature, self.option)
    }
}
