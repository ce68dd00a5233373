use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// partlabel: record and resolve partition label to UUID mappings.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the partition info YAML file.
    #[arg(long, global = true, env = "PARTLABEL_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the partition info file with an empty mapping if it is missing.
    Init,

    /// Print the `label:name:uuid` encoding of a partition.
    Encode {
        #[arg(long)]
        label: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        uuid: String,
    },

    /// Record an encoded `label:name:uuid` identity in the file.
    Update {
        /// Output of the enrollment step, e.g. `COS_PERSISTENT:sda4:1e2f-77aa`.
        encoded: String,
    },

    /// Print the UUID recorded for a label.
    Get { label: String },

    /// Print the label recorded for a UUID.
    LabelOf { uuid: String },

    /// Print every `label<TAB>uuid` entry, sorted by label.
    List,
}
