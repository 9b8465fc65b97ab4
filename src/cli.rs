//! CLI struct definitions for the gith-ub command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use crate::plugins::coder::ContemplationLevel;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "gith-ub",
    version = env!("CARGO_PKG_VERSION"),
    about = "G.I.T.H.U.B. - The Existential Code Companion. Your code has feelings too. 🧘"
)]
pub(crate) struct Cli {
    /// Seed for reproducible answers (overrides GITH_UB_SEED and the config file).
    #[clap(long, global = true)]
    pub seed: Option<u64>,
    /// Path to a gith-ub.toml configuration file.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Skip the welcome panel.
    #[clap(long, short = 'q', global = true)]
    pub quiet: bool,
    /// Disable colored output.
    #[clap(long, global = true)]
    pub no_color: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug)]
pub(crate) struct AnalyzeCli {
    /// Source file to contemplate.
    pub file: PathBuf,
    /// Depth of contemplation (defaults to the configured level).
    #[clap(long, short = 'l', value_enum)]
    pub level: Option<ContemplationLevel>,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub(crate) struct AskCli {
    /// The question for the Oracle.
    pub question: String,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze a file for its existential implications
    Analyze(AnalyzeCli),
    /// Generate a philosophical commit message
    Commit {
        /// Descriptions of the changes made
        changes: Vec<String>,
    },
    /// Take a meditation break
    Meditate,
    /// Ask the Oracle a question
    Ask(AskCli),
    /// Start a philosophical dialogue
    Philosopher,
    /// Show what every agent can do
    Demo,
    /// Receive a daily affirmation
    Affirm,
    /// Suggest a breathing exercise
    Breathe {
        /// What you are going through (e.g. "stuck debugging")
        situation: Option<String>,
    },
    /// Ask the Oracle about the future
    Predict {
        /// 'near', 'far' or anything else for cosmic
        #[clap(long, short = 't', default_value = "near")]
        timeframe: String,
    },
    /// Reveal the hidden meaning of a code snippet
    Reveal {
        /// The snippet to interpret
        snippet: String,
    },
    /// Find the deeper meaning in a bug
    Bug {
        /// Description of the bug or error
        description: String,
    },
    /// Calculate the karma of a source file
    Karma {
        /// Source file to judge
        file: PathBuf,
    },
    /// Contemplate the patterns and complexity of a source file
    Contemplate {
        /// Source file to contemplate
        file: PathBuf,
    },
    /// Suggest a more philosophical variable name
    Rename {
        /// The current variable name
        name: String,
    },
    /// Receive zen wisdom
    Zen {
        /// What you are going through (e.g. "overwhelmed by complex code")
        situation: Option<String>,
    },
    /// Guidance from the Oracle and the Philosopher
    Guide {
        /// What you are going through (e.g. "stuck and frustrated")
        situation: String,
    },
    /// Print the schema of every agent as JSON
    Capabilities,
}
