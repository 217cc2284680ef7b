use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vora")]
#[command(version)]
#[command(about = "Shannon entropy task routing for tiered agents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default vocabulary and tier catalog to the config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Route a task and print the result as JSON
    Route {
        /// Task title
        #[arg(required_unless_present = "request")]
        title: Option<String>,

        /// Task description
        #[arg(short, long, default_value = "")]
        body: String,

        /// Manual rank override, e.g. R7
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Cost tolerance label, e.g. "Free only (Tier 5-6)"
        #[arg(short, long)]
        cost_tolerance: Option<String>,

        /// Read a {title, body, options} JSON request from a file ("-" for stdin)
        #[arg(short, long, conflicts_with_all = ["title", "difficulty", "cost_tolerance"])]
        request: Option<String>,

        /// Append the decision to the routing history
        #[arg(long)]
        record: bool,
    },

    /// Route an issue-opened event (stdin unless --file)
    Webhook {
        /// Path to the event JSON
        #[arg(short, long)]
        file: Option<String>,

        /// Append the decision to the routing history
        #[arg(long)]
        record: bool,
    },

    /// List agent tiers
    Tiers,

    /// View recorded routing decisions
    History {
        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Number of recent decisions to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Print version information
    Version,
}
