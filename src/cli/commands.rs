// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length (requests below 8 are raised to 8)
        #[arg(long, short)]
        length: Option<usize>,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Analyze password strength
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Check a password against the breach corpus
    Breach {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },

    /// Derive a PBKDF2 hash for storage
    Hash {
        /// Password to hash
        #[arg(required = true)]
        password: String,

        /// Iteration count (requests below 10000 are raised to it)
        #[arg(long)]
        iterations: Option<u32>,
    },
}
