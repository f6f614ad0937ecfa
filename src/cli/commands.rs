// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (8-32)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(8..=32))]
        length: Option<u8>,

        /// Include symbols even if the configured default leaves them out
        #[arg(long, overrides_with = "no_symbols")]
        symbols: bool,

        /// Leave symbols out of the character pool
        #[arg(long, overrides_with = "symbols")]
        no_symbols: bool,

        /// Include numbers even if the configured default leaves them out
        #[arg(long, overrides_with = "no_numbers")]
        numbers: bool,

        /// Leave numbers out of the character pool
        #[arg(long, overrides_with = "numbers")]
        no_numbers: bool,

        /// Include uppercase letters even if the configured default leaves them out
        #[arg(long, overrides_with = "no_uppercase")]
        uppercase: bool,

        /// Leave uppercase letters out of the character pool
        #[arg(long, overrides_with = "uppercase")]
        no_uppercase: bool,

        /// Use exactly these characters instead of the character classes
        #[arg(long)]
        custom: Option<String>,

        /// Number of passwords to generate in a row
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        count: u16,

        /// Copy the newest password to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score an existing password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive menu (default)
    Interactive,
}
