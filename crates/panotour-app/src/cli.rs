//! CLI definitions.

use clap::{Parser, Subcommand};

/// Panotour command line interface.
#[derive(Debug, Parser)]
#[command(name = "panotour", about = "Virtual tour platform services", version)]
pub struct Cli {
    /// Log level when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the bearer-token auth service.
    Serve {
        /// Override the listen host.
        #[arg(long)]
        host: Option<String>,

        /// Override the listen port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Mint a bearer token for a user ID using the configured secret.
    Token {
        /// User ID the token identifies.
        user_id: String,
    },

    /// Walk the sample tour against the in-memory backend.
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["panotour", "serve", "--port", "4000"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(4000));
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_token() {
        let cli = Cli::parse_from(["panotour", "token", "user-9"]);
        match cli.command {
            Commands::Token { user_id } => assert_eq!(user_id, "user-9"),
            _ => panic!("expected token"),
        }
    }

    #[test]
    fn test_default_log_level() {
        let cli = Cli::parse_from(["panotour", "serve"]);
        assert_eq!(cli.log_level, "info");
    }
}
