//! # CLI Interface
//!
//! Defines the command-line argument structure for `keyticket` using
//! `clap` derive. One subcommand per protocol step: issue a challenge,
//! create a ticket, verify it, and look inside it.

use clap::{Args, Parser, Subcommand};
use keyticket_protocol::config::DEFAULT_CHALLENGE_LENGTH;

use crate::logging::LogFormat;

/// Password-derived identity tickets.
///
/// Turns a name and a password into an Ed25519 identity, answers server
/// challenges with it, and checks the resulting tickets. Nothing is stored.
#[derive(Parser, Debug)]
#[command(
    name = "keyticket",
    about = "Create and verify password-derived identity tickets",
    version,
    propagate_version = true
)]
pub struct KeyTicketCli {
    /// Log output format.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "KEYTICKET_LOG_FORMAT",
        default_value = "pretty"
    )]
    pub log_format: LogFormat,

    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "KEYTICKET_LOG", default_value = "warn")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `keyticket` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random challenge (server side).
    Challenge(ChallengeArgs),
    /// Build an identity ticket answering a challenge (client side).
    Create(CreateArgs),
    /// Verify a ticket against a challenge. Exits 1 if it is invalid.
    Verify(VerifyArgs),
    /// Decode a ticket and print its fields as JSON. Does not verify.
    Inspect(InspectArgs),
    /// Print the public key derived from a name and password.
    Pubkey(CredentialArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `challenge` subcommand.
#[derive(Args, Debug)]
pub struct ChallengeArgs {
    /// Challenge length in bytes.
    #[arg(long, short = 'l', default_value_t = DEFAULT_CHALLENGE_LENGTH)]
    pub length: usize,
}

/// Name and password, shared by every command that derives a key.
#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Identity name.
    #[arg(long, short = 'n')]
    pub name: String,

    /// Password. Prefer the environment variable over the flag so it stays
    /// out of shell history.
    #[arg(long, short = 'p', env = "KEYTICKET_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the `create` subcommand.
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Hex-encoded challenge issued by the server.
    #[arg(long, short = 'c')]
    pub challenge: String,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Hex-encoded identity ticket.
    #[arg(long, short = 't')]
    pub ticket: String,

    /// Hex-encoded challenge the ticket should answer.
    #[arg(long, short = 'c')]
    pub challenge: String,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Hex-encoded identity ticket.
    #[arg(long, short = 't')]
    pub ticket: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        KeyTicketCli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = KeyTicketCli::try_parse_from([
            "keyticket",
            "create",
            "--name",
            "alice",
            "--password",
            "pw",
            "--challenge",
            "00ff",
        ])
        .unwrap();

        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.credentials.name, "alice");
                assert_eq!(args.credentials.password, "pw");
                assert_eq!(args.challenge, "00ff");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_challenge_default_length() {
        let cli = KeyTicketCli::try_parse_from(["keyticket", "challenge"]).unwrap();
        match cli.command {
            Commands::Challenge(args) => assert_eq!(args.length, DEFAULT_CHALLENGE_LENGTH),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_log_format() {
        let cli =
            KeyTicketCli::try_parse_from(["keyticket", "version", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_verify_requires_challenge() {
        assert!(KeyTicketCli::try_parse_from(["keyticket", "verify", "--ticket", "00"]).is_err());
    }
}
