// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # KeyTicket CLI
//!
//! Entry point for the `keyticket` binary. Parses CLI arguments, initializes
//! logging, and runs one protocol step per invocation.
//!
//! - `challenge`: generate a random challenge
//! - `create`:    build a ticket from a name, password and challenge
//! - `verify`:    check a ticket against a challenge
//! - `inspect`:   print a ticket's fields as JSON
//! - `pubkey`:    print the public key for a name and password
//! - `version`:   print build version information
//!
//! Binary data crosses the command line as lowercase hex. Results go to
//! stdout, logs to stderr.

mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use keyticket_protocol::identity::{derive_keypair, generate_random_challenge};
use keyticket_protocol::ticket::{
    create_identity_ticket, verify_identity_ticket_detailed, IdentityTicket,
};

use cli::{Commands, KeyTicketCli};

fn main() -> Result<ExitCode> {
    let cli = KeyTicketCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Challenge(args) => issue_challenge(args),
        Commands::Create(args) => create_ticket(args),
        Commands::Verify(args) => verify_ticket(args),
        Commands::Inspect(args) => inspect_ticket(args),
        Commands::Pubkey(args) => print_public_key(args),
        Commands::Version => {
            print_version();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn issue_challenge(args: cli::ChallengeArgs) -> Result<ExitCode> {
    ensure!(args.length > 0, "challenge length must be at least 1 byte");

    let challenge = generate_random_challenge(args.length);
    tracing::info!(length = challenge.len(), "challenge generated");

    println!("{}", hex::encode(challenge));
    Ok(ExitCode::SUCCESS)
}

fn create_ticket(args: cli::CreateArgs) -> Result<ExitCode> {
    let challenge = parse_hex("challenge", &args.challenge)?;
    let ticket = create_identity_ticket(
        &args.credentials.name,
        &args.credentials.password,
        &challenge,
    );

    tracing::info!(
        name = %args.credentials.name,
        ticket_len = ticket.len(),
        "identity ticket created"
    );

    println!("{}", ticket.to_hex());
    Ok(ExitCode::SUCCESS)
}

/// Prints `valid <public key>` or `invalid: <reason>`. An invalid ticket is
/// not an error of the tool itself, so it is reported through the exit code.
fn verify_ticket(args: cli::VerifyArgs) -> Result<ExitCode> {
    let ticket = parse_hex("ticket", &args.ticket)?;
    let challenge = parse_hex("challenge", &args.challenge)?;

    match verify_identity_ticket_detailed(&ticket, &challenge) {
        Ok(decoded) => {
            tracing::info!(
                name = %decoded.name(),
                public_key = %decoded.public_key(),
                "ticket accepted"
            );
            println!("valid {}", decoded.public_key());
            Ok(ExitCode::SUCCESS)
        }
        Err(rejection) => {
            tracing::warn!(reason = %rejection, "ticket rejected");
            println!("invalid: {}", rejection);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn inspect_ticket(args: cli::InspectArgs) -> Result<ExitCode> {
    let ticket = IdentityTicket::from_hex(args.ticket.trim()).context("failed to parse ticket")?;
    let decoded = ticket.decode().context("failed to decode ticket")?;

    let json = serde_json::to_string_pretty(&decoded.summary())
        .context("failed to serialize ticket summary")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

fn print_public_key(args: cli::CredentialArgs) -> Result<ExitCode> {
    let keypair = derive_keypair(&args.name, &args.password);
    println!("{}", keypair.public_key());
    Ok(ExitCode::SUCCESS)
}

/// Prints version information for the binary and the protocol.
fn print_version() {
    println!("keyticket {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", keyticket_protocol::config::PROTOCOL_VERSION);
}

fn parse_hex(what: &str, input: &str) -> Result<Vec<u8>> {
    hex::decode(input.trim()).with_context(|| format!("{} is not valid hex", what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_trims_whitespace() {
        assert_eq!(parse_hex("challenge", " 00ff\n").unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_parse_hex_reports_field() {
        let err = parse_hex("ticket", "zz").unwrap_err();
        assert!(err.to_string().contains("ticket"));
    }
}
