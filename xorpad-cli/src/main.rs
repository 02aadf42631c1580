// File:    main.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Command-line front end for the xorpad bit-mask transform.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A command-line interface for the xorpad bit-mask transform.

use clap::{Parser, Subcommand};
use log::{error, info};
use xorpad_core::{compare, crypto, render};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Render the demo message transformed with the demo key\nxorpad-cli encode\n\n# Transform an explicit message/key pair\nxorpad-cli encode --message 0x09a9d3591c6adb40 --key 0x1d381f22be58ac3a\n\n# Cross-check all transform variants, human-readable\nxorpad-cli compare\n\n# Cross-check all transform variants, as JSON\nxorpad-cli compare --json"
)]
struct Cli {
    /// The 64-bit message as hex (optional 0x prefix). Defaults to the demo literal.
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_hex_u64)]
    message: Option<u64>,

    /// The 64-bit key as hex (optional 0x prefix). Defaults to the demo literal.
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_hex_u64)]
    key: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform the message with the key and print the base64-style rendering
    Encode,
    /// Run every transform variant over the same pair and print their results
    Compare {
        /// Emit the comparison report as JSON instead of labeled hex lines
        #[arg(long)]
        json: bool,
    },
}

fn parse_hex_u64(raw: &str) -> Result<u64, String> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16)
        .map_err(|e| format!("'{raw}' is not a 64-bit hex value: {e}"))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let message = cli.message.unwrap_or(crypto::DEMO_MESSAGE);
    let key = cli.key.unwrap_or(crypto::DEMO_KEY);

    match cli.command {
        Commands::Encode => {
            info!("Transforming message {message:#018x} with key {key:#018x}.");
            let result = crypto::encrypt(message, key);
            println!("{}", render::render_base64(result));
        }
        Commands::Compare { json } => {
            info!("Cross-checking transform variants for message {message:#018x} and key {key:#018x}.");
            let report = compare::compare(message, key);

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(e) => {
                        error!("Failed to serialize the comparison report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("The descending result is {:x}", report.descending);
                println!("The ascending result is {:x}", report.ascending);
                println!("The reference result is {:x}", report.reference);
                println!();
                println!("{}", render::render_base64(report.descending));
            }

            if !report.all_agree() {
                error!("The transform variants disagree; this build is defective.");
                std::process::exit(1);
            }
        }
    }
}
