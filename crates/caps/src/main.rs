//! caps - Entry Point
//!
//! Binary entry point for the caps HTTP server. Lives in the facade crate so
//! the provider registrations are always linked.

// Force-link caps-providers to ensure linkme registrations are included
extern crate caps_providers;

use caps_application::providers::list_capability_providers;
use caps_server::run_server;
use clap::Parser;
use std::path::PathBuf;

/// Command line interface for caps
#[derive(Parser, Debug)]
#[command(name = "caps")]
#[command(about = "Capability registry and dispatcher - JSON over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured HTTP port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Print the compiled-in capability providers and exit
    #[arg(long)]
    pub list_providers: bool,
}

fn print_providers() {
    println!("{:<16} {:<12} DESCRIPTION", "CAPABILITY", "PROVIDER");
    for (capability, name, description) in list_capability_providers() {
        println!("{capability:<16} {name:<12} {description}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_providers {
        print_providers();
        return Ok(());
    }

    run_server(cli.config.as_deref(), cli.port).await?;
    Ok(())
}
