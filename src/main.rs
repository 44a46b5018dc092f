//! Clarification Registry CLI
//!
//! Usage:
//!   clarify-registry [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      List every template with its category and replay policy
//!   check     Validate a template id and print its replay policy
//!   render    Render a template's question text
//!   policies  List forced resolution policies
//!   export    Print the registry as a policy manifest (TOML)
//!   verify    Check a policy manifest against the registry
//!   replay    Print the replayable turns of a transcript file

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clarification_registry::{
    definitions, is_replayable, validate_template_id, ClarificationTemplateId,
    ForcedResolutionPolicy, PolicyManifest, RegistryError, Transcript,
};

#[derive(Parser)]
#[command(name = "clarify-registry")]
#[command(about = "Replay policy registry for clinical clarification templates")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every template with its category and replay policy
    List,

    /// Validate a template id and print its replay policy
    Check {
        /// Template identifier, e.g. clarify_location
        template_id: String,
    },

    /// Render a template's question text
    Render {
        template_id: String,

        /// Mention values, bound to {mention_1}, {mention_2}, ... in order
        #[arg(short, long = "mention")]
        mentions: Vec<String>,
    },

    /// List forced resolution policies
    Policies,

    /// Print the registry as a policy manifest (TOML)
    Export,

    /// Check a policy manifest against the registry
    Verify {
        /// Manifest file (TOML)
        manifest: PathBuf,
    },

    /// Print the replayable turns of a transcript file
    Replay {
        /// Transcript file (TOML, one [[turns]] table per exchange)
        transcript: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a command; `Ok(false)` means it completed but found a problem
fn run(command: Command) -> Result<bool, RegistryError> {
    match command {
        Command::List => {
            for def in definitions() {
                println!(
                    "{:<36} {:<24} replayable={}",
                    def.id, def.category, def.replayable
                );
            }
        }
        Command::Check { template_id } => {
            validate_template_id(&template_id)?;
            println!("{} replayable={}", template_id, is_replayable(&template_id)?);
        }
        Command::Render {
            template_id,
            mentions,
        } => {
            let id: ClarificationTemplateId = template_id.parse()?;
            println!("{}", id.render_mentions(mentions.as_slice())?);
        }
        Command::Policies => {
            for policy in ForcedResolutionPolicy::ALL {
                println!("{:<22} {}", policy, policy.description());
            }
        }
        Command::Export => {
            print!("{}", PolicyManifest::from_registry().to_toml_string()?);
        }
        Command::Verify { manifest } => {
            let loaded = PolicyManifest::from_file(&manifest)?;
            let mismatches = loaded.verify();
            if mismatches.is_empty() {
                println!("{}: ok", manifest.display());
            } else {
                for m in &mismatches {
                    println!("{}: {}", manifest.display(), m);
                }
                return Ok(false);
            }
        }
        Command::Replay { transcript } => {
            let loaded = Transcript::from_file(&transcript)?;
            for turn in loaded.replayable_turns()? {
                println!("[{}]", turn.template_id);
                println!("Q: {}", turn.rendered_text);
                println!("A: {}", turn.user_response);
            }
        }
    }
    Ok(true)
}
