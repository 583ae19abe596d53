use std::io::{self, IsTerminal, Read};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;

use verbump::bump::{find_increment, generate_version};
use verbump::config::{self, Config};
use verbump::conventions::{CommitConvention, ConventionRegistry};
use verbump::domain::{Increment, PrereleaseLabel, SeverityMap, Version};
use verbump::out;
use verbump::VerbumpError;

mod exit_codes;

#[derive(clap::Parser)]
#[command(
    name = "verbump",
    version,
    about = "Compute the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, global = true, help = "Use the given commit convention")]
    name: Option<String>,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the next version from commit messages
    Bump {
        #[arg(long, help = "Current version, overrides the configured one")]
        current_version: Option<String>,

        #[arg(
            long,
            value_parser = ["MAJOR", "MINOR", "PATCH"],
            help = "Manually specify the desired increment"
        )]
        increment: Option<String>,

        #[arg(short, long, help = "Type of prerelease: alpha, beta or rc")]
        prerelease: Option<String>,

        #[arg(
            short,
            long = "message",
            help = "Commit message to classify; repeatable, stdin lines are used when absent"
        )]
        messages: Vec<String>,
    },
    /// Show available commit conventions
    Ls,
    /// Show a commit example for the selected convention
    Example,
    /// Show information about the selected convention
    Info,
    /// Show the commit schema of the selected convention
    Schema,
    /// Print version information
    Version,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = dispatch(args) {
        out::error(&format!("{:#}", e));
        process::exit(exit_code(&e));
    }
}

/// Resolve the exit code for a failed invocation
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<VerbumpError>() {
        Some(typed) => exit_codes::for_error(typed),
        None => exit_codes::ERROR,
    }
}

fn dispatch(args: Args) -> anyhow::Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let registry = ConventionRegistry::new();
    let name = args.name.unwrap_or_else(|| config.name.clone());

    match args.command {
        Command::Bump {
            current_version,
            increment,
            prerelease,
            messages,
        } => run_bump(
            &config,
            select_convention(&registry, &name)?.as_ref(),
            current_version,
            increment,
            prerelease,
            messages,
        ),
        Command::Ls => {
            for name in registry.names() {
                out::write(name);
            }
            Ok(())
        }
        Command::Example => {
            out::write(select_convention(&registry, &name)?.example());
            Ok(())
        }
        Command::Info => {
            out::write(select_convention(&registry, &name)?.info());
            Ok(())
        }
        Command::Schema => {
            out::write(select_convention(&registry, &name)?.schema());
            Ok(())
        }
        Command::Version => {
            out::write(env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Look up the selected convention; `ls` and `version` never consult one
fn select_convention(
    registry: &ConventionRegistry,
    name: &str,
) -> verbump::Result<Arc<dyn CommitConvention>> {
    registry
        .get(name)
        .ok_or_else(|| VerbumpError::unknown_convention(name))
}

/// Compute and print the next version
fn run_bump(
    config: &Config,
    convention: &dyn CommitConvention,
    current_version: Option<String>,
    increment: Option<String>,
    prerelease: Option<String>,
    messages: Vec<String>,
) -> anyhow::Result<()> {
    let current = current_version
        .or_else(|| config.version.clone())
        .ok_or_else(|| {
            VerbumpError::config(
                "current version is not set, pass --current-version or set `version` in verbump.toml",
            )
        })?;
    let current = Version::parse(&current)?;

    // Reject a bad label before any stdin reading or sequencing happens
    let prerelease = match prerelease {
        Some(label) => Some(PrereleaseLabel::parse(&label)?),
        None => None,
    };

    // An explicit increment bypasses the classifier entirely
    let increment = match increment {
        Some(name) => Some(Increment::parse(&name)?),
        None => {
            let messages = collect_messages(messages)?;
            let (pattern, map) = classifier_inputs(config, convention)?;
            Some(find_increment(&messages, &pattern, &map))
        }
    };

    let next = generate_version(&current, increment, prerelease)?;
    out::write(&next.to_string());
    Ok(())
}

/// Commit messages from `--message` flags, or non-empty stdin lines
fn collect_messages(flags: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !flags.is_empty() {
        return Ok(flags);
    }

    if io::stdin().is_terminal() {
        out::info("reading commit messages from stdin, one per line, finish with ctrl-d");
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read commit messages from stdin")?;

    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Classifier pattern and map: config overrides, else the convention's own
fn classifier_inputs(
    config: &Config,
    convention: &dyn CommitConvention,
) -> verbump::Result<(Regex, SeverityMap)> {
    let pattern = match &config.bump.pattern {
        Some(pattern) => Regex::new(pattern).map_err(|e| {
            VerbumpError::config(format!("invalid bump pattern '{}': {}", pattern, e))
        })?,
        None => convention.bump_pattern().clone(),
    };

    let map = if config.bump.map.is_empty() {
        convention.bump_map().clone()
    } else {
        SeverityMap::from_entries(config.bump.map.clone(), Increment::Patch)
    };

    Ok((pattern, map))
}
