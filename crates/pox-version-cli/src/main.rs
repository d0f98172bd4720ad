use std::cmp::Ordering;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pox_version::semver::{self, ConstraintOptions};
use pox_version::version;

#[derive(Parser, Debug)]
#[command(name = "pox-version")]
#[command(about = "Compare versions and check them against constraints")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Use strict semantic versions (major.minor.patch) instead of relaxed ones
    #[arg(long, global = true)]
    strict: bool,

    /// Let pre-release versions satisfy constraints without a pre-release (strict only)
    #[arg(long, global = true)]
    include_pre_release: bool,

    /// Treat omitted minor/patch in constraints as zero instead of a range (strict only)
    #[arg(long, global = true)]
    zero_padding: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two versions and print -1, 0 or 1
    #[command(alias = "c")]
    Compare {
        /// Left-hand version
        version1: String,

        /// Right-hand version
        version2: String,
    },

    /// Check whether a version satisfies a constraint and print true or false
    #[command(alias = "s")]
    Satisfy {
        /// Version to check
        version: String,

        /// Constraint expression, e.g. ">= 1.2, < 2.0 || ^3.1"
        constraint: String,
    },
}

impl Args {
    fn options(&self) -> ConstraintOptions {
        ConstraintOptions::new()
            .include_pre_release(self.include_pre_release)
            .zero_padding(self.zero_padding)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn compare(args: &Args, version1: &str, version2: &str) -> Result<String> {
    let ordering = if args.strict {
        let v1 = semver::Version::parse(version1)
            .with_context(|| format!("Invalid first version: {}", version1))?;
        let v2 = semver::Version::parse(version2)
            .with_context(|| format!("Invalid second version: {}", version2))?;
        v1.compare(&v2)
    } else {
        let v1 = version::Version::parse(version1)
            .with_context(|| format!("Invalid first version: {}", version1))?;
        let v2 = version::Version::parse(version2)
            .with_context(|| format!("Invalid second version: {}", version2))?;
        v1.compare(&v2)
    };

    let rendered = match ordering {
        Ordering::Less => "-1",
        Ordering::Equal => "0",
        Ordering::Greater => "1",
    };
    Ok(rendered.to_string())
}

fn satisfy(args: &Args, version_text: &str, constraint: &str) -> Result<String> {
    let satisfied = if args.strict {
        let v = semver::Version::parse(version_text)
            .with_context(|| format!("Invalid version: {}", version_text))?;
        let c = semver::Constraints::parse_with_options(constraint, args.options())
            .with_context(|| format!("Invalid constraint: {}", constraint))?;
        log::debug!("Checking {} against {} with {:?}", v, c, c.options());
        c.check(&v)
    } else {
        let v = version::Version::parse(version_text)
            .with_context(|| format!("Invalid version: {}", version_text))?;
        let c = version::Constraints::parse(constraint)
            .with_context(|| format!("Invalid constraint: {}", constraint))?;
        if args.include_pre_release || args.zero_padding {
            log::warn!("--include-pre-release and --zero-padding only apply with --strict");
        }
        log::debug!("Checking {} against {}", v, c);
        c.check(&v)
    };

    Ok(satisfied.to_string())
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = match &args.command {
        Commands::Compare { version1, version2 } => compare(&args, version1, version2)?,
        Commands::Satisfy {
            version,
            constraint,
        } => satisfy(&args, version, constraint)?,
    };
    println!("{}", output);

    Ok(0)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
