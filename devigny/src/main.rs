mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fetch::Fetcher;
use num_bigint::BigUint;
use pedersen::{EqualityProof, OpeningProof, Params};
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devigny", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hash a seed string to a point on secp256r1
    Nums { seed: String },
    /// Commit to a value and print the private commitment record
    Commit {
        /// Seed for the generator G
        #[arg(long, default_value = "G")]
        g_seed: String,
        /// Seed for the generator H
        #[arg(long, default_value = "H")]
        h_seed: String,
        /// Use random generators instead of seeded ones
        #[arg(long, conflicts_with_all = ["g_seed", "h_seed"])]
        random_params: bool,
        /// Value to commit to (decimal); random when omitted
        #[arg(long)]
        x: Option<BigUint>,
    },
    /// Prove knowledge of the opening of a commitment record
    ProveOpening {
        #[arg(long)]
        commitment: PathBuf,
        #[arg(long, env = "DEVIGNY_BINDING", default_value = "")]
        binding: String,
    },
    /// Prove that two commitment records hide the same value
    ProveEquality {
        #[arg(long)]
        left: PathBuf,
        #[arg(long)]
        right: PathBuf,
        #[arg(long, env = "DEVIGNY_BINDING", default_value = "")]
        binding: String,
    },
    /// Fetch and verify a proof of knowledge of opening
    VerifyOpening {
        uri: String,
        #[arg(long, env = "DEVIGNY_BINDING", default_value = "")]
        binding: String,
    },
    /// Fetch and verify a proof of equality of committed values
    VerifyEquality {
        uri: String,
        #[arg(long, env = "DEVIGNY_BINDING", default_value = "")]
        binding: String,
    },
}

fn report(valid: bool) -> ExitCode {
    if valid {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::FAILURE
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = OsRng;

    match cli.command {
        Command::Nums { seed } => println!("{}", commands::nums(&seed)),
        Command::Commit {
            g_seed,
            h_seed,
            random_params,
            x,
        } => {
            let params = if random_params {
                Params::random(&mut rng)
            } else {
                Params::from_seeds(&g_seed, &h_seed)
            };
            println!("{}", commands::commit(&params, x, &mut rng)?);
        }
        Command::ProveOpening { commitment, binding } => {
            println!("{}", commands::prove_opening(&commitment, &binding, &mut rng)?);
        }
        Command::ProveEquality {
            left,
            right,
            binding,
        } => {
            println!(
                "{}",
                commands::prove_equality(&left, &right, &binding, &mut rng)?
            );
        }
        Command::VerifyOpening { uri, binding } => {
            let fetcher = Fetcher::from_env();
            return Ok(report(commands::verify::<OpeningProof>(&fetcher, &uri, &binding)?));
        }
        Command::VerifyEquality { uri, binding } => {
            let fetcher = Fetcher::from_env();
            return Ok(report(commands::verify::<EqualityProof>(&fetcher, &uri, &binding)?));
        }
    }
    Ok(ExitCode::SUCCESS)
}
