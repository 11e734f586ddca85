use anyhow::{Context, Result};
use argon2_phc::{Error, Params, Record, Variant};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
mod auth;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// t=1, p=4, m=2 GiB
    Recommended,
    /// t=3, p=4, m=64 MiB
    MemoryConstrained,
}

#[derive(Debug, clap::Args)]
struct Argon2Args {
    /// Parameter preset the other options override
    #[arg(long, value_enum, default_value_t = Preset::Recommended)]
    preset: Preset,

    /// Time cost: number of argon2 iterations
    #[arg(short = 't', long = "time-cost")]
    time_cost: Option<u32>,

    /// Memory cost in KiB
    #[arg(short = 'm', long = "memory-cost")]
    memory_cost: Option<u32>,

    /// Parallelism: number of lanes
    #[arg(short = 'p', long = "parallelism")]
    parallelism: Option<u8>,

    /// Length of the resulting hash in bytes
    #[arg(long = "hash-len")]
    hash_len: Option<u32>,

    /// Length of the generated salt in bytes
    #[arg(long = "salt-len")]
    salt_len: Option<u32>,

    /// Argon2 variant (i, id)
    #[arg(long)]
    variant: Option<Variant>,
}

impl Argon2Args {
    fn to_params(&self) -> Result<Params> {
        let base = match self.preset {
            Preset::Recommended => Params::recommended(),
            Preset::MemoryConstrained => Params::memory_constrained(),
        };

        let params = Params::new(
            self.hash_len.unwrap_or(base.hash_len()),
            self.salt_len.unwrap_or(base.salt_len()),
            self.time_cost.unwrap_or(base.time_cost()),
            self.memory_cost.unwrap_or(base.memory_cost()),
            self.parallelism.unwrap_or(base.parallelism()),
            self.variant.unwrap_or(base.variant()),
            base.version(),
        )?;
        Ok(params)
    }
}

#[derive(Debug, Parser)]
#[command(name = "argon2-phc")]
#[command(
    version,
    about = "Argon2 password hashing in the PHC string format."
)]
struct Cli {
    /// Suppress status output
    #[arg(short, long, global = true)]
    silent: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the encoded hash
    Hash {
        #[command(flatten)]
        argon2: Argon2Args,

        /// Password to hash (read from the environment, stdin or a prompt if omitted)
        password: Option<String>,
    },

    /// Verifies a password against an encoded hash
    #[command(arg_required_else_help = true)]
    Verify {
        encoded: String,

        /// Password to check (read from the environment, stdin or a prompt if omitted)
        password: Option<String>,
    },

    /// Prints the parameters of an encoded hash
    #[command(arg_required_else_help = true)]
    Inspect {
        encoded: String,

        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn init_tracing(silent: bool, verbose: u8) {
    let level = match (silent, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // usage errors exit 1, help and version exit 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_tracing(args.silent, args.verbose);

    match args.command {
        Commands::Hash { argon2, password } => {
            let params = argon2.to_params()?;
            let password = auth::read_password(password, true)?;

            if !args.silent {
                println!(
                    "Generating {} hash with m={}, t={}, p={}...\n",
                    params.variant(),
                    params.memory_cost(),
                    params.time_cost(),
                    params.parallelism()
                );
            }

            let encoded = params
                .hash_encoded(password.as_bytes())
                .context("failed to hash password")?;
            println!("{encoded}");
        }
        Commands::Verify { encoded, password } => {
            let record = Record::decode(&encoded).context("invalid encoded hash")?;
            let password = auth::read_password(password, false)?;

            if !record
                .verify(password.as_bytes())
                .context("unable to verify password")?
            {
                return Err(Error::VerifyMismatch.into());
            }
            if !args.silent {
                println!("password matches");
            }
        }
        Commands::Inspect { encoded, json } => {
            let record = Record::decode(&encoded).context("invalid encoded hash")?;
            let params = record.params();

            if json {
                println!("{}", serde_json::to_string_pretty(params)?);
            } else {
                println!("Variant:     {}", params.variant());
                println!("Version:     {}", params.version());
                println!("MemoryCost:  {} KiB", params.memory_cost());
                println!("TimeCost:    {}", params.time_cost());
                println!("Parallelism: {}", params.parallelism());
                println!("SaltLength:  {}", params.salt_len());
                println!("HashLength:  {}", params.hash_len());
            }
        }
    }

    Ok(())
}
