//! `z_naive`と`z_linear`を乱択で突き合わせる

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use zarray::verify::RandomCheck;

#[derive(Parser)]
#[command(name = "zcheck")]
#[command(about = "Compare the naive and linear Z-array computations on random strings")]
struct Cli {
    /// Number of random strings to check
    #[arg(short = 'n', long, default_value_t = 40000)]
    cases: usize,

    /// Maximum length of a generated string
    #[arg(short, long, default_value_t = 400)]
    max_len: usize,

    /// Symbols the strings are drawn from
    #[arg(short, long, default_value = "0123456789")]
    alphabet: String,

    /// Separator used by the sentinel search; must not be in the alphabet
    #[arg(short, long, default_value_t = '$')]
    sentinel: char,

    /// Seed for the random number generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    ensure!(cli.alphabet.is_ascii(), "alphabet must be ASCII");
    ensure!(cli.sentinel.is_ascii(), "sentinel must be ASCII");
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");

    let check = RandomCheck {
        cases: cli.cases,
        max_len: cli.max_len,
        alphabet: cli.alphabet.into_bytes(),
        sentinel: cli.sentinel as u8,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let passed = check
        .run(&mut rng)
        .with_context(|| format!("check failed (seed {seed})"))?;
    println!("ok: {passed} cases");
    Ok(())
}
