//! Pick from a short list of options and print the result.
//!
//! ```text
//! cargo run --example choose
//! cargo run --example choose -- red green blue --count 3 --seed 7
//! RUST_LOG=chooser=debug cargo run --example choose
//! ```

use chooser::Chooser;
use clap::Parser;

const DEFAULT_CHOICES: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

#[derive(Parser, Debug)]
#[command(name = "choose", about = "Pick uniformly at random from a list of options")]
struct Args {
    /// Options to choose from (defaults to a built-in list of four)
    choices: Vec<String>,

    /// Seed for a reproducible sequence of picks
    #[arg(long)]
    seed: Option<u64>,

    /// Number of picks to print
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Do not fall back to the built-in list when no options are given
    #[arg(long)]
    no_defaults: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let choices = if args.choices.is_empty() && !args.no_defaults {
        DEFAULT_CHOICES.iter().map(|s| s.to_string()).collect()
    } else {
        args.choices
    };
    let chooser = Chooser::new(choices)?;

    match args.seed {
        Some(seed) => {
            for picked in chooser.seeded(seed).take(args.count) {
                println!("{}", picked);
            }
        }
        None => {
            for picked in chooser.sample(args.count) {
                println!("{}", picked);
            }
        }
    }

    Ok(())
}
