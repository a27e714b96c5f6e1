//! Example printing lottery draws and how often each number came up.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example draw_numbers
//! ```
//!
//! Use a different pool and pick count:
//!
//! ```sh
//! cargo run --example draw_numbers -- --min 1 --max 80 --pick 20
//! ```
//!
//! Replay a draw from its seed:
//!
//! ```sh
//! cargo run --example draw_numbers -- --seed <HEX>
//! ```

use std::{collections::BTreeMap, process};

use clap::Parser;
use lotto_core::{Draw, PickerConfig, PoolRange};
use lotto_generator::{DrawGenerator, DrawSeed, GeneratedDraw};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Smallest number in the pool.
    #[arg(long, default_value_t = 1)]
    min: u32,

    /// Largest number in the pool.
    #[arg(long, default_value_t = 49)]
    max: u32,

    /// Numbers per draw.
    #[arg(long, default_value_t = 6)]
    pick: usize,

    /// Number of draws to generate.
    #[arg(short, long, value_name = "COUNT", default_value_t = 10)]
    count: usize,

    /// Replay a single draw from this seed instead of generating new ones.
    #[arg(long, value_name = "HEX")]
    seed: Option<DrawSeed>,

    /// Print how often each drawn number came up after the draws.
    #[arg(long)]
    histogram: bool,
}

fn main() {
    let args = Args::parse();
    let config = match PickerConfig::new(PoolRange::new(args.min, args.max), args.pick, args.pick)
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(1);
        }
    };
    let generator = DrawGenerator::new(&config);

    if let Some(seed) = args.seed {
        print_draw(&generator.generate_with_seed(seed));
        return;
    }

    let mut counts = args.histogram.then(BTreeMap::<u32, usize>::new);
    for _ in 0..args.count {
        let generated = generator.generate();
        print_draw(&generated);
        if let Some(counts) = &mut counts {
            tally(counts, &generated.draw);
        }
    }

    if let Some(counts) = counts {
        println!();
        for (number, count) in counts {
            println!("{number:>4}: {count}");
        }
    }
}

fn print_draw(generated: &GeneratedDraw) {
    println!("{}  (seed {})", generated.draw, generated.seed);
}

// Only numbers that were actually drawn get an entry.
fn tally(counts: &mut BTreeMap<u32, usize>, draw: &Draw) {
    for &n in draw.numbers() {
        *counts.entry(n).or_default() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_drawn_numbers_only() {
        let config = PickerConfig::new(PoolRange::new(0, 4_000_000_000), 3, 3).unwrap();
        let mut counts = BTreeMap::new();
        tally(&mut counts, &Draw::from_numbers(&config, vec![1, 500, 4_000_000_000]).unwrap());
        tally(&mut counts, &Draw::from_numbers(&config, vec![1, 2, 500]).unwrap());

        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![(1, 2), (2, 1), (500, 2), (4_000_000_000, 1)]
        );
    }
}
