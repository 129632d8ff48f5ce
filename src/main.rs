//! Draws repeatedly from a pool described in a JSON file and reports how often each value came up
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use luck_pool::{Entry, PoolError, RandomSource, SeededRandom, ThreadRandom, WeightedPool};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::io::Write;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Number of draws to make
    #[arg(short, long, default_value_t = 1000)]
    draws: usize,
    /// Take each drawn value out of the pool
    #[arg(short, long, default_value_t = false)]
    remove: bool,
    /// Seed for a reproducible run
    #[arg(short, long, default_value = None)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PoolSettings {
    entries: Vec<Entry<String>>,
}

/// Draws up to `draws` values, returning the tally in first-seen order.
fn run_draws<R: RandomSource>(
    pool: &mut WeightedPool<String, R>,
    draws: usize,
    remove: bool,
) -> Result<Vec<(String, usize)>, PoolError> {
    let mut order: Vec<String> = Vec::new();
    let mut tally: HashMap<String, usize> = HashMap::new();
    for draw in 0..draws {
        let value = match pool.sample(remove) {
            Ok(value) => value,
            Err(PoolError::EmptyCollection) => {
                log::info!("Pool emptied after {} draws", draw);
                break;
            }
            Err(err) => return Err(err),
        };
        log::debug!("Draw {} gave {}", draw, value);
        let count = tally.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    Ok(order
        .into_iter()
        .map(|value| {
            let count = tally[&value];
            (value, count)
        })
        .collect())
}

fn print_tally(tally: &[(String, usize)]) {
    let total: usize = tally.iter().map(|(_, count)| count).sum();
    println!("Value\tCount\tPercentage");
    for (value, count) in tally {
        println!(
            "{}\t{}\t{:>5.2}%",
            value,
            count,
            (100.0 * *count as f64) / total as f64
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let timestamp = buf.timestamp_millis();
            writeln!(buf, "[{}] [{}] - {}", timestamp, record.level(), record.args())
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config_file = fs::read_to_string(&args.config_file)?;
    let settings: PoolSettings = serde_json::from_str(&config_file)?;
    log::info!(
        "Loaded {} entries from {}",
        settings.entries.len(),
        args.config_file
    );

    let tally = match args.seed {
        Some(seed) => {
            let mut pool = WeightedPool::from_pairs_with_source(
                Some(settings.entries),
                SeededRandom::new(seed),
            )?;
            run_draws(&mut pool, args.draws, args.remove)?
        }
        None => {
            let mut pool =
                WeightedPool::from_pairs_with_source(Some(settings.entries), ThreadRandom)?;
            run_draws(&mut pool, args.draws, args.remove)?
        }
    };
    print_tally(&tally);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luck_pool::ScriptedRandom;

    #[test]
    fn test_run_draws_tallies_in_first_seen_order() {
        let entries = vec![
            Entry::new("a".to_string(), 1),
            Entry::new("b".to_string(), 2),
        ];
        let mut pool = WeightedPool::from_pairs_with_source(
            Some(entries),
            ScriptedRandom::new(vec![2, 0, 2]),
        )
        .unwrap();
        let tally = run_draws(&mut pool, 3, false).unwrap();
        assert_eq!(tally, vec![("b".to_string(), 2), ("a".to_string(), 1)]);
    }

    #[test]
    fn test_run_draws_stops_when_removal_empties_pool() {
        let entries = vec![
            Entry::new("a".to_string(), 1),
            Entry::new("b".to_string(), 1),
        ];
        let mut pool =
            WeightedPool::from_pairs_with_source(Some(entries), ScriptedRandom::new(vec![0]))
                .unwrap();
        let tally = run_draws(&mut pool, 10, true).unwrap();
        assert_eq!(tally, vec![("a".to_string(), 1), ("b".to_string(), 1)]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_settings_parse() {
        let settings: PoolSettings = serde_json::from_str(
            r#"{ "entries": [ { "value": "common", "weight": 9 }, { "value": "rare", "weight": 1 } ] }"#,
        )
        .unwrap();
        assert_eq!(settings.entries.len(), 2);
        assert_eq!(settings.entries[1], Entry::new("rare".to_string(), 1));
    }
}
