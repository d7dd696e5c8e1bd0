//! Write a synthetic `Data set 1.csv` to the current directory so the
//! pipeline has something to chew on.
//!
//! Usage: generate_sample [rows]   (default 25000)

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use year_sampler::pipeline::INPUT_FILE;
use year_sampler::{try_save_csv, Row, Table, Value};

const DEFAULT_ROWS: usize = 25_000;

const GENRES: [&str; 5] = ["drama", "comedy", "documentary", "thriller", "animation"];
const TITLE_WORDS: [&str; 8] = [
    "River", "Night", "Glass", "Summer", "Echo", "Harbor", "Paper", "Signal",
];

fn generate_year(rng: &mut ChaCha8Rng) -> Value {
    // Roughly 3% missing and 2% garbled, like a hand-maintained export.
    match rng.gen_range(0..100) {
        0..=2 => Value::Null,
        3..=4 => Value::String("unknown".to_string()),
        _ => Value::Integer(rng.gen_range(2005..=2024)),
    }
}

fn generate_row(id: usize, rng: &mut ChaCha8Rng) -> Row {
    let title = format!(
        "{} {}",
        TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())],
        TITLE_WORDS[rng.gen_range(0..TITLE_WORDS.len())]
    );
    let genre = GENRES[rng.gen_range(0..GENRES.len())];
    let rating = (rng.gen_range(10..=100) as f64) / 10.0;

    Row::new(vec![
        Value::Integer(id as i64),
        Value::String(title),
        Value::String(genre.to_string()),
        generate_year(rng),
        Value::Float(rating),
    ])
}

fn main() -> Result<()> {
    let rows: usize = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid row count: {arg}"))?,
        None => DEFAULT_ROWS,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let columns = ["id", "title", "genre", "year", "rating"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let table = Table::new(
        columns,
        (0..rows).map(|id| generate_row(id, &mut rng)).collect(),
    );

    let output_path = Path::new(INPUT_FILE);
    try_save_csv(&table, output_path)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("Wrote {rows} rows to {}", output_path.display());
    Ok(())
}
