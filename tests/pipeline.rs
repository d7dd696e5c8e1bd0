use std::fs;
use std::path::Path;

use tempfile::TempDir;
use year_sampler::pipeline::{FILTERED_FILE, FINAL_FILE, INPUT_FILE, SAMPLED_FILE};
use year_sampler::{
    filter_data_by_year_range, load_csv_file, random_sample_data, run_pipeline, save_csv_file,
    PipelineConfig, Row, SampleSpec, Stage, Table, Value,
};

/// 20 rows whose `year` cycles through 2010..=2021.
fn cycling_years_table() -> Table {
    let rows = (0..20)
        .map(|i| {
            Row::new(vec![
                Value::Integer(i),
                Value::String(format!("item-{i}")),
                Value::Integer(2010 + (i % 12)),
            ])
        })
        .collect();
    Table::new(
        vec!["id".to_string(), "name".to_string(), "year".to_string()],
        rows,
    )
}

fn year_of(row: &Row) -> i64 {
    match row.cells[2] {
        Value::Integer(y) => y,
        _ => panic!("year is not an integer"),
    }
}

fn sorted_ids(table: &Table) -> Vec<i64> {
    let mut ids: Vec<i64> = table
        .rows
        .iter()
        .map(|r| match r.cells[0] {
            Value::Integer(id) => id,
            _ => panic!("id is not an integer"),
        })
        .collect();
    ids.sort_unstable();
    ids
}

fn write_input(dir: &Path, contents: &str) {
    fs::write(dir.join(INPUT_FILE), contents).unwrap();
}

#[test]
fn test_filter_then_sample_scenario() {
    let table = cycling_years_table();

    let filtered = filter_data_by_year_range(&table, 2013.0, 2019.0, "year");
    let expected: Vec<Row> = table
        .rows
        .iter()
        .filter(|r| (2013..=2019).contains(&year_of(r)))
        .cloned()
        .collect();
    assert_eq!(filtered.rows, expected);
    // i in 3..=9 covers 2013..=2019, i in 15..=19 covers 2013..=2017.
    assert_eq!(filtered.len(), 12);
    assert!(filtered.rows.iter().all(|r| (2013..=2019).contains(&year_of(r))));

    let spec = SampleSpec {
        sample_size: 5,
        seed: 1,
    };
    let first = random_sample_data(&filtered, spec);
    let second = random_sample_data(&filtered, spec);
    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn test_sample_larger_than_table_keeps_all_rows() {
    let table = cycling_years_table();
    let sampled = random_sample_data(
        &table,
        SampleSpec {
            sample_size: 100,
            seed: 3,
        },
    );
    assert_eq!(sorted_ids(&sampled), sorted_ids(&table));
    assert_eq!(sampled.len(), table.len());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round_trip.csv");
    let table = Table::new(
        vec!["title".to_string(), "year".to_string(), "score".to_string()],
        vec![
            Row::new(vec![
                Value::String("Quote \"this\", please".to_string()),
                Value::Integer(2015),
                Value::Float(7.5),
            ]),
            Row::new(vec![
                Value::String("plain".to_string()),
                Value::Null,
                Value::Float(3.0),
            ]),
            Row::new(vec![
                Value::String("huge".to_string()),
                Value::Integer(2019),
                Value::Float(1e17),
            ]),
        ],
    );

    save_csv_file(&table, &path);
    let loaded = load_csv_file(&path).unwrap();

    assert_eq!(loaded, table);
}

#[test]
fn test_full_pipeline_writes_all_outputs() {
    let dir = TempDir::new().unwrap();
    let mut csv = String::from("id,year\n");
    for i in 0..40 {
        csv.push_str(&format!("{i},{}\n", 2005 + i % 20));
    }
    csv.push_str("40,\n41,not a year\n");
    write_input(dir.path(), &csv);

    let mut config = PipelineConfig::in_dir(dir.path());
    config.sample.sample_size = 6;
    let report = run_pipeline(&config);

    assert_eq!(report.stage, Stage::Finished);
    assert_eq!(report.rows_loaded, Some(42));
    // 2013..=2019 is 7 of 20 cycling years, seen twice.
    assert_eq!(report.rows_filtered, Some(14));
    assert_eq!(report.rows_sampled, Some(6));

    let filtered = load_csv_file(&dir.path().join(FILTERED_FILE)).unwrap();
    assert_eq!(filtered.len(), 14);

    let sampled = fs::read_to_string(dir.path().join(SAMPLED_FILE)).unwrap();
    let final_out = fs::read_to_string(dir.path().join(FINAL_FILE)).unwrap();
    assert_eq!(sampled, final_out);
    assert_eq!(sampled.lines().count(), 7);
}

#[test]
fn test_pipeline_is_reproducible() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let mut csv = String::from("id,year\n");
    for i in 0..200 {
        csv.push_str(&format!("{i},{}\n", 2010 + i % 12));
    }
    write_input(first_dir.path(), &csv);
    write_input(second_dir.path(), &csv);

    for dir in [&first_dir, &second_dir] {
        let mut config = PipelineConfig::in_dir(dir.path());
        config.sample.sample_size = 25;
        assert_eq!(run_pipeline(&config).stage, Stage::Finished);
    }

    let a = fs::read_to_string(first_dir.path().join(FINAL_FILE)).unwrap();
    let b = fs::read_to_string(second_dir.path().join(FINAL_FILE)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_pipeline_stops_when_nothing_in_range() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), "id,year\n1,1999\n2,2001\n");

    let report = run_pipeline(&PipelineConfig::in_dir(dir.path()));

    assert_eq!(report.stage, Stage::Loaded);
    assert_eq!(report.rows_filtered, Some(0));
    assert!(!dir.path().join(FILTERED_FILE).exists());
    assert!(!dir.path().join(FINAL_FILE).exists());
}

#[test]
fn test_pipeline_stops_on_empty_input() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), "id,year\n");

    let report = run_pipeline(&PipelineConfig::in_dir(dir.path()));

    assert_eq!(report.stage, Stage::NotLoaded);
    assert_eq!(report.rows_loaded, Some(0));
    assert!(!dir.path().join(FILTERED_FILE).exists());
}

#[test]
fn test_missing_year_column_passes_everything_through() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), "id,released\n1,1999\n2,2015\n");

    let report = run_pipeline(&PipelineConfig::in_dir(dir.path()));

    assert_eq!(report.stage, Stage::Finished);
    assert_eq!(report.rows_filtered, Some(2));
    let filtered = load_csv_file(&dir.path().join(FILTERED_FILE)).unwrap();
    assert_eq!(filtered.get(0, "released"), Some(&Value::Integer(1999)));
}
