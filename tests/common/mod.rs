#![allow(dead_code)]

use std::fs::File;
use std::io::{Error, Write};
use std::path::{Path, PathBuf};

pub const SAMPLE_MODEL: &str = "models/salary_model.json";

pub const DEPARTMENTS: [&str; 8] = [
    "Admin", "Finance", "HR", "IT", "Marketing", "Operations", "R&D", "Sales",
];

/// Writes a model artifact with the given weights and the canonical labels.
pub fn write_model(dir: &Path, coefficients: [f64; 4], intercept: f64) -> Result<PathBuf, Error> {
    let path = dir.join("model.json");
    let json = serde_json::json!({
        "format_version": 1,
        "feature_order": ["YearsExperience", "Department", "Age", "PerformanceScore"],
        "departments": DEPARTMENTS,
        "coefficients": coefficients,
        "intercept": intercept,
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&json)?)?;
    Ok(path)
}

pub fn write_raw(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, Error> {
    let path = dir.join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub fn write_selections(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["years", "age", "performance", "department"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `rows` random, in-range selections.
pub fn generate_selections(path: &Path, rows: usize) -> Result<(), Error> {
    use rand::Rng;
    use rand::seq::SliceRandom;

    let mut rng = rand::thread_rng();
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["years", "age", "performance", "department"])?;

    for _ in 0..rows {
        let age: u32 = rng.gen_range(18..=65);
        let years: u32 = rng.gen_range(0..=age - 18);
        let performance: u8 = rng.gen_range(1..=5);
        let department = DEPARTMENTS.choose(&mut rng).copied().unwrap_or("IT");
        wtr.write_record([
            years.to_string(),
            age.to_string(),
            performance.to_string(),
            department.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
