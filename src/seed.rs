use crate::models::WeightEntry;
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::error;

/// The first rows of the original tracking table. The full table is
/// open-ended, so deployments point `WEIGHT_SEED_PATH` at a JSON file with
/// the complete data instead of extending this list.
pub fn builtin_seed() -> Vec<WeightEntry> {
    vec![
        seed_entry(0, 150.0, "11.11.2024", 2.5),
        seed_entry(1, 149.0, "18.11.2024", 2.5),
        seed_entry(2, 148.0, "25.11.2024", 5.0),
        seed_entry(3, 146.0, "02.12.2024", 7.5),
    ]
}

fn seed_entry(week: u32, weight: f64, date: &str, dose: f64) -> WeightEntry {
    WeightEntry {
        week,
        weight,
        date: date.to_string(),
        dose,
    }
}

pub fn resolve_seed_path() -> Option<PathBuf> {
    env::var("WEIGHT_SEED_PATH").ok().map(PathBuf::from)
}

/// Loads the seed file if one is configured, falling back to the built-in
/// rows when the file is missing or malformed. The file is read once at
/// startup and never written.
pub async fn load_seed() -> Vec<WeightEntry> {
    let Some(path) = resolve_seed_path() else {
        return builtin_seed();
    };

    match fs::read(&path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse seed file {}: {err}", path.display());
                builtin_seed()
            }
        },
        Err(err) => {
            error!("failed to read seed file {}: {err}", path.display());
            builtin_seed()
        }
    }
}
