// example/src/main.rs

use clap::Parser;
use osjson::{Json, OSDecodable, OsJsonError};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"{
    "name": "Trig pillars",
    "points": [
        {"name": "Ben Nevis", "value": 1345, "gridRef": "NN1667171255"},
        {"name": "Snowdon", "value": 1085},
        {"name": "Scafell Pike", "value": "978"}
    ]
}"#;

#[derive(Parser)]
#[command(name = "osjson-example")]
#[command(about = "Decode a survey of named points from a JSON document", long_about = None)]
struct Cli {
    /// JSON file shaped like `{"name": ..., "points": [...]}` (defaults to a built-in sample)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Debug, OSDecodable)]
#[osjson(rename_all = "camelCase")]
struct Point {
    name:     String,
    value:    f64,
    grid_ref: Option<String>,
}

#[derive(Debug, OSDecodable)]
struct Survey {
    name:   String,
    points: Vec<Point>,
}

fn main() -> Result<(), OsJsonError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Read the document, or fall back to the sample
    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_owned(),
    };
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let json = Json::new(&value);

    match Survey::from_json(json) {
        Some(survey) => {
            info!(survey = %survey.name, points = survey.points.len(), "decoded survey");
            for point in &survey.points {
                log_point(point);
            }
        }
        None => {
            // Strict decode failed: salvage whatever points are individually valid.
            let total = json.get("points").and_then(|points| points.len()).unwrap_or(0);
            let points: Vec<Point> = osjson::lossy_array(json.get_or_null("points")).unwrap_or_default();
            warn!(valid = points.len(), total, "document is not a valid survey");
            for point in &points {
                log_point(point);
            }
        }
    }

    Ok(())
}

fn log_point(point: &Point) {
    info!(
        name = %point.name,
        value = point.value,
        grid_ref = point.grid_ref.as_deref().unwrap_or("-"),
        "point"
    );
}
