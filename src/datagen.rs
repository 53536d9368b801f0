use anyhow::{Context, Result};
use chrono::NaiveDate;
use sentiplot::reader::DATE_FORMAT;
use sentiplot::table::DEFAULT_DATE_COLUMN;
use sentiplot::{SyntheticTable, TableWriter};
use std::env;
use tracing_subscriber::EnvFilter;

struct Config {
    days: usize,
    start: NaiveDate,
    seed: u64,
    missing_ratio: f64,
    ticker: Option<String>,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            days: 180,
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            seed: 42,
            missing_ratio: 0.0,
            ticker: None,
            output_file: None,
            use_brotli: false,
        }
    }
}

impl Config {
    fn output_path(&self) -> String {
        self.output_file.clone().unwrap_or_else(|| {
            if self.use_brotli {
                "sentiment.jsonl.br".to_string()
            } else {
                "sentiment.jsonl".to_string()
            }
        })
    }
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => anyhow::bail!("{} requires an argument", flag),
    }
}

fn parse_args(args: &[String]) -> Result<Option<Config>> {
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-days" => {
                let value = next_value(args, &mut i, "-days")?;
                config.days = value.parse().with_context(|| format!("invalid -days: {}", value))?;
            }
            "-start" => {
                let value = next_value(args, &mut i, "-start")?;
                config.start = NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .with_context(|| format!("invalid -start (expected YYYY-MM-DD): {}", value))?;
            }
            "-seed" => {
                let value = next_value(args, &mut i, "-seed")?;
                config.seed = value.parse().with_context(|| format!("invalid -seed: {}", value))?;
            }
            "-missing" => {
                let value = next_value(args, &mut i, "-missing")?;
                config.missing_ratio = value.parse().with_context(|| format!("invalid -missing: {}", value))?;
            }
            "-ticker" => {
                config.ticker = Some(next_value(args, &mut i, "-ticker")?.to_string());
            }
            "-out" => {
                config.output_file = Some(next_value(args, &mut i, "-out")?.to_string());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(None);
            }
            other => {
                anyhow::bail!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn print_usage(program: &str) {
    println!("Usage: {} [options]", program);
    println!();
    println!("Writes a synthetic daily sentiment table as a JSON Lines table file.");
    println!();
    println!("Options:");
    println!("  -days N          number of consecutive days (default 180)");
    println!("  -start DATE      first date, YYYY-MM-DD (default 2024-01-01)");
    println!("  -seed N          random seed (default 42)");
    println!("  -missing R       fraction of sentiment values left missing, 0..1 (default 0)");
    println!("  -ticker NAME     ticker recorded in the header metadata");
    println!("  -out FILE        output path (default sentiment.jsonl, .br for Brotli)");
    println!("  -brotli          compress the default output path with Brotli");
    println!("  -h               show this help");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(config) = parse_args(&args)? else {
        return Ok(());
    };

    let output_path = config.output_path();
    let table = SyntheticTable::with_config(config.days, config.start, config.seed)
        .with_missing_ratio(config.missing_ratio)
        .generate();

    let mut metadata = serde_json::json!({
        "source": "sentiplot-datagen",
        "seed": config.seed,
        "missing_ratio": config.missing_ratio,
    });
    if let Some(ticker) = &config.ticker {
        metadata["ticker"] = serde_json::Value::String(ticker.clone());
    }

    let mut writer = TableWriter::new(&output_path)?;
    writer.write_table(&table, DEFAULT_DATE_COLUMN, metadata)?;
    tracing::info!(rows = writer.rows_written(), path = %output_path, "table written");

    println!("Table written to: {}", output_path);
    Ok(())
}
