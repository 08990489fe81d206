// tr-numerals: spells out the numerals in Turkish text
//
// Usage:
//   tr-numerals [--json] [--config <path>] [TEXT]...
//   tr-numerals --init-config
//
// Without TEXT arguments, reads stdin line by line.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use turkish_numerals_lib::{init_logging, NormalizerConfig, NumeralEngine, CONFIG_LOCK};

const USAGE: &str = "\
usage: tr-numerals [--json] [--config <path>] [TEXT]...
       tr-numerals --init-config

Spells out the numerals in Turkish text. Reads stdin when no TEXT is given.

options:
  --json            print the full result (replacements, timing) as JSON
  --config <path>   load settings from <path> instead of the default location
  --init-config     write the default settings to the default location
  -h, --help        show this message";

#[derive(Debug, Default)]
struct Args {
    json: bool,
    config: Option<PathBuf>,
    init_config: bool,
    help: bool,
    texts: Vec<String>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut raw = raw.into_iter();

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--init-config" => args.init_config = true,
            "-h" | "--help" => args.help = true,
            "--config" => {
                let path = raw
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config needs a path"))?;
                args.config = Some(PathBuf::from(path));
            }
            "--" => {
                args.texts.extend(raw.by_ref());
            }
            flag if flag.starts_with("--") => anyhow::bail!("unknown option: {}", flag),
            _ => args.texts.push(arg),
        }
    }

    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> Result<NormalizerConfig> {
    match path {
        Some(path) => NormalizerConfig::load_from(path),
        // an explicit --config must load; the default location may be unusable
        None => Ok(NormalizerConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Default config unavailable, using defaults: {:#}", e);
            NormalizerConfig::default()
        })),
    }
}

fn init_config() -> Result<()> {
    let _guard = CONFIG_LOCK
        .lock()
        .map_err(|_| anyhow::anyhow!("config lock poisoned"))?;

    let path = NormalizerConfig::config_path()?;
    if path.exists() {
        anyhow::bail!("config already exists: {}", path.display());
    }
    NormalizerConfig::default().save_to(&path)?;
    println!("{}", path.display());
    Ok(())
}

fn emit(engine: &NumeralEngine, text: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let result = engine.normalize(text);
    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    } else {
        writeln!(out, "{}", result.text)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let args = parse_args(std::env::args().skip(1))?;

    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }
    if args.init_config {
        return init_config();
    }

    let config = load_config(args.config.as_ref())?;
    let engine = NumeralEngine::new(&config);
    tracing::debug!("Running stages: {:?}", engine.stages());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.texts.is_empty() {
        for text in &args.texts {
            emit(&engine, text, args.json, &mut out)?;
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        emit(&engine, &line, args.json, &mut out)?;
    }

    Ok(())
}
