// Command-line front end for the Quechua rings translator.
//
// Translates a verb root plus six ring selections into English, either from
// suffixes typed on the command line, from random draws, or from raw sensor
// distances run through a calibration file. Also builds calibration files
// from recorded survey samples. All the work happens in the library crates;
// this file only parses arguments and prints.
//
// Usage:
//   quechua-rings translate <ROOT> <S0> <S1> <S2> <S3> <S4> <S5>
//   quechua-rings random [--seed N] [--count N]
//   quechua-rings vocab
//   quechua-rings decode [--config F] [--calibration F] <D0> ... <D5>
//   quechua-rings survey --samples F [--out F] [--force]
//
// A suffix of `-` leaves that slot empty. A negative distance means the
// sensor saw no echo. `survey` will not replace an existing calibration
// file without `--force`. Logging goes to stderr, filtered by `RUST_LOG`
// (default `info`).

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quechua_rings_calib::{
    CalibrationSet, RingDecoder, RingsConfig, calibrate, survey_recorded,
};
use quechua_rings_lang::generator::random_word_form;
use quechua_rings_lang::suffixes::{ABSENT, vocabulary};
use quechua_rings_lang::{Lexicon, SLOT_COUNT, Slot, WordForm, default_lexicon, translate};
use quechua_rings_prng::SuffixRng;

#[derive(Parser, Debug)]
#[command(name = "quechua-rings")]
#[command(about = "Translate Quechua verb + suffix stacks into English")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a root and one suffix per slot (`-` for none)
    Translate {
        root: String,
        /// Manner, direction, aspect, person, phase, discourse
        #[arg(num_args = SLOT_COUNT, value_name = "SUFFIX")]
        suffixes: Vec<String>,
    },

    /// Translate randomly drawn word forms
    Random {
        /// PRNG seed (default: from the system clock)
        #[arg(long)]
        seed: Option<u64>,

        /// How many forms to draw
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// List every slot's suffixes with their glosses
    Vocab,

    /// Decode six sensor distances (cm, negative for no echo)
    Decode {
        /// JSON config file (default: built-in defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Calibration file (default: the config's calibration_path)
        #[arg(long)]
        calibration: Option<PathBuf>,

        #[arg(num_args = SLOT_COUNT, value_name = "DISTANCE", allow_negative_numbers = true)]
        distances: Vec<f32>,
    },

    /// Build a calibration file from recorded survey samples
    Survey {
        /// JSON array indexed [ring][position][sample]
        #[arg(long)]
        samples: PathBuf,

        /// Where to write the calibration
        #[arg(long, default_value = "ring_data.txt")]
        out: PathBuf,

        /// Replace `--out` if it already exists
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let args = Args::parse();
    let lexicon = default_lexicon();

    match args.command {
        Command::Translate { root, suffixes } => {
            let form = parse_word_form(&root, &suffixes)?;
            print_translation(&lexicon, &form)?;
        }
        Command::Random { seed, count } => {
            let seed = seed.unwrap_or_else(clock_seed);
            info!(seed, "drawing random word forms");
            let mut rng = SuffixRng::new(seed);
            for _ in 0..count {
                let form = random_word_form(&lexicon, &mut rng).context("lexicon is empty")?;
                print_translation(&lexicon, &form)?;
            }
        }
        Command::Vocab => print_vocab(),
        Command::Decode {
            config,
            calibration,
            distances,
        } => decode(&lexicon, config.as_deref(), calibration, &distances)?,
        Command::Survey {
            samples,
            out,
            force,
        } => survey(&samples, &out, force)?,
    }
    Ok(())
}

/// `RUST_LOG` directives when set and parseable, otherwise `info`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn parse_word_form(root: &str, suffixes: &[String]) -> Result<WordForm> {
    let slots: Vec<&str> = suffixes
        .iter()
        .map(|s| if s == "-" { ABSENT } else { s.as_str() })
        .collect();
    Ok(WordForm::from_slice(root, &slots)?)
}

fn print_translation(lexicon: &Lexicon, form: &WordForm) -> Result<()> {
    let translation = translate(lexicon, form)?;
    println!("Quechua word: {}", form.surface());
    println!("Translation: {translation}");
    Ok(())
}

fn print_vocab() {
    for slot in Slot::ALL {
        println!("{slot}:");
        for entry in vocabulary(slot) {
            let text = if entry.text.is_empty() { "-" } else { entry.text };
            println!("  {text:<8} {}", entry.label);
        }
    }
}

fn decode(
    lexicon: &Lexicon,
    config_path: Option<&Path>,
    calibration_path: Option<PathBuf>,
    distances: &[f32],
) -> Result<()> {
    let config = match config_path {
        Some(path) => RingsConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RingsConfig::default(),
    };
    let calibration_path = calibration_path.unwrap_or_else(|| config.calibration_path.clone());
    let calibrations = CalibrationSet::load(&calibration_path)
        .with_context(|| format!("loading calibration {}", calibration_path.display()))?;

    let Ok(distances) = <[f32; SLOT_COUNT]>::try_from(distances) else {
        bail!("expected {SLOT_COUNT} distances, got {}", distances.len());
    };
    let readings = distances.map(|d| (d >= 0.0).then_some(d));

    let mut decoder = RingDecoder::new(calibrations, &config);
    let form = decoder.decode(readings)?;
    info!(positions = ?decoder.positions(), "decoded ring positions");
    print_translation(lexicon, &form)
}

fn survey(samples_path: &Path, out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            out.display()
        );
    }
    let json = std::fs::read_to_string(samples_path)
        .with_context(|| format!("reading samples {}", samples_path.display()))?;
    let samples: Vec<Vec<Vec<f32>>> =
        serde_json::from_str(&json).context("samples must be [ring][position][sample]")?;

    let surveys = survey_recorded(&samples)?;
    for (slot, ring) in Slot::ALL.into_iter().zip(&surveys) {
        println!(
            "{slot}: spacing {:.3} cm, noise {:.3} cm, will {}",
            ring.spacing()?,
            ring.noise()?,
            ring.reliability()?
        );
    }

    let set = calibrate(&surveys)?;
    set.save(out)
        .with_context(|| format!("writing calibration {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
