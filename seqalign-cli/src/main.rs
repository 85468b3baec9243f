use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use seqalign_core::align::{align_general, align_linear, Alignment};
use seqalign_core::matrix::SimilarityMatrix;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Globally aligns two sequences under a similarity matrix.
#[derive(Parser, Debug)]
#[command(name = "seqalign", version)]
struct Args {
    /// Path to the similarity matrix file (prompted for when omitted).
    matrix: Option<PathBuf>,

    /// Path to the sequences file: whitespace-separated, the first two
    /// tokens are aligned (prompted for when omitted).
    sequences: Option<PathBuf>,

    /// Use the linear-space aligner: gap cost comes from the matrix gap
    /// row, per symbol, instead of a length-scaled penalty.
    #[arg(long)]
    nogappenalty: bool,

    /// Penalty added for every gap run (general aligner only).
    #[arg(long, default_value_t = 1.0)]
    gap_open: f64,

    /// Penalty added per symbol of a gap run (general aligner only).
    #[arg(long, default_value_t = 1.0)]
    gap_extend: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let matrix_path = match args.matrix {
        Some(path) => path,
        None => PathBuf::from(prompt("Path to file with similarity matrix:")?),
    };
    let matrix_text = fs::read_to_string(&matrix_path)
        .with_context(|| format!("reading similarity matrix from {}", matrix_path.display()))?;
    let matrix = SimilarityMatrix::from_text(&matrix_text)
        .with_context(|| format!("parsing similarity matrix {}", matrix_path.display()))?;
    info!(
        "loaded similarity matrix with {} symbols (gap included)",
        matrix.size()
    );

    let (x, y) = match args.sequences {
        Some(path) => read_sequences(&path)?,
        None => (prompt("First sequence:")?, prompt("Second sequence:")?),
    };
    matrix
        .check_sequence(x.as_bytes())
        .context("first sequence")?;
    matrix
        .check_sequence(y.as_bytes())
        .context("second sequence")?;

    let alignment: Alignment = if args.nogappenalty {
        info!("aligning with the linear-space engine");
        align_linear(x.as_bytes(), y.as_bytes(), &matrix)?
    } else {
        let (open, extend) = (args.gap_open, args.gap_extend);
        info!("aligning with the general-gap engine, penalty {open} + {extend}k");
        align_general(x.as_bytes(), y.as_bytes(), &matrix, |k| {
            open + extend * k as f64
        })?
    };

    println!("{}", alignment.x);
    println!("{}", alignment.y);
    println!("Evaluation: {}", alignment.score);
    Ok(())
}

/// Reads the two sequences to align from a whitespace-tokenized file;
/// tokens beyond the first two are ignored.
fn read_sequences(path: &Path) -> Result<(String, String)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading sequences from {}", path.display()))?;
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(x), Some(y)) => Ok((x.to_string(), y.to_string())),
        _ => bail!(
            "sequences file {} contains fewer than two sequences",
            path.display()
        ),
    }
}

fn prompt(message: &str) -> Result<String> {
    println!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(line.trim().to_string())
}
