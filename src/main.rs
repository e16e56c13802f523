use std::io::{self, BufRead, BufWriter, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use indoarabic::{RouterError, ScriptRouter};

#[derive(Parser)]
#[command(name = "indoarabic", about = "Convert text between Perso-Arabic and Indic scripts")]
struct Cli {
    /// Source language tag (ur-PK, hi-IN, pa-PK, pa-IN, sd-PK, sd-IN)
    src: String,
    /// Destination language tag
    dst: String,
    /// Text to convert; stdin is read line by line when omitted
    text: Vec<String>,
    /// Simplify letters native typists usually omit (nukta, Arabic ye)
    #[arg(long)]
    nativize: bool,
    /// Keep distinct initial vowel letters instead of collapsing them
    #[arg(long)]
    keep_initial_vowels: bool,
    /// Drop every virama before converting Indic text
    #[arg(long)]
    drop_virama: bool,
}

fn run(cli: &Cli) -> Result<(), RouterError> {
    let router = ScriptRouter::builder()
        .abjadify_initial_vowels(!cli.keep_initial_vowels)
        .drop_virama(cli.drop_virama)
        .build()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut emit = |line: &str| -> Result<(), RouterError> {
        let converted = router.convert(line, &cli.src, &cli.dst, cli.nativize)?;
        if let Err(e) = writeln!(out, "{converted}") {
            eprintln!("Failed to write output: {e}");
            process::exit(1);
        }
        Ok(())
    };

    if cli.text.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => emit(&line)?,
                Err(e) => {
                    eprintln!("Failed to read line: {e}");
                    process::exit(1);
                }
            }
        }
    } else {
        emit(&cli.text.join(" "))?;
    }
    drop(emit);
    if let Err(e) = out.flush() {
        eprintln!("Failed to flush output: {e}");
        process::exit(1);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("indoarabic=warn")))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}
