use anyhow::Context;
use clap::Parser;
use parradix::{Backend, SortConfig, sort_into};
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

/// Sort whitespace-separated signed 32-bit integers with a parallel radix sort.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input file ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worker threads (defaults to the number of logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Fork-join backend: rayon|threads|seq
    #[arg(long, default_value = "rayon")]
    backend: String,
}

fn parse_backend(s: &str) -> Backend {
    match s {
        "rayon" => Backend::Rayon,
        "threads" | "os" => Backend::OsThreads,
        "seq" | "sequential" => Backend::Sequential,
        _ => Backend::Rayon,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("read failed: {}", args.input))?
    };

    let values: Vec<i32> = text
        .split_ascii_whitespace()
        .map(|tok| {
            tok.parse::<i32>()
                .with_context(|| format!("not a 32-bit integer: {tok:?}"))
        })
        .collect::<anyhow::Result<_>>()?;

    let cfg = SortConfig::default().backend(parse_backend(&args.backend));
    let cfg = match args.threads {
        Some(n) => cfg.threads(n),
        None => cfg,
    };

    let mut sorted = vec![0i32; values.len()];
    sort_into(&values, &mut sorted, cfg)?;

    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => BufWriter::new(Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("create failed: {}", path.display()))?,
        )),
        None => BufWriter::new(Box::new(std::io::stdout().lock())),
    };
    for v in &sorted {
        writeln!(writer, "{v}")?;
    }
    writer.flush()?;

    eprintln!(
        "Sorted {} values (backend={}, threads={})",
        sorted.len(),
        args.backend,
        args.threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".into()),
    );

    Ok(())
}
