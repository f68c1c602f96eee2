use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use reckon::{Context, MAX_DEPTH, history::History, readout::Readout};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic expressions such as `2+3*4`, `3√4` or
/// `abs(-3*(2+2))`.
///
/// Without an expression, reckon starts an interactive session reading one
/// expression per line. Inside a session, `:up` and `:down` walk the history,
/// `:ce` clears the current expression, `:ch` clears the history, `:history`
/// lists it and `:quit` leaves.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read expressions from a file, one per line, instead of
    /// taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Also prints the hexadecimal and binary views of integral results.
    #[arg(short, long)]
    radix: bool,

    /// Deepest nesting of parentheses and function arguments accepted.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let context = Context::with_max_depth(args.max_depth);

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
                report(&context, line, args.radix);
            }
        },
        Some(expression) => report(&context, &expression, args.radix),
        None => {
            if let Err(e) = session(&context, args.radix) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Evaluates one expression and prints its readout.
///
/// Invalid expressions print `NaN` like any other result; the reason is only
/// shown on stderr.
fn report(context: &Context, expression: &str, radix: bool) {
    let value = context.try_compute(expression).unwrap_or_else(|e| {
                                                   eprintln!("{e}");
                                                   f64::NAN
                                               });
    let readout = Readout::new(value);

    println!("{readout}");
    if radix {
        println!("{}", readout.hex_line());
        println!("{}", readout.binary_line());
    }
}

/// Runs the interactive session until `:quit` or end of input.
fn session(context: &Context, radix: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut history = History::new();
    let mut current = String::new();

    prompt(&mut stdout, &current)?;
    for line in stdin.lock().lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":up" => {
                if let Some(previous) = history.previous(&current) {
                    current = previous.to_string();
                }
            },
            ":down" => {
                current = history.next(&current).map(str::to_string).unwrap_or_default();
            },
            ":ce" => current.clear(),
            ":ch" => {
                history.clear();
                info!("history cleared");
            },
            ":history" => {
                for (i, entry) in history.iter().enumerate() {
                    writeln!(stdout, "{:>3}  {entry}", i + 1)?;
                }
            },
            "" if current.is_empty() => {},
            "" => {
                let expression = std::mem::take(&mut current);
                report(context, &expression, radix);
                history.push(expression);
            },
            expression => {
                report(context, expression, radix);
                history.push(expression);
                current.clear();
            },
        }

        prompt(&mut stdout, &current)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout, current: &str) -> io::Result<()> {
    write!(stdout, "> {current}")?;
    if !current.is_empty() {
        writeln!(stdout)?;
    }
    stdout.flush()
}
