//! Command-line recognizer for the list language.
//!
//! Each positional argument is one input; with no arguments, every line of
//! stdin is one input. Prints `accept` or `reject: <reason>` per input and
//! exits non-zero if anything was rejected.
//!
//! ```text
//! list-parser [--no-memo] [--stats] [--tokens] [INPUT...]
//! ```
//!
//! Set `RUST_LOG=parser_framework=trace` to watch marks, truncations and memo
//! traffic.

use list_grammar::{list_lexer, parse_with};
use parser_framework::ParserConfig;
use std::io::{self, BufRead};
use std::process::ExitCode;

#[derive(Debug, Default)]
struct Options {
    config: ParserConfig,
    stats: bool,
    tokens: bool,
    inputs: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--no-memo" => options.config = options.config.with_memoization(false),
            "--stats" => options.stats = true,
            "--tokens" => options.tokens = true,
            flag if flag.starts_with("--") => return Err(format!("unknown flag `{flag}`")),
            _ => options.inputs.push(arg),
        }
    }
    Ok(options)
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn dump_tokens(input: &str) -> bool {
    let mut ok = true;
    for token in list_lexer(input) {
        match token {
            Ok(token) => println!(
                "{:>6}  {:<10} {:?}",
                token.position.to_string(),
                token.kind.to_string(),
                &*token.text
            ),
            Err(err) => {
                println!("error: {err}");
                ok = false;
            }
        }
    }
    ok
}

fn recognize(input: &str, options: &Options) -> bool {
    match parse_with(list_lexer(input), options.config) {
        Ok(stats) => {
            println!("accept");
            if options.stats {
                println!("  {stats:?}");
            }
            true
        }
        Err(err) => {
            println!("reject: {err}");
            false
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let mut options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: list-parser [--no-memo] [--stats] [--tokens] [INPUT...]");
            return ExitCode::from(2);
        }
    };

    if options.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => options.inputs.push(line),
                Err(err) => {
                    eprintln!("failed to read stdin: {err}");
                    return ExitCode::from(2);
                }
            }
        }
    }

    let mut all_ok = true;
    for input in &options.inputs {
        let ok = if options.tokens {
            dump_tokens(input)
        } else {
            recognize(input, &options)
        };
        all_ok &= ok;
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
