use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand};
use thin_rpn::{ExprError, MathContext, ShuntingParser};

const BENCH_EXPR: &str = "100+2/10+1+1+1+1+1+1+1+1+1+1+1+2+2^1";

/// rpn converts infix math expressions to postfix and evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable for evaluation, eg: `--var x=3`. Can be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", global = true, value_parser = parse_var)]
    vars: Vec<(String, f64)>,

    /// Raises the log level, overridden by RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the postfix form of an infix expression.
    Postfix { expr: String },
    /// Evaluates a postfix expression.
    Eval { postfix: String },
    /// Converts an infix expression to postfix and evaluates it.
    Calc { expr: String },
    /// Times the convert and evaluate pipeline over many runs.
    Bench {
        #[arg(short, long, default_value_t = 100_000)]
        runs: u32,
        #[arg(default_value = BENCH_EXPR)]
        expr: String,
    },
}

fn parse_var(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", arg))?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(format!("variable names are lowercase letters only: '{}'", name));
    }
    let value = value
        .parse::<f64>()
        .map_err(|e| format!("bad value for '{}': {}", name, e))?;
    Ok((name.to_string(), value))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn bench(cx: &MathContext, expr: &str, runs: u32) -> Result<(), ExprError> {
    let start = Instant::now();
    for _ in 0..runs {
        cx.eval(&ShuntingParser::parse_str(expr)?)?;
    }
    let elapsed = start.elapsed();
    println!(
        "Runs: {}, Time: {}s, Average Time per run: {}ms",
        runs,
        elapsed.as_secs_f64(),
        elapsed.as_secs_f64() * 1_000.0 / f64::from(runs.max(1))
    );
    Ok(())
}

fn run(args: Args) -> Result<(), ExprError> {
    let mut cx = MathContext::new();
    for (name, value) in &args.vars {
        cx.setvar(name, *value);
    }
    match args.command {
        Command::Postfix { expr } => println!("{}", ShuntingParser::parse_str(&expr)?),
        Command::Eval { postfix } => println!("{}", cx.eval_str(&postfix)?),
        Command::Calc { expr } => println!("{}", cx.eval(&ShuntingParser::parse_str(&expr)?)?),
        Command::Bench { runs, expr } => bench(&cx, &expr, runs)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("{:?}", args);

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
