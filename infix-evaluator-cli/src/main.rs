use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_evaluator::interpreter::{parse, tokens_to_string};
use log::{debug, info, LevelFilter};
use std::io;
use std::io::{BufRead, Write};

static DEMO_EXPRESSIONS: [&str; 10] = [
    "10 + 5",
    "3 + 4 * 2 / (1 - 5) + 7",
    "(2 + 3) < (4 - 1)",
    "2 * 3 = 6",
    "1.5 * (4 - 2.5)",
    "1.2.3",
    "10 / 0",
    "(1 + 2",
    "1 + $",
    "()",
];

/// Parses and evaluates infix arithmetic and comparison expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Expressions are read line by line from stdin when omitted
    expression: Option<String>,

    /// Evaluate a fixed list of sample expressions
    #[clap(long, conflicts_with = "expression")]
    demo: bool,

    /// Also print the fully parenthesized form of the expression
    #[clap(short, long)]
    print: bool,

    /// Also print the expression in postfix order
    #[clap(long)]
    postfix: bool,

    /// Also print the expression tree
    #[clap(short, long)]
    tree: bool,

    /// Print the serialized expression tree as JSON instead of evaluating it
    #[clap(short, long)]
    json: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    let level = args
        .verbose
        .log_level()
        .map_or(LevelFilter::Off, |level| level.to_level_filter());
    env_logger::Builder::new().filter_level(level).init();
    debug!("{:?}", args);

    let output = Output {
        print: args.print,
        postfix: args.postfix,
        tree: args.tree,
        json: args.json,
    };

    if args.demo {
        run_demo(output);
        return Ok(());
    }

    match &args.expression {
        Some(expression) => run(expression, output),
        None => run_interactive(output),
    }
}

/// What to print for each expression besides its value.
#[derive(Debug, Copy, Clone)]
struct Output {
    print: bool,
    postfix: bool,
    tree: bool,
    json: bool,
}

fn run(expression: &str, output: Output) -> Result<()> {
    let tree = parse(expression).with_context(|| format!("could not parse '{}'", expression))?;

    if output.print {
        println!("{}", tree.print());
    }
    if output.postfix {
        println!("{}", tokens_to_string(&tree.to_postfix()));
    }
    if output.tree {
        print!("{}", tree);
    }
    if output.json {
        println!("{}", tree.to_json()?);
        return Ok(());
    }

    let value = tree
        .evaluate()
        .with_context(|| format!("could not evaluate '{}'", expression))?;
    println!("{}", value);
    Ok(())
}

fn run_interactive(output: Output) -> Result<()> {
    info!("reading expressions from stdin, 'exit' to quit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("could not read from stdin")?;
        let expression = line.trim();
        if read == 0 || expression == "exit" || expression == "quit" {
            break;
        }
        if expression.is_empty() {
            continue;
        }

        if let Err(error) = run(expression, output) {
            eprintln!("Error: {:#}", error);
        }
    }
    Ok(())
}

fn run_demo(output: Output) {
    let output = Output {
        print: true,
        ..output
    };
    for expression in DEMO_EXPRESSIONS {
        println!("{}", expression);
        if let Err(error) = run(expression, output) {
            println!("Error: {:#}", error);
        }
        println!();
    }
}
