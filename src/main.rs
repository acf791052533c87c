//! Stencil CLI
//!
//! Usage:
//!   stencil [OPTIONS] [FILE]
//!
//! Options:
//!   -d, --data <FILE>      TOML file with template bindings
//!   --set <KEY=VALUE>      Additional scalar binding (repeatable)
//!   --syntax               Show placeholder syntax reference
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use stencil::{load_data, Data, Resolver, Value};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Minimal placeholder-template engine")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// TOML file with template bindings
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Additional scalar binding, e.g. --set title="Post 1"
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Show placeholder syntax reference
    #[arg(long)]
    syntax: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.syntax {
        print_syntax();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load bindings
    let mut bindings: Data = match &cli.data {
        Some(path) => match load_data(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error loading data '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Data::new(),
    };

    for pair in &cli.set {
        match pair.split_once('=') {
            Some((key, value)) => {
                bindings.insert(key.to_string(), Value::from(value));
            }
            None => {
                eprintln!("Error: --set expects KEY=VALUE, got '{}'", pair);
                std::process::exit(1);
            }
        }
    }

    // Read input
    let template = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let output = Resolver::with_data(bindings).parse(&template);
    print!("{}", output);
}

fn print_intro() {
    println!(
        "{}",
        r#"Stencil - minimal placeholder-template engine

USAGE:
    stencil [OPTIONS] [FILE]
    echo '<template>' | stencil

OPTIONS:
    -d, --data <FILE>    TOML file with template bindings
    --set KEY=VALUE      Additional scalar binding (repeatable)
    --syntax             Show placeholder syntax reference
    -h, --help           Print help

QUICK START:
    echo 'hello {$name}' | stencil --set name=world

Run --syntax for the full placeholder grammar."#
    );
}

fn print_syntax() {
    println!(
        "{}",
        r#"STENCIL PLACEHOLDER SYNTAX
==========================

SIMPLE REFERENCES
-----------------
{$name}    Substitute the value bound under "name"
{@name}    Same as {$name}
{#name}    Count query: numbers pass through, strings give their
           character length, sequences their element count, else 0

SELF-CLOSING TAGS
-----------------
{name/}            Substitute the value bound under "name"
{name, k=v .../}   Same, with inline arguments; arguments are handed to
                   the missing-value handler when the key is unbound

BLOCKS
------
{rows}...body...{/rows}

When "rows" is bound to a sequence of tables, the body renders once per
element, each element becoming the data set for that pass; results are
joined with newlines. Other value shapes render the body once.

EXISTENCE GATES
---------------
{!comments}...body...{/!comments}

Renders the body once, against the outer data set, only when "comments"
is bound, truthy, and non-empty. Never repeats.

DATA FILES (TOML)
-----------------
title = "Post 1"

[[rows]]
detail = "first"

[[rows]]
detail = "second"

ANYTHING ELSE
-------------
Text that does not match the grammar (unbalanced braces, unknown
sigils, an open tag with no close) passes through unchanged. Unbound
placeholders render as empty text."#
    );
}
