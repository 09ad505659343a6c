use std::{fs, rc::Rc};

use boolparser::{
    host::{Host, MemoryStore, Scope, VariableMacros},
    interpreter::{parser::Parser as ExpressionParser, value::core::Value},
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// boolparser evaluates boolean and arithmetic expressions over local,
/// session and global variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells boolparser to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Keeps going past syntax errors instead of reporting them.
    #[arg(short, long)]
    lenient: bool,

    /// Declares a local variable, as NAME=VALUE.
    #[arg(long = "var", value_parser = parse_assignment)]
    vars: Vec<(String, String)>,

    /// Sets a session variable, as NAME=VALUE.
    #[arg(long = "session", value_parser = parse_assignment)]
    session: Vec<(String, String)>,

    /// Sets a global variable, as NAME=VALUE.
    #[arg(long = "global", value_parser = parse_assignment)]
    global: Vec<(String, String)>,

    /// Evaluates the compiled expression this many times, printing every
    /// result.
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    contents: String,
}

fn parse_assignment(text: &str) -> Result<(String, String), String> {
    text.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(std::io::stderr)
                                     .try_init();
}

fn store_from(pairs: &[(String, String)]) -> MemoryStore {
    pairs.iter().fold(MemoryStore::new(), |store, (name, value)| store.with(name, value))
}

fn main() {
    install_tracing();
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                              eprintln!("Failed to read the input file '{}'. \
                                                         Perhaps this file does not exist?",
                                                        &args.contents);
                                              std::process::exit(1);
                                          })
    } else {
        args.contents
    };

    let session = Rc::new(store_from(&args.session));
    let global = Rc::new(store_from(&args.global));
    let macros = Rc::new(VariableMacros::new(session.clone(), global.clone()));
    let host = Host::new(session, global, macros);

    let scope = Scope::new();
    for (name, value) in &args.vars {
        scope.declare(name, Value::from(value.as_str()));
    }

    let mut parser = ExpressionParser::new(&scope, std::iter::empty(), host);
    let thunk = parser.parse(expression.trim_end(), !args.lenient).unwrap_or_else(|e| {
                                                                      eprintln!("{e}");
                                                                      std::process::exit(1);
                                                                  });
    debug!(parts = ?parser.parts(), "compiled expression");

    for _ in 0..args.repeat {
        match thunk.eval() {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}
