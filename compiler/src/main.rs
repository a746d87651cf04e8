//! whilst demo driver
//!
//! Runs the bundled example programs through the pretty-printer, the type
//! checker and the interpreter.

mod demos;

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use whilst::Config;

use demos::{Demo, Program};

#[derive(Parser)]
#[command(name = "whilst")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter and type checker for a small while-language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Policy configuration (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Use the strict policies instead of the reference ones
    #[arg(long, global = true, conflicts_with = "config")]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one demo program, or all of them
    Demo {
        /// Demo name (see `whilst list`)
        name: Option<String>,

        /// Print a representation instead of running
        #[arg(long, value_enum)]
        emit: Option<EmitType>,
    },

    /// List the bundled demo programs
    List,

    /// Show version and active policies
    Info,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum EmitType {
    /// Pretty-printed program
    Pretty,
    /// Abstract Syntax Tree (JSON)
    Ast,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = match (&cli.config, cli.strict) {
        (Some(path), _) => Config::load(path)?,
        (None, true) => Config::strict(),
        (None, false) => Config::default(),
    };

    match cli.command {
        Commands::Demo { name, emit } => demo(name.as_deref(), emit, &config),
        Commands::List => list(),
        Commands::Info => info(&config),
    }
}

fn demo(name: Option<&str>, emit: Option<EmitType>, config: &Config) -> Result<()> {
    let selected = match name {
        Some(name) => vec![
            demos::find(name).ok_or_else(|| miette::miette!("Unknown demo `{}`", name))?,
        ],
        None => demos::all(),
    };

    for demo in &selected {
        match emit {
            Some(EmitType::Pretty) => println!("{}", pretty(demo)),
            Some(EmitType::Ast) => {
                let json = match &demo.program {
                    Program::Expr(e) => serde_json::to_string_pretty(e),
                    Program::Stmt(s) => serde_json::to_string_pretty(s),
                }
                .map_err(|e| miette::miette!("Failed to serialize AST: {}", e))?;
                println!("{}", json);
            }
            None => run_demo(demo, config),
        }
    }

    Ok(())
}

fn pretty(demo: &Demo) -> String {
    match &demo.program {
        Program::Expr(e) => e.pretty(),
        Program::Stmt(s) => s.pretty(),
    }
}

fn run_demo(demo: &Demo, config: &Config) {
    println!("******* {} ({})", demo.name, demo.description);
    println!("  {}", pretty(demo));

    match &demo.program {
        Program::Expr(expr) => {
            let report = whilst::inspect(expr, config);
            println!("  value: {}", report.value);
            println!("  type:  {}", report.ty);
        }
        Program::Stmt(stmt) => match whilst::run(stmt, config) {
            Ok(outcome) => {
                for value in &outcome.printed {
                    println!("  print: {}", value);
                }
                println!("  values: {}", outcome.values);
                println!("  types:  {}", outcome.types);
            }
            // One failing demo does not stop the others
            Err(report) => eprintln!("{:?}", report),
        },
    }
}

fn list() -> Result<()> {
    for demo in demos::all() {
        let kind = match demo.program {
            Program::Expr(_) => "expr",
            Program::Stmt(_) => "stmt",
        };
        println!("{:<12} {:<5} {}", demo.name, kind, demo.description);
    }
    Ok(())
}

fn info(config: &Config) -> Result<()> {
    println!("whilst");
    println!("Version: {}", whilst::VERSION);
    println!();
    println!("Policies:");
    println!("  int equals:         {:?}", config.eval.int_equals);
    println!("  lesser result:      {:?}", config.check.lesser_result);
    println!("  bool guards:        {}", config.check.require_bool_guards);
    println!("  reassignment:       {:?}", config.check.reassignment);
    println!("  branch bindings:    {:?}", config.check.branch_bindings);

    Ok(())
}
