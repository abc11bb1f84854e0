use std::error::Error;
use std::process;

use clap::Command;
use duct::cmd;

type AnyResult<T> = Result<T, Box<dyn Error>>;
type StepFn = fn() -> AnyResult<()>;
type Step = (&'static str, StepFn);

fn cli() -> Command {
    Command::new("glance-task")
        .about("Tasks for managing the glance workspace")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("lint").about("Run rustfmt and clippy"))
        .subcommand(Command::new("test").about("Run the workspace tests"))
        .subcommand(
            Command::new("bench")
                .about("Run the palette benchmarks")
                .subcommand(Command::new("check").about("Compile benchmarks without running them")),
        )
        .subcommand(Command::new("all").about("Run lint, tests and a benchmark build"))
}

fn main() {
    if let Err(error) = run() {
        eprintln!("xtask error: {error}");
        process::exit(1);
    }
}

fn run() -> AnyResult<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("lint", _)) => run_lint(),
        Some(("test", _)) => run_tests(),
        Some(("bench", subcommand)) => match subcommand.subcommand() {
            Some(("check", _)) => run_bench_check(),
            _ => run_benches(),
        },
        Some(("all", _)) => run_all(),
        _ => unreachable!(),
    }
}

fn run_lint() -> AnyResult<()> {
    println!("Running Rust lint...");
    run_cmd("cargo", &["fmt", "--all", "--check"])?;
    run_cmd(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    Ok(())
}

fn run_tests() -> AnyResult<()> {
    println!("Running Rust tests...");
    run_cmd("cargo", &["test", "--workspace"])
}

fn run_benches() -> AnyResult<()> {
    println!("Running benchmarks...");
    run_cmd("cargo", &["bench", "-p", "glance"])
}

fn run_bench_check() -> AnyResult<()> {
    println!("Building benchmarks...");
    run_cmd("cargo", &["bench", "-p", "glance", "--no-run"])
}

fn run_all() -> AnyResult<()> {
    let mut errors = Vec::new();

    const STEPS: &[Step] = &[
        ("Rust lint", run_lint),
        ("Rust tests", run_tests),
        ("Benchmark build", run_bench_check),
    ];

    for (label, step) in STEPS {
        if let Err(error) = step() {
            eprintln!("{label} failed: {error}");
            errors.push(format!("{label}: {error}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("One or more tasks failed:\n{}", errors.join("\n")).into())
    }
}

fn run_cmd(program: &str, args: &[&str]) -> AnyResult<()> {
    println!("> {} {}", program, args.join(" "));
    cmd(program, args).run()?;
    Ok(())
}
