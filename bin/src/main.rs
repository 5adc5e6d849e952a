use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    println,
};

use clap::Parser;

use evaluator::run_source;

#[derive(clap::Parser)]
struct Args {
    /// Script to run; without it an interactive prompt is started
    file: Option<PathBuf>,
}

fn run_file(path: PathBuf) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let values = run_source(&source)?;
    log::debug!("script produced {} value(s)", values.len());
    for value in values {
        println!("{}", value);
    }
    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    println!("Welcome to rabbit v{}", env!("CARGO_PKG_VERSION"));

    loop {
        print!(">> ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }

        // A failed line never aborts the prompt loop
        match run_source(&line) {
            Ok(values) => {
                if let Some(first) = values.first() {
                    println!("{}", first);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    println!("Thanks for using rabbit");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.file {
        Some(file) => run_file(file),
        None => run_prompt(),
    }
}
