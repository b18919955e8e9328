use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use guardwalk::Lab;
use log::{debug, LevelFilter};

/// Walk the lab guard and count the obstructions that would trap it.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Map of the lab
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Print the patrolled map before the answers
    #[arg(short, long, default_value_t = false)]
    render: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn run(args: &Args) -> Result<(), String> {
    let text = fs::read_to_string(&args.input)
        .map_err(|err| format!("cannot read {}: {err}", args.input.display()))?;
    let lab: Lab = text.parse().map_err(|err| format!("{}: {err}", args.input.display()))?;
    debug!("loaded a {}x{} lab, guard at {}", lab.dims().0, lab.dims().1, lab.start().location);

    let mut walk = lab.walk();
    let patrol = walk.run().map_err(|err| err.to_string())?;
    if args.render {
        print!("{walk}");
    }

    let traps = lab.count_loop_inducing_obstructions().map_err(|err| err.to_string())?;

    println!("{}", patrol.visited.len());
    println!("{traps}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
