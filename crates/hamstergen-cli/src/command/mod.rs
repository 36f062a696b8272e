use clap::{Parser, Subcommand};

use self::evolve::EvolveArg;

mod evolve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve enemy pools toward the target power
    Evolve(#[clap(flatten)] EvolveArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Evolve(EvolveArg::default())) {
        Mode::Evolve(arg) => evolve::run(&arg)?,
    }
    Ok(())
}
