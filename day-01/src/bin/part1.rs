use clap::Parser;
use day_01::{cli::Args, input::read_input, part1::process};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let file = read_input(&args.input)?;
    let result = process(&file).context("process part 1")?;
    println!("{}", result);
    Ok(())
}
