use clap::Parser;
use day_01::{cli::Args, input::read_input, part2::process};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let file = read_input(&args.input)?;
    let result = process(&file).context("process part 2")?;
    println!("{}", result);
    Ok(())
}
