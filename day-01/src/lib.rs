pub mod cli;
pub mod error;
pub mod input;
pub mod lists;
pub mod parser;
pub mod part1;
pub mod part2;

pub use error::Day01Error;
pub use lists::{FrequencyMap, LocationLists};

/// Both answers for one puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub total_distance: u64,
    pub frequency_score: i64,
}

/// Parses the input once and computes both answers.
#[tracing::instrument(skip(input))]
pub fn solve(input: &str) -> Result<Answer, Day01Error> {
    let lists = parser::parse_input(input)?;

    Ok(Answer {
        total_distance: part1::total_distance(&lists)?,
        frequency_score: part2::frequency_score(&lists)?,
    })
}
