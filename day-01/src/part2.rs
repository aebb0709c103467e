use crate::{error::Day01Error, lists::LocationLists, parser::parse_input};

/// Sums each left value multiplied by how often it appears in the right column.
#[tracing::instrument(skip(lists), fields(records = lists.len()))]
pub fn frequency_score(lists: &LocationLists) -> Result<i64, Day01Error> {
    let counts = lists.right_frequencies();
    tracing::debug!(distinct = counts.len(), "built right column frequencies");

    let overflow = || Day01Error::Overflow {
        stage: "frequency score",
    };

    lists.left().iter().try_fold(0i64, |score, value| {
        let count = counts.get(value).copied().unwrap_or(0);
        let count = i64::try_from(count).map_err(|_| overflow())?;
        value
            .checked_mul(count)
            .and_then(|weighted| score.checked_add(weighted))
            .ok_or_else(overflow)
    })
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_input(input)?;
    let result = frequency_score(&lists)?;

    Ok(result.to_string())
}
