use crate::{error::Day01Error, lists::LocationLists, parser::parse_input};

/// Pairs the smallest left value with the smallest right value, the second
/// smallest with the second smallest, and so on, summing the distances.
#[tracing::instrument(skip(lists), fields(records = lists.len()))]
pub fn total_distance(lists: &LocationLists) -> Result<u64, Day01Error> {
    let mut sorted = lists.clone();
    sorted.sort();

    sorted
        .left()
        .iter()
        .zip(sorted.right())
        .try_fold(0u64, |total, (a, b)| total.checked_add(a.abs_diff(*b)))
        .ok_or(Day01Error::Overflow {
            stage: "total distance",
        })
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lists = parse_input(input)?;
    let result = total_distance(&lists)?;

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

    #[test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("11", process(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_empty_input() -> miette::Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }

    #[rstest]
    #[case("3 3\n3 9\n1 3\n2 5\n4 3\n3 4")]
    #[case("1 3\n3 9\n3 4\n2 5\n3 3\n4 3")]
    fn test_line_order_does_not_matter(#[case] shuffled: &str) -> miette::Result<()> {
        assert_eq!(process(EXAMPLE)?, process(shuffled)?);
        Ok(())
    }

    #[test_log::test]
    fn test_symmetric_under_column_swap() -> miette::Result<()> {
        let lists = parse_input(EXAMPLE)?;
        let forward = total_distance(&lists)?;
        let backward = total_distance(&lists.swapped())?;
        assert_eq!(forward, backward);
        Ok(())
    }

    #[test]
    fn test_negative_values() -> miette::Result<()> {
        let lists = LocationLists::from_columns(vec![-5, 10], vec![5, -10])?;
        // sorted: [-5, 10] vs [-10, 5]
        assert_eq!(10, total_distance(&lists)?);
        Ok(())
    }

    #[test]
    fn test_extreme_difference_does_not_wrap() -> miette::Result<()> {
        let lists = LocationLists::from_columns(vec![i64::MIN], vec![i64::MAX])?;
        assert_eq!(u64::MAX, total_distance(&lists)?);
        Ok(())
    }

    #[test]
    fn test_overflow() -> miette::Result<()> {
        let lists =
            LocationLists::from_columns(vec![i64::MIN, i64::MIN], vec![i64::MAX, i64::MAX])?;
        assert!(matches!(
            total_distance(&lists),
            Err(Day01Error::Overflow { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(process("3 4\n7").is_err());
    }
}
