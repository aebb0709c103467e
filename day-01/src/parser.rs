use nom::{
    bytes::complete::{take_till1, take_while, take_while1},
    character::complete::{digit1, i64 as integer, one_of},
    combinator::{all_consuming, eof, opt, recognize},
    error::{ContextError, ErrorKind, ParseError},
    sequence::{delimited, pair, preceded, separated_pair},
    IResult,
};
use nom_locate::LocatedSpan;

use crate::{error::Day01Error, lists::LocationLists};

pub type Span<'a> = LocatedSpan<&'a str>;

type RecordResult<'a, O> = IResult<Span<'a>, O, RecordError<'a>>;

/// Where a record stopped parsing, and the innermost context that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordError<'a> {
    pub input: Span<'a>,
    pub reason: &'static str,
}

impl<'a> ParseError<Span<'a>> for RecordError<'a> {
    fn from_error_kind(input: Span<'a>, _kind: ErrorKind) -> Self {
        Self {
            input,
            reason: "unrecognised record",
        }
    }

    fn append(_: Span<'a>, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<Span<'a>> for RecordError<'a> {
    fn add_context(input: Span<'a>, reason: &'static str, _other: Self) -> Self {
        Self { input, reason }
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
}

fn separator0(input: Span) -> RecordResult<Span> {
    take_while(is_separator)(input)
}

fn token(input: Span) -> RecordResult<Span> {
    nom::error::context("missing value", take_till1(is_separator))(input)
}

fn signed_digits(input: Span) -> RecordResult<Span> {
    nom::error::context(
        "not an integer",
        all_consuming(recognize(pair(opt(one_of("+-")), digit1))),
    )(input)
}

fn in_range(input: Span) -> RecordResult<i64> {
    nom::error::context("value out of range", all_consuming(integer))(input)
}

fn value(input: Span) -> RecordResult<i64> {
    let (rest, digits) = token(input)?;
    signed_digits(digits)?;
    let (_, value) = in_range(digits)?;
    Ok((rest, value))
}

/// Parses one record: two integers separated by any run of whitespace.
pub fn parse_record(input: Span) -> RecordResult<(i64, i64)> {
    delimited(
        separator0,
        separated_pair(
            value,
            nom::error::context("missing value", take_while1(is_separator)),
            value,
        ),
        preceded(
            separator0,
            nom::error::context("unexpected extra value", eof),
        ),
    )(input)
}

/// Parses every non-blank line into the two location columns.
#[tracing::instrument(skip(lines))]
pub fn parse_lines<'a, I>(lines: I) -> Result<LocationLists, Day01Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let lists = lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<LocationLists, _>>()?;

    tracing::debug!(records = lists.len(), "parsed location lists");
    Ok(lists)
}

#[tracing::instrument(skip(input))]
pub fn parse_input(input: &str) -> Result<LocationLists, Day01Error> {
    parse_lines(input.lines())
}

fn parse_line(number: usize, line: &str) -> Result<(i64, i64), Day01Error> {
    match parse_record(Span::new(line)) {
        Ok((_, record)) => Ok(record),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let offset = e.input.location_offset();
            let len = e.input.fragment().trim_end().len();
            tracing::debug!(line = number, offset, reason = e.reason, "rejected record");
            Err(Day01Error::malformed(number, line, (offset, len), e.reason))
        }
        Err(nom::Err::Incomplete(_)) => Err(Day01Error::malformed(
            number,
            line,
            (0, line.len()),
            "incomplete record",
        )),
    }
}
