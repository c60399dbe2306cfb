use std::io::{BufRead, BufReader, Read, Write};

use log::trace;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{i64 as parse_i64, satisfy},
    combinator::{eof, map, opt},
    multi::{count, many1},
    sequence::preceded,
};

use super::ScoringModel;
use crate::{
    alphabet::Alphabet,
    error::{Error, Result},
    io::{
        is_whitespace, parse_any_whitespace, parse_title, parse_whitespace, skip_any_whitespace,
        skip_whitespace, translate_nom_error,
    },
    score::Score,
    sequences::GAP_CHARACTER,
};


/// Marks a pair without a stored score in a plain-text scoring table.
const ABSENT_SCORE: &str = ".";

impl ScoringModel {
    /// Reads a scoring model from a plain-text substitution score table.
    ///
    /// The table may be preceded by a `# name` title line.
    /// Entries written as `.` are left absent and score the default mismatch score.
    pub fn read_plain(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let (input, scoring) = Self::parse_plain(&input).map_err(translate_nom_error)?;
        let input = skip_any_whitespace(input).map_err(translate_nom_error)?;
        if input.is_empty() {
            Ok(scoring)
        } else {
            Err(Error::Parser {
                input: input.to_string(),
                kind: nom::error::ErrorKind::Eof,
            })
        }
    }

    pub fn write_plain(&self, mut writer: impl Write) -> Result<()> {
        if !self.name.is_empty() {
            writeln!(writer, "# {}", self.name)?;
            writeln!(writer)?;
        }

        writeln!(writer, "SubstitutionScoreTable")?;

        let characters = self.characters();
        let column_width = self
            .scores
            .values()
            .map(|score| score.to_string().len())
            .max()
            .unwrap_or(1)
            .max(ABSENT_SCORE.len());

        write!(writer, "  |")?;
        for character in &characters {
            write!(writer, " {: >column_width$}", char::from(*character))?;
        }
        writeln!(writer)?;

        write!(writer, "--+")?;
        for _ in 0..(characters.len() * (column_width + 1)) {
            write!(writer, "-")?;
        }
        writeln!(writer)?;

        for &row_character in &characters {
            write!(writer, "{} |", char::from(row_character))?;
            for &column_character in &characters {
                match self.get(row_character, column_character) {
                    Some(score) => write!(writer, " {: >column_width$}", score.as_i64())?,
                    None => write!(writer, " {ABSENT_SCORE: >column_width$}")?,
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    pub(crate) fn parse_plain(input: &str) -> IResult<&str, Self> {
        let (input, name) = opt(parse_title).parse(input)?;

        // Identifier
        let input = skip_any_whitespace(input)?;
        let input = tag("SubstitutionScoreTable").parse(input)?.0;

        // First row gives the order of the characters in the columns
        let (input, column_characters) = parse_substitution_score_table_first_row(input)?;

        // Next is a fancy separator line
        let input = (
            parse_any_whitespace,
            many1(tag("-")),
            tag("+"),
            many1(tag("-")),
        )
            .parse(input)?
            .0;

        // Then we have the rows, one per column character
        let (input, rows) = count(
            parse_substitution_score_table_row(column_characters.len()),
            column_characters.len(),
        )
        .parse(input)?;

        let mut row_characters: Vec<_> = rows.iter().map(|(character, _)| *character).collect();
        let mut sorted_column_characters = column_characters.clone();
        row_characters.sort_unstable();
        sorted_column_characters.sort_unstable();
        if row_characters != sorted_column_characters {
            return Err(nom::Err::Failure(nom::error::Error {
                input,
                code: nom::error::ErrorKind::Verify,
            }));
        }

        let pairs = rows.into_iter().flat_map(|(row_character, row)| {
            column_characters
                .iter()
                .zip(row)
                .filter_map(move |(&column_character, score)| {
                    score.map(|score| (row_character, column_character, score))
                })
        });
        let scoring = Self::new(name.unwrap_or(""), pairs);

        Ok((input, scoring))
    }

    /// Reads a scoring model from `A C 2` triples, one per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    /// A line reading `done` ends the input.
    pub fn read_pairs(name: impl Into<String>, reader: impl Read) -> Result<Self> {
        let mut pairs = Vec::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.eq_ignore_ascii_case("done") {
                trace!("Found end marker after {} scoring pairs", pairs.len());
                break;
            }

            let (_, pair) = parse_scoring_pair(line).map_err(translate_nom_error)?;
            pairs.push(pair);
        }

        Ok(Self::new(name, pairs))
    }
}

fn parse_substitution_score_table_first_row(input: &str) -> IResult<&str, Vec<u8>> {
    trace!("Parsing the first row of a substitution score table");

    let input = skip_any_whitespace(input)?;
    let input = tag("|").parse(input)?.0;
    let (input, characters) = many1(preceded(parse_whitespace, parse_symbol)).parse(input)?;

    if Alphabet::new(characters.iter().copied().map(char::from)).is_err() {
        Err(nom::Err::Failure(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        }))
    } else {
        Ok((input, characters))
    }
}

fn parse_substitution_score_table_row(
    length: usize,
) -> impl FnMut(&str) -> IResult<&str, (u8, Vec<Option<Score>>)> {
    move |input| {
        let input = skip_any_whitespace(input)?;
        let (input, character) = parse_symbol(input)?;
        let input = skip_whitespace(input)?;
        let input = tag("|").parse(input)?.0;
        let (input, scores) =
            count(preceded(parse_whitespace, parse_optional_score), length).parse(input)?;
        Ok((input, (character, scores)))
    }
}

fn parse_optional_score(input: &str) -> IResult<&str, Option<Score>> {
    alt((
        map(tag(ABSENT_SCORE), |_| None),
        map(parse_i64, |score| Some(Score::from(score))),
    ))
    .parse(input)
}

fn parse_scoring_pair(input: &str) -> IResult<&str, (u8, u8, Score)> {
    let (input, a) = parse_symbol(input)?;
    let input = many1(satisfy(is_whitespace)).parse(input)?.0;
    let (input, b) = parse_symbol(input)?;
    let input = many1(satisfy(is_whitespace)).parse(input)?.0;
    let (input, score) = parse_i64(input)?;
    let input = skip_whitespace(input)?;
    let input = eof.parse(input)?.0;
    Ok((input, (a, b, Score::from(score))))
}

fn parse_symbol(input: &str) -> IResult<&str, u8> {
    map(
        satisfy(|c| c.is_ascii_graphic() && c != char::from(GAP_CHARACTER) && c != '|'),
        |c| c as u8,
    )
    .parse(input)
}
