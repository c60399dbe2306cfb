//! Shared nom helpers for the plain-text formats.

use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::{char, satisfy},
    multi::many0,
};

use crate::error::Error;

/// Parses a `# title` line, returning the trimmed title.
pub fn parse_title(input: &str) -> IResult<&str, &str> {
    let input = skip_any_whitespace(input)?;
    let input = char('#').parse(input)?.0;
    let input = skip_whitespace(input)?;
    let (input, title) = take_till1(is_any_line_break).parse(input)?;
    Ok((input, title.trim()))
}

pub fn parse_whitespace(input: &str) -> IResult<&str, ()> {
    skip_whitespace(input).map(|input| (input, ()))
}

pub fn parse_any_whitespace(input: &str) -> IResult<&str, ()> {
    skip_any_whitespace(input).map(|input| (input, ()))
}

/// Skips whitespace within the current line.
pub fn skip_whitespace(input: &str) -> Result<&str, nom::Err<nom::error::Error<&str>>> {
    many0(satisfy(is_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

/// Skips whitespace including line breaks.
pub fn skip_any_whitespace(input: &str) -> Result<&str, nom::Err<nom::error::Error<&str>>> {
    many0(satisfy(is_any_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

pub fn is_any_whitespace(c: char) -> bool {
    is_whitespace(c) || is_any_line_break(c)
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_any_line_break(c)
}

pub fn is_any_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn translate_nom_error(error: nom::Err<nom::error::Error<&str>>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            input: error.input.to_string(),
            kind: error.code,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_title, skip_any_whitespace, skip_whitespace};

    #[test]
    fn title() {
        assert_eq!(
            parse_title("\n\n#  Simple DNA  \nrest").unwrap(),
            ("\nrest", "Simple DNA")
        );
        assert!(parse_title("SubstitutionScoreTable").is_err());
        assert!(parse_title("#\n").is_err());
    }

    #[test]
    fn whitespace() {
        assert_eq!(skip_whitespace(" \t\nA").unwrap(), "\nA");
        assert_eq!(skip_any_whitespace(" \t\r\nA").unwrap(), "A");
        assert_eq!(skip_any_whitespace("").unwrap(), "");
    }
}
