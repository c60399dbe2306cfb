use anyhow::{Result, anyhow};
use log::debug;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use utf8_chars::BufReadCharsExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub comment: String,
    pub sequence: String,
}

pub fn parse_pair_fasta_file(path: impl AsRef<Path>) -> Result<(FastaRecord, FastaRecord)> {
    let mut records = parse_fasta_file(path, 2)?;
    let second = records.remove(1);
    let first = records.remove(0);
    Ok((first, second))
}

pub fn parse_single_fasta_file(path: impl AsRef<Path>) -> Result<FastaRecord> {
    Ok(parse_fasta_file(path, 1)?.remove(0))
}

fn parse_fasta_file(path: impl AsRef<Path>, expected_records: usize) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    debug!("Parsing fasta file {path:?}");

    let file =
        File::open(path).map_err(|error| anyhow!("Unable to open input file {path:?}: {error}"))?;
    let records = parse_fasta(file)
        .map_err(|error| anyhow!("Unable to parse fasta file {path:?}: {error}"))?;

    if records.len() != expected_records {
        Err(anyhow!(
            "Expected {expected_records} record(s) in fasta file {path:?}, but found {}",
            records.len()
        ))
    } else {
        Ok(records)
    }
}

/// Parses all records of a fasta input.
///
/// Record headers start with `>` at the beginning of a line.
/// Sequence lines are concatenated, and whitespace inside sequences is dropped.
fn parse_fasta(reader: impl Read) -> Result<Vec<FastaRecord>> {
    enum State {
        FileStart,
        ParseId,
        ParseComment,
        ParseSequence,
    }

    let mut input = CharacterIterator::new(BufReader::new(reader));
    let mut state = State::FileStart;
    let mut records = Vec::new();
    let mut newline = true;

    while let Some(character) = input.next().transpose()? {
        match state {
            State::FileStart => match character {
                Character::Newline => newline = true,
                Character::RecordStart if newline => {
                    records.push(FastaRecord::empty());
                    state = State::ParseId;
                }
                Character::RecordStart => {
                    return Err(anyhow!(
                        "First fasta record is not preceded by a newline character"
                    ));
                }
                Character::Other(c) => {
                    newline = false;
                    if !c.is_whitespace() {
                        return Err(anyhow!(
                            "Found non-whitespace character before first fasta record: {c}"
                        ));
                    }
                }
            },
            State::ParseId => match character {
                Character::Newline => {
                    newline = true;
                    state = State::ParseSequence;
                }
                Character::Other(c) if c.is_whitespace() => state = State::ParseComment,
                Character::Other(c) => current_record(&mut records).id.push(c),
                Character::RecordStart => current_record(&mut records).id.push('>'),
            },
            State::ParseComment => match character {
                Character::Newline => {
                    newline = true;
                    state = State::ParseSequence;
                }
                Character::Other(c) => current_record(&mut records).comment.push(c),
                Character::RecordStart => current_record(&mut records).comment.push('>'),
            },
            State::ParseSequence => match character {
                Character::Newline => newline = true,
                Character::RecordStart if newline => {
                    records.push(FastaRecord::empty());
                    state = State::ParseId;
                }
                Character::RecordStart => {
                    return Err(anyhow!("Found '>' inside a sequence line"));
                }
                Character::Other(c) => {
                    newline = false;
                    if !c.is_whitespace() {
                        current_record(&mut records).sequence.push(c);
                    }
                }
            },
        }
    }

    if records.is_empty() {
        return Err(anyhow!("Input contains no fasta record"));
    }

    for record in &mut records {
        record.comment = record.comment.trim().to_string();
    }

    Ok(records)
}

fn current_record(records: &mut [FastaRecord]) -> &mut FastaRecord {
    records
        .last_mut()
        .unwrap_or_else(|| unreachable!("records are pushed before they are parsed"))
}

impl FastaRecord {
    fn empty() -> Self {
        Self {
            id: String::new(),
            comment: String::new(),
            sequence: String::new(),
        }
    }

    /// The id followed by the comment, if there is one.
    pub fn name(&self) -> String {
        if self.comment.is_empty() {
            self.id.clone()
        } else {
            format!("{} {}", self.id, self.comment)
        }
    }
}

enum Character {
    Newline,
    RecordStart,
    Other(char),
}

struct CharacterIterator<Reader: Read + ?Sized> {
    reader: BufReader<Reader>,
}

impl<Reader: Read> CharacterIterator<Reader> {
    fn new(reader: BufReader<Reader>) -> Self {
        Self { reader }
    }
}

impl<Reader: Read + ?Sized> Iterator for CharacterIterator<Reader> {
    type Item = Result<Character>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader
            .read_char_raw()
            .map(|result| {
                result.map(|c| match c {
                    '\n' | '\r' => Character::Newline,
                    '>' => Character::RecordStart,
                    c => Character::Other(c),
                })
            })
            .map_err(|error| anyhow!("Error reading character from fasta input: {error}"))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::{FastaRecord, parse_fasta};

    #[test]
    fn pair() {
        let input = "\n>ref first sequence\nACGT\nAC\n\n>query\r\nAG T\n";
        let records = parse_fasta(input.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                FastaRecord {
                    id: "ref".into(),
                    comment: "first sequence".into(),
                    sequence: "ACGTAC".into(),
                },
                FastaRecord {
                    id: "query".into(),
                    comment: "".into(),
                    sequence: "AGT".into(),
                },
            ]
        );
        assert_eq!(records[0].name(), "ref first sequence");
        assert_eq!(records[1].name(), "query");
    }

    #[test]
    fn malformed() {
        assert!(parse_fasta("".as_bytes()).is_err());
        assert!(parse_fasta("ACGT\n".as_bytes()).is_err());
        assert!(parse_fasta(" >a\nACGT\n".as_bytes()).is_err());
        assert!(parse_fasta(">a\nAC>GT\n".as_bytes()).is_err());
    }

    #[test]
    fn record_without_sequence() {
        let records = parse_fasta(">a".as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a");
        assert!(records[0].sequence.is_empty());
    }
}
