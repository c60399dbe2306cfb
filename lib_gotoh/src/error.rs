use thiserror::Error;

use crate::sequences::SequenceRole;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),

    #[error("Invalid input: the {0} sequence is empty.")]
    EmptySequence(SequenceRole),

    #[error(
        "The {role} sequence contains the character '{character}' at position {position}, which is not part of the alphabet."
    )]
    NotInAlphabet {
        role: SequenceRole,
        character: char,
        position: usize,
    },

    #[error("The alphabet is empty.")]
    EmptyAlphabet,

    #[error(
        "The character '{0}' cannot be part of an alphabet. Alphabet characters must be printable ASCII and must not be the gap character."
    )]
    InvalidAlphabetCharacter(char),

    #[error("The character '{0}' was encountered twice in the alphabet.")]
    DuplicateAlphabetCharacter(char),

    #[error(
        "The aligned sequences have different lengths: the aligned reference has length {reference_length}, but the aligned query has length {query_length}."
    )]
    AlignedLengthMismatch {
        reference_length: usize,
        query_length: usize,
    },
}
