use std::{fmt::Display, str::FromStr};

use crate::{
    error::{Error, Result},
    sequences::{GAP_CHARACTER, SequenceRole},
};

/// The set of symbols that sequences may consist of.
///
/// Symbols are graphic ASCII characters other than the gap character.
/// The order of declaration is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    characters: Vec<u8>,
}

impl Alphabet {
    pub fn new(characters: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut result = Vec::new();

        for character in characters {
            if !character.is_ascii_graphic() || character == char::from(GAP_CHARACTER) {
                return Err(Error::InvalidAlphabetCharacter(character));
            }

            let character = character as u8;
            if result.contains(&character) {
                return Err(Error::DuplicateAlphabetCharacter(char::from(character)));
            }
            result.push(character);
        }

        if result.is_empty() {
            Err(Error::EmptyAlphabet)
        } else {
            Ok(Self { characters: result })
        }
    }

    pub fn dna() -> Self {
        Self {
            characters: b"ACGT".to_vec(),
        }
    }

    pub fn characters(&self) -> &[u8] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always false, since empty alphabets cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn contains(&self, character: u8) -> bool {
        self.characters.contains(&character)
    }

    /// Returns [`Error::NotInAlphabet`] for the first character of the sequence that is not in the alphabet.
    pub fn validate(&self, sequence: &[u8], role: SequenceRole) -> Result<()> {
        match sequence
            .iter()
            .position(|character| !self.contains(*character))
        {
            Some(position) => Err(Error::NotInAlphabet {
                role,
                character: char::from(sequence[position]),
                position,
            }),
            None => Ok(()),
        }
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for character in &self.characters {
            write!(f, "{}", char::from(*character))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, sequences::SequenceRole};

    use super::Alphabet;

    #[test]
    fn parse() {
        let alphabet: Alphabet = "ACGTN".parse().unwrap();
        assert_eq!(alphabet.characters(), b"ACGTN");
        assert_eq!(alphabet.to_string(), "ACGTN");
        assert_eq!(Alphabet::dna(), "ACGT".parse().unwrap());
    }

    #[test]
    fn rejects_invalid_alphabets() {
        assert!(matches!("".parse::<Alphabet>(), Err(Error::EmptyAlphabet)));
        assert!(matches!(
            "ACA".parse::<Alphabet>(),
            Err(Error::DuplicateAlphabetCharacter('A'))
        ));
        assert!(matches!(
            "AC-".parse::<Alphabet>(),
            Err(Error::InvalidAlphabetCharacter('-'))
        ));
        assert!(matches!(
            "A C".parse::<Alphabet>(),
            Err(Error::InvalidAlphabetCharacter(' '))
        ));
        assert!(matches!(
            "Aä".parse::<Alphabet>(),
            Err(Error::InvalidAlphabetCharacter('ä'))
        ));
    }

    #[test]
    fn validate() {
        let alphabet = Alphabet::dna();
        assert!(alphabet.validate(b"GATTACA", SequenceRole::Query).is_ok());
        assert!(matches!(
            alphabet.validate(b"GATNACA", SequenceRole::Reference),
            Err(Error::NotInAlphabet {
                role: SequenceRole::Reference,
                character: 'N',
                position: 3,
            })
        ));
        assert!(matches!(
            alphabet.validate(b"acgt", SequenceRole::Query),
            Err(Error::NotInAlphabet {
                character: 'a',
                position: 0,
                ..
            })
        ));
    }
}
