use std::collections::HashMap;

use crate::errors::*;
use crate::types::*;

///Defines the alphabet: maps characters onto dense indices in the range
///[0, size()). An index is only valid against the alphabet it was built with,
///the mapping must not change for the lifetime of the index.
pub trait Alphabet {
    ///Map a character to its index in the alphabet. What happens for
    ///characters outside the alphabet's domain is up to the implementation:
    ///raise an error or fold them onto some designated index. Either way the
    ///outcome is passed through unchanged by everything built on top.
    fn map_char(&self, ch: char) -> Result<CharIndexType>;

    ///All characters this alphabet can represent
    fn chars(&self) -> Vec<char>;

    ///The number of distinct character indices
    fn size(&self) -> usize;
}

impl<A: Alphabet + ?Sized> Alphabet for &A {
    fn map_char(&self, ch: char) -> Result<CharIndexType> {
        (**self).map_char(ch)
    }

    fn chars(&self) -> Vec<char> {
        (**self).chars()
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

///An alphabet over a contiguous range of characters, mapped by scalar value.
///The cheapest possible mapping, suitable for plain ASCII ranges like a-z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharRangeAlphabet {
    first: char,
    last: char,
}

impl CharRangeAlphabet {
    pub fn new(first: char, last: char) -> Result<Self> {
        if last < first {
            return Err(SigfuzzError::invalid_argument(
                "last",
                format!("range end {:?} precedes range start {:?}", last, first),
            ));
        }
        let size = last as u32 - first as u32 + 1;
        if size > CharIndexType::MAX as u32 {
            return Err(SigfuzzError::invalid_argument(
                "last",
                format!("range of {} characters exceeds the maximum alphabet size", size),
            ));
        }
        Ok(CharRangeAlphabet { first, last })
    }
}

impl Alphabet for CharRangeAlphabet {
    fn map_char(&self, ch: char) -> Result<CharIndexType> {
        if ch < self.first || ch > self.last {
            return Err(SigfuzzError::UnknownCharacter(ch));
        }
        Ok((ch as u32 - self.first as u32) as CharIndexType)
    }

    fn chars(&self) -> Vec<char> {
        (self.first..=self.last).collect()
    }

    fn size(&self) -> usize {
        self.last as usize - self.first as usize + 1
    }
}

///An alphabet over an explicit set of characters, in the order given.
///Duplicate characters keep their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharSetAlphabet {
    chars: Vec<char>,
    indices: HashMap<char, CharIndexType>,
}

impl CharSetAlphabet {
    pub fn new<I>(chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut ordered: Vec<char> = Vec::new();
        let mut indices: HashMap<char, CharIndexType> = HashMap::new();
        for ch in chars {
            if indices.contains_key(&ch) {
                continue;
            }
            if ordered.len() >= CharIndexType::MAX as usize {
                return Err(SigfuzzError::invalid_argument(
                    "chars",
                    "character set exceeds the maximum alphabet size",
                ));
            }
            indices.insert(ch, ordered.len() as CharIndexType);
            ordered.push(ch);
        }
        Ok(CharSetAlphabet {
            chars: ordered,
            indices,
        })
    }
}

impl Alphabet for CharSetAlphabet {
    fn map_char(&self, ch: char) -> Result<CharIndexType> {
        self.indices
            .get(&ch)
            .copied()
            .ok_or(SigfuzzError::UnknownCharacter(ch))
    }

    fn chars(&self) -> Vec<char> {
        self.chars.clone()
    }

    fn size(&self) -> usize {
        self.chars.len()
    }
}
