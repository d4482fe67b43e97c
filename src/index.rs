use crate::alphabet::Alphabet;
use crate::errors::*;
use crate::sighash::*;
use crate::types::*;

///The inverted index over a dictionary: one bucket per possible signature
///value, each holding the positions of the words that hash to it. Built once
///by [`SigIndexer`] and never mutated afterwards; any number of searchers may
///borrow it concurrently.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SigIndex<A> {
    ///The indexed words; a word's position in this vector is its identity
    pub dictionary: Vec<String>,

    ///The alphabet the index was built against
    pub alphabet: A,

    ///Group assignment for every alphabet position
    pub groupmap: GroupMap,

    ///2^hash_size buckets of dictionary positions; the order within a bucket
    ///carries no meaning
    pub buckets: Vec<Vec<DictIndex>>,

    ///Signature width in bits
    pub hash_size: u8,

    ///Length in characters of the longest word seen at build time
    pub max_length: usize,
}

impl<A: Alphabet> SigIndex<A> {
    ///The bucket for a signature value
    pub fn bucket(&self, signature: Signature) -> &[DictIndex] {
        &self.buckets[signature as usize]
    }

    ///Number of words in the dictionary
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

///Builds a [`SigIndex`] over a dictionary. Constructing the indexer derives
///the group map for the alphabet; indexing itself is a one-shot step that
///consumes the indexer and moves the alphabet into the index.
pub struct SigIndexer<A> {
    alphabet: A,
    groupmap: GroupMap,
    hash_size: u8,
    debug: bool,
}

impl<A: Alphabet> SigIndexer<A> {
    ///Set up an indexer for the given alphabet and signature width in bits
    ///(between 1 and [`MAX_HASH_SIZE`], see [`DEFAULT_HASH_SIZE`])
    pub fn new(alphabet: A, hash_size: u8) -> Result<SigIndexer<A>> {
        let groupmap = make_group_map(&alphabet, hash_size)?;
        Ok(SigIndexer {
            alphabet,
            groupmap,
            hash_size,
            debug: false,
        })
    }

    ///Print build progress to stderr
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    ///The group map derived for the alphabet
    pub fn groupmap(&self) -> &GroupMap {
        &self.groupmap
    }

    ///Create an index over the given dictionary. Runs in two passes: the
    ///first hashes every word and counts how many words fall into each
    ///bucket, the second allocates each bucket at exactly that size and
    ///fills it. An empty dictionary yields a valid index with every bucket
    ///empty. Errors raised by the alphabet for unmappable characters abort
    ///the build unchanged.
    pub fn create_index(self, dictionary: Vec<String>) -> Result<SigIndex<A>> {
        if self.debug {
            eprintln!(
                "Computing signatures for all {} words in the dictionary...",
                dictionary.len()
            );
        }

        //First pass: hash every word, count bucket sizes
        let mut counts: Vec<DictIndex> = vec![0; 1usize << self.hash_size];
        let mut signatures: Vec<Signature> = Vec::with_capacity(dictionary.len());
        let mut max_length = 0;
        for word in dictionary.iter() {
            let signature = word.sighash(&self.alphabet, &self.groupmap)?;
            counts[signature as usize] += 1;
            let length = word.chars().count();
            if length > max_length {
                max_length = length;
            }
            signatures.push(signature);
        }

        if self.debug {
            let filled = counts.iter().filter(|&&count| count > 0).count();
            eprintln!(" - Found {} distinct signatures", filled);
        }

        //Second pass: allocate every bucket at its exact size and fill it
        let mut buckets: Vec<Vec<DictIndex>> = counts
            .iter()
            .map(|&count| Vec::with_capacity(count as usize))
            .collect();
        for (position, signature) in signatures.into_iter().enumerate() {
            buckets[signature as usize].push(position as DictIndex);
        }

        Ok(SigIndex {
            dictionary,
            alphabet: self.alphabet,
            groupmap: self.groupmap,
            buckets,
            hash_size: self.hash_size,
            max_length,
        })
    }
}
