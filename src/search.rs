use std::collections::HashSet;

use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::distance::Metric;
use crate::errors::*;
use crate::index::SigIndex;
use crate::iterators::HammingBallIterator;
use crate::sighash::Sighashable;
use crate::types::*;

///Signature hashing search module. Bound at construction to one index, one
///metric and one distance threshold; every call to [`search`](Self::search)
///is an independent, bounded computation over the immutable index, so one
///searcher (or many) can be used from multiple threads at once.
pub struct SigSearcher<'a, A, M> {
    index: &'a SigIndex<A>,
    metric: M,
    max_distance: u32,
}

impl<'a, A: Alphabet, M: Metric> SigSearcher<'a, A, M> {
    pub fn new(index: &'a SigIndex<A>, metric: M, max_distance: u32) -> SigSearcher<'a, A, M> {
        SigSearcher {
            index,
            metric,
            max_distance,
        }
    }

    ///The distance threshold this searcher admits matches under
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    ///Find all dictionary positions whose word is within the distance
    ///threshold of the query, as an unordered deduplicated set.
    ///
    ///Candidates are gathered by expanding the query signature to every
    ///signature within Hamming radius max_distance and scanning the buckets
    ///found there; each candidate is then verified against the real metric,
    ///so nothing in the result violates the distance bound.
    ///
    ///The expansion radius equals max_distance while a single substitution
    ///can move a signature by two bits, so matches whose edits are
    ///substitution-heavy can be missed when the substituted characters sit in
    ///different groups. This recall gap is inherent to the scheme and
    ///deliberately kept; widening the radius would trade it for a much larger
    ///candidate set.
    pub fn search(&self, query: &str) -> Result<HashSet<DictIndex>> {
        let base = query.sighash(&self.index.alphabet, &self.index.groupmap)?;
        let mut result = HashSet::new();
        for signature in HammingBallIterator::new(base, self.index.hash_size, self.max_distance) {
            self.verify_bucket(query, signature, &mut result);
        }
        Ok(result)
    }

    ///Batch form of [`search`](Self::search): evaluates many queries in
    ///parallel against the shared index. Results are per query, in query
    ///order, identical to what sequential calls would return.
    pub fn search_all(&self, queries: &[&str]) -> Result<Vec<HashSet<DictIndex>>>
    where
        A: Sync,
        M: Sync,
    {
        queries.par_iter().map(|query| self.search(query)).collect()
    }

    ///Run every word in the bucket of one expanded signature through the
    ///metric, using the bounded form so hopeless candidates are cut off early
    fn verify_bucket(&self, query: &str, signature: Signature, result: &mut HashSet<DictIndex>) {
        for &position in self.index.bucket(signature) {
            let word = &self.index.dictionary[position as usize];
            if self.metric.distance_bounded(query, word, self.max_distance) <= self.max_distance {
                result.insert(position);
            }
        }
    }
}

///Baseline searcher that runs the metric against every word in the
///dictionary. No index and no candidate filtering: results are exact (no
///recall gap), cost is linear in dictionary size. Useful for small
///dictionaries and as the reference the signature searcher is checked
///against.
pub struct BruteForceSearcher<'a, M> {
    dictionary: &'a [String],
    metric: M,
    max_distance: u32,
}

impl<'a, M: Metric> BruteForceSearcher<'a, M> {
    pub fn new(dictionary: &'a [String], metric: M, max_distance: u32) -> BruteForceSearcher<'a, M> {
        BruteForceSearcher {
            dictionary,
            metric,
            max_distance,
        }
    }

    ///All dictionary positions within the distance threshold of the query
    pub fn search(&self, query: &str) -> HashSet<DictIndex> {
        let mut result = HashSet::new();
        for (position, word) in self.dictionary.iter().enumerate() {
            if self.metric.distance_bounded(query, word, self.max_distance) <= self.max_distance {
                result.insert(position as DictIndex);
            }
        }
        result
    }
}
