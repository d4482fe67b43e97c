use crate::alphabet::Alphabet;
use crate::errors::*;
use crate::types::*;

///Produces an even distribution of alphabet positions over `hash_size` hash
///groups: with a running target of size()/hash_size characters per group, each
///group takes the rounded target and the rounding error is carried into the
///next group, so the running total converges exactly on size() after the last
///group. Group ids are handed out to alphabet positions in index order.
///
///Per-group counts never differ by more than 1 from size()/hash_size and the
///assignment is fully deterministic, so a map derived from the same alphabet
///and width always agrees with a previously built index.
pub fn make_group_map<A>(alphabet: &A, hash_size: u8) -> Result<GroupMap>
where
    A: Alphabet + ?Sized,
{
    if hash_size < 1 || hash_size > MAX_HASH_SIZE {
        return Err(SigfuzzError::invalid_argument(
            "hash_size",
            format!("signature width must be between 1 and {} bits, got {}", MAX_HASH_SIZE, hash_size),
        ));
    }
    let size = alphabet.size();
    let ratio = size as f64 / hash_size as f64;
    let mut share = ratio;
    let mut groupmap: GroupMap = vec![0; size];
    let mut position = 0;
    for group in 0..hash_size {
        let step = share.round();
        share = ratio + (share - step);
        for _ in 0..step as usize {
            if position < size {
                groupmap[position] = group as GroupIndexType;
                position += 1;
            }
        }
    }
    //positions the rounding left over all land in the last group
    while position < size {
        groupmap[position] = hash_size - 1;
        position += 1;
    }
    Ok(groupmap)
}

///Trait for objects that can be signature-hashed (string-like)
pub trait Sighashable {
    fn sighash<A: Alphabet + ?Sized>(&self, alphabet: &A, groupmap: &GroupMap) -> Result<Signature>;
}

impl Sighashable for str {
    ///Compute the signature for this string: one bit per character group that
    ///occurs in it, set with bitwise OR. The signature is a set of present
    ///groups rather than a multiset, so neither character order nor repetition
    ///changes it; one insertion or deletion moves it by at most one bit and
    ///one substitution by at most two.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sigfuzz::*;
    /// # use sigfuzz::test::*;
    /// let alphabet = get_test_alphabet();
    /// let groupmap = make_group_map(&alphabet, DEFAULT_HASH_SIZE).unwrap();
    /// let signature = "listen".sighash(&alphabet, &groupmap).unwrap();
    /// assert_eq!(signature, "silent".sighash(&alphabet, &groupmap).unwrap());
    /// ```
    fn sighash<A: Alphabet + ?Sized>(&self, alphabet: &A, groupmap: &GroupMap) -> Result<Signature> {
        let mut signature: Signature = 0;
        for ch in self.chars() {
            let charindex = alphabet.map_char(ch)?;
            let group = groupmap.get(charindex as usize).ok_or_else(|| {
                SigfuzzError::invalid_argument(
                    "alphabet",
                    format!(
                        "character index {} falls outside the group map (length {})",
                        charindex,
                        groupmap.len()
                    ),
                )
            })?;
            signature |= 1 << *group;
        }
        Ok(signature)
    }
}
