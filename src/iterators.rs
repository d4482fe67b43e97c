use crate::types::*;

///////////////////////////////////////////////////////////////////////////////////////

/// Iterates over all signatures in the Hamming ball of a base signature:
/// every signature reachable by flipping a subset of at most `radius` of the
/// `hash_size` bit positions, each subset produced exactly once.
///
/// The base signature itself (the empty subset) comes first. After that the
/// flipped position sets are enumerated depth-first with strictly increasing
/// positions, so for radius 2 over 4 bits the subsets come out as
/// {0} {0,1} {0,2} {0,3} {1} {1,2} {1,3} {2} {2,3} {3}.
///
/// The traversal keeps an explicit stack of chosen positions instead of
/// recursing, so depth stays bounded for any width and radius. Total work is
/// the sum of C(hash_size, k) for k = 0..=radius.
pub struct HammingBallIterator {
    base: Signature,
    current: Signature,
    hash_size: u8,
    radius: u32,
    //flipped bit positions, strictly increasing from bottom to top
    stack: Vec<u8>,
    started: bool,
    finished: bool,
}

impl HammingBallIterator {
    pub fn new(base: Signature, hash_size: u8, radius: u32) -> HammingBallIterator {
        HammingBallIterator {
            base,
            current: base,
            hash_size,
            radius,
            stack: Vec::with_capacity(radius.min(hash_size as u32) as usize),
            started: false,
            finished: false,
        }
    }

    ///The signature at the center of the ball
    pub fn base(&self) -> Signature {
        self.base
    }
}

impl Iterator for HammingBallIterator {
    type Item = Signature;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.base);
        }
        //descend: flip one more bit, one position past the deepest flip
        if (self.stack.len() as u32) < self.radius {
            let position = self.stack.last().map_or(0, |last| last + 1);
            if position < self.hash_size {
                self.stack.push(position);
                self.current ^= 1 << position;
                return Some(self.current);
            }
        }
        //advance: move the deepest flip one position up, dropping levels that
        //have no positions left
        while let Some(position) = self.stack.pop() {
            self.current ^= 1 << position;
            if position + 1 < self.hash_size {
                self.stack.push(position + 1);
                self.current ^= 1 << (position + 1);
                return Some(self.current);
            }
        }
        self.finished = true;
        None
    }
}
