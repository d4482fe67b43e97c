///Computes the edit distance between two strings. Implementations must be
///symmetric in cost handling but are otherwise free in what counts as an
///edit (plain Levenshtein, Damerau variants, weighted confusions, ...).
pub trait Metric {
    ///The exact distance between two strings
    fn distance(&self, first: &str, second: &str) -> u32 {
        self.distance_bounded(first, second, u32::MAX)
    }

    ///Bounded form: once the true distance is certain to exceed `budget` the
    ///implementation may return any value greater than `budget`. Such a
    ///return value only certifies "more than budget", it is not the distance.
    fn distance_bounded(&self, first: &str, second: &str, budget: u32) -> u32;
}

impl<M: Metric + ?Sized> Metric for &M {
    fn distance(&self, first: &str, second: &str) -> u32 {
        (**self).distance(first, second)
    }

    fn distance_bounded(&self, first: &str, second: &str, budget: u32) -> u32 {
        (**self).distance_bounded(first, second, budget)
    }
}

///Plain Levenshtein distance: insertions, deletions and substitutions all
///cost 1, computed over characters (not bytes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    fn distance_bounded(&self, first: &str, second: &str, budget: u32) -> u32 {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        levenshtein(&a, &b, budget).unwrap_or_else(|| budget.saturating_add(1))
    }
}

///Compute levenshtein distance between two character slices.
///Returns None if the budget is exceeded.
pub fn levenshtein(a: &[char], b: &[char], budget: u32) -> Option<u32> {
    //Freely adapted from levenshtein-rs (MIT licensed, 2016 Titus Wormer <tituswormer@gmail.com>)
    if a == b {
        return Some(0);
    }

    let length_a = a.len();
    let length_b = b.len();

    if length_a == 0 {
        if length_b > budget as usize {
            return None;
        } else {
            return Some(length_b as u32);
        }
    } else if length_a > length_b {
        if length_a - length_b > budget as usize {
            return None;
        }
    }
    if length_b == 0 {
        if length_a > budget as usize {
            return None;
        } else {
            return Some(length_a as u32);
        }
    } else if length_b > length_a {
        if length_b - length_a > budget as usize {
            return None;
        }
    }

    let mut cache: Vec<usize> = (1..).take(length_a).collect();
    let mut distance_a;
    let mut distance_b;
    let mut result = 0;

    for (index_b, elem_b) in b.iter().enumerate() {
        result = index_b;
        distance_a = index_b;

        for (index_a, elem_a) in a.iter().enumerate() {
            distance_b = if elem_a == elem_b {
                distance_a
            } else {
                distance_a + 1
            };

            distance_a = cache[index_a];

            result = if distance_a > result {
                if distance_b > result {
                    result + 1
                } else {
                    distance_b
                }
            } else if distance_b > distance_a {
                distance_a + 1
            } else {
                distance_b
            };

            cache[index_a] = result;
        }
    }

    if result > budget as usize {
        None
    } else {
        Some(result as u32)
    }
}
