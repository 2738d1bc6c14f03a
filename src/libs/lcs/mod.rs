//! Longest common subsequence over pairs and collections of sequences.
//!
//! [`table`] fills the prefix-length grid, [`backtrack`] enumerates every
//! distinct optimal subsequence from it, and [`matrix`] applies the
//! length-only computation pairwise across a sequence collection.

pub mod backtrack;
pub mod matrix;
pub mod table;

pub use backtrack::enumerate_all;
pub use matrix::pairwise_matrix;
pub use table::LcsTable;

/// All longest common subsequences of two strings, per `char`.
///
/// Returns the lexicographically sorted set together with the common
/// length, or `None` when the strings share no symbol (including when
/// either is empty).
///
/// ```
/// use lcsq::libs::lcs::common_subsequences;
///
/// let (seqs, len) = common_subsequences("ABCBDAB", "BDCABA").unwrap();
/// assert_eq!(seqs, vec!["BCAB", "BCBA", "BDAB"]);
/// assert_eq!(len, 4);
///
/// assert!(common_subsequences("abc", "").is_none());
/// ```
pub fn common_subsequences(x: &str, y: &str) -> Option<(Vec<String>, usize)> {
    let xs: Vec<char> = x.chars().collect();
    let ys: Vec<char> = y.chars().collect();

    let table = LcsTable::build(&xs, &ys);
    enumerate_all(&xs, &ys, &table).map(|(seqs, len)| {
        let seqs = seqs
            .into_iter()
            .map(|s| s.into_iter().collect::<String>())
            .collect();
        (seqs, len)
    })
}
