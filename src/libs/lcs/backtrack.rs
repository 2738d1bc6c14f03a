use std::collections::{BTreeSet, HashMap};

use super::table::LcsTable;

/// Enumerate every distinct longest common subsequence of `x` and `y`.
///
/// `table` must be the prefix-length table built from the same pair. The
/// returned list is deduplicated and sorted ascending in lexicographic
/// order, paired with the common length. `None` means the sequences share
/// no symbol at all, which covers empty inputs as well; a zero-length
/// result is never reported as a set holding the empty sequence.
pub fn enumerate_all<T>(x: &[T], y: &[T], table: &LcsTable) -> Option<(Vec<Vec<T>>, usize)>
where
    T: Clone + Ord,
{
    let len = table.lcs_len();
    if len == 0 {
        return None;
    }

    let set = collect_sets(x, y, table);
    Some((set.into_iter().collect(), len))
}

/// Walk the table from `(m, n)` and build, per coordinate pair, the full
/// set of optimal common subsequences of the corresponding prefixes.
///
/// The traversal is an explicit work stack instead of recursion, so long
/// sequences cannot exhaust the call stack, and finished cells are kept in
/// a memo map keyed by `(i, j)`. Distinct paths through the table reach the
/// same cell over and over; without the memo the walk is exponential.
fn collect_sets<T>(x: &[T], y: &[T], table: &LcsTable) -> BTreeSet<Vec<T>>
where
    T: Clone + Ord,
{
    let m = x.len();
    let n = y.len();

    let mut memo: HashMap<(usize, usize), BTreeSet<Vec<T>>> = HashMap::new();
    let mut stack = vec![(m, n)];

    while let Some(&(i, j)) = stack.last() {
        if memo.contains_key(&(i, j)) {
            stack.pop();
            continue;
        }

        if i == 0 || j == 0 {
            memo.insert((i, j), BTreeSet::from([Vec::new()]));
            stack.pop();
            continue;
        }

        if x[i - 1] == y[j - 1] {
            // On a match the diagonal branch alone is optimal:
            // cell(i, j) == cell(i - 1, j - 1) + 1.
            match memo.get(&(i - 1, j - 1)) {
                Some(base) => {
                    let extended = base
                        .iter()
                        .map(|s| {
                            let mut s = s.clone();
                            s.push(x[i - 1].clone());
                            s
                        })
                        .collect();
                    memo.insert((i, j), extended);
                    stack.pop();
                }
                None => stack.push((i - 1, j - 1)),
            }
            continue;
        }

        // Follow every branch that can still reach the optimum. On a tie
        // both neighbors qualify; that is exactly where alternate
        // subsequences come from, so the comparison must stay `>=`.
        let up = table.cell(i - 1, j) >= table.cell(i, j - 1);
        let left = table.cell(i, j - 1) >= table.cell(i - 1, j);

        let mut pending = false;
        if up && !memo.contains_key(&(i - 1, j)) {
            stack.push((i - 1, j));
            pending = true;
        }
        if left && !memo.contains_key(&(i, j - 1)) {
            stack.push((i, j - 1));
            pending = true;
        }
        if pending {
            continue;
        }

        let mut set = BTreeSet::new();
        if up {
            set.extend(memo[&(i - 1, j)].iter().cloned());
        }
        if left {
            set.extend(memo[&(i, j - 1)].iter().cloned());
        }
        memo.insert((i, j), set);
        stack.pop();
    }

    memo.remove(&(m, n)).unwrap_or_default()
}
