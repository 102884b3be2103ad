use std::collections::HashMap;
use std::hash::Hash;

/// Frequency of each distinct value, most frequent first.
///
/// Values with equal counts keep the order in which they were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // Vec::sort_by is stable.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, ties broken by first occurrence.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    mode_with_count(values).map(|(value, _)| value)
}

/// Most frequent value and how often it occurs.
pub fn mode_with_count<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}

/// Number of distinct values.
pub fn distinct_count<T, I>(values: I) -> usize
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<std::collections::HashSet<T>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tie_prefers_first_seen() {
        assert_eq!(mode(["A", "B", "A", "B"]), Some("A"));
        assert_eq!(mode(["B", "A", "A", "B"]), Some("B"));
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode(["A", "B", "B", "C"]), Some("B"));
        assert_eq!(mode_with_count(["x", "y", "y"]), Some(("y", 2)));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["c", "a", "b", "a", "b", "d"]);
        assert_eq!(counts, vec![("a", 2), ("b", 2), ("c", 1), ("d", 1)]);
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count([1, 1, 2, 3, 3]), 3);
        assert_eq!(distinct_count(Vec::<u8>::new()), 0);
    }
}
