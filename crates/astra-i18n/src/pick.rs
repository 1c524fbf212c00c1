use crate::error::LocaleError;
use rand::Rng;

/// Pick one element uniformly at random.
///
/// Uses the thread-local generator; uniform but not cryptographic.
/// An empty slice is a caller defect and reported as [`LocaleError::EmptyList`]
/// rather than an out-of-range index.
pub fn pick_random<T>(items: &[T]) -> Result<&T, LocaleError> {
    if items.is_empty() {
        return Err(LocaleError::EmptyList);
    }
    let index = rand::thread_rng().gen_range(0..items.len());
    Ok(&items[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_list_is_an_error() {
        let items: [&str; 0] = [];
        assert!(matches!(pick_random(&items), Err(LocaleError::EmptyList)));
    }

    #[test]
    fn test_single_element_always_returned() {
        let items = ["only"];
        for _ in 0..100 {
            assert_eq!(*pick_random(&items).unwrap(), "only");
        }
    }

    #[test]
    fn test_picks_are_roughly_uniform() {
        let items = ["a", "b", "c", "d", "e"];
        let draws = 10_000;
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(pick_random(&items).unwrap()).or_default() += 1;
        }

        assert_eq!(counts.len(), items.len());
        // Expected 20% each; ±5 percentage points is far beyond the
        // ~±1.2pp three-sigma band for 10k draws.
        for (item, count) in counts {
            let share = f64::from(count) / f64::from(draws);
            assert!(
                (share - 0.20).abs() < 0.05,
                "element {item} drawn with share {share}"
            );
        }
    }
}
