//! Grouping images into pages

use crate::types::SpreadMode;

/// Group `items` into per-page groups, keeping their order.
///
/// `Single` puts every item on its own page. `Double` pairs consecutive
/// items; an odd item out forms a final group of one.
pub fn pair_spreads<T>(items: &[T], mode: SpreadMode) -> Vec<&[T]> {
    items.chunks(mode.images_per_page()).collect()
}

/// Number of pages `count` items occupy
pub fn page_count(count: usize, mode: SpreadMode) -> usize {
    count.div_ceil(mode.images_per_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_groups() {
        let items = [1, 2, 3];
        let groups = pair_spreads(&items, SpreadMode::Single);
        assert_eq!(groups, vec![&[1][..], &[2][..], &[3][..]]);
    }

    #[test]
    fn test_double_groups_with_trailing_single() {
        let items = [1, 2, 3, 4, 5];
        let groups = pair_spreads(&items, SpreadMode::Double);
        assert_eq!(groups, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn test_empty() {
        let items: [u8; 0] = [];
        assert!(pair_spreads(&items, SpreadMode::Single).is_empty());
        assert!(pair_spreads(&items, SpreadMode::Double).is_empty());
    }

    #[test]
    fn test_page_count_matches_groups() {
        for count in 0..12 {
            let items: Vec<usize> = (0..count).collect();
            for mode in [SpreadMode::Single, SpreadMode::Double] {
                assert_eq!(pair_spreads(&items, mode).len(), page_count(count, mode));
            }
            assert_eq!(page_count(count, SpreadMode::Single), count);
            assert_eq!(page_count(count, SpreadMode::Double), (count + 1) / 2);
        }
    }
}
