use crate::models::StoreLayout;

/// Walking distance between two aisles, in aisle steps
///
/// Plain numeric gap, except inside the layout's mirrored block where aisle
/// `x` also faces `mirror(x)`:
///
/// distance = min(|x - y|, |mirror(x) - y|)   when x and y are both in the block
///
/// The mirrored term is symmetric in `x` and `y` since
/// `|sum - x - y| == |sum - y - x|`.
#[inline]
pub fn aisle_distance(x: u32, y: u32, layout: &StoreLayout) -> u64 {
    let direct = (x as i64 - y as i64).unsigned_abs();

    match layout.mirror_block {
        Some(block) if block.contains(x) && block.contains(y) => {
            let mirrored = (block.mirror(x) - y as i64).unsigned_abs();
            direct.min(mirrored)
        }
        _ => direct,
    }
}

/// Index of the aisle in `candidates` nearest to `from`
///
/// Ties go to the earliest candidate.
pub fn nearest_aisle(from: u32, candidates: &[u32], layout: &StoreLayout) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|&(idx, &aisle)| (aisle_distance(from, aisle, layout), idx))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MirrorBlock;

    #[test]
    fn test_linear_distance() {
        let layout = StoreLayout::linear();

        assert_eq!(aisle_distance(30, 80, &layout), 50);
        assert_eq!(aisle_distance(80, 30, &layout), 50);
        assert_eq!(aisle_distance(7, 7, &layout), 0);
    }

    #[test]
    fn test_mirrored_distance() {
        let layout = StoreLayout::default();

        // 106 - 30 = 76, |76 - 80| = 4
        assert_eq!(aisle_distance(30, 80, &layout), 4);
        // 106 - 30 = 76, |76 - 35| = 41, numeric gap wins
        assert_eq!(aisle_distance(30, 35, &layout), 5);
        // 106 - 25 = 81
        assert_eq!(aisle_distance(25, 81, &layout), 0);
    }

    #[test]
    fn test_outside_block_is_linear() {
        let layout = StoreLayout::default();

        assert_eq!(aisle_distance(10, 96, &layout), 86);
        assert_eq!(aisle_distance(24, 82, &layout), 58);
        // only one side inside the block
        assert_eq!(aisle_distance(30, 82, &layout), 52);
    }

    #[test]
    fn test_mirror_symmetry() {
        let layout = StoreLayout::default();

        for x in 25..=81 {
            for y in 25..=81 {
                assert_eq!(
                    aisle_distance(x, y, &layout),
                    aisle_distance(y, x, &layout),
                    "asymmetric for {} and {}",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_custom_block() {
        let layout = StoreLayout::with_mirror_block(MirrorBlock {
            start: 1,
            end: 10,
            sum: 11,
        });

        assert_eq!(aisle_distance(1, 10, &layout), 0);
        assert_eq!(aisle_distance(2, 8, &layout), 1);
    }

    #[test]
    fn test_nearest_aisle_tie_break() {
        let layout = StoreLayout::linear();

        // 8 and 12 are both 2 away from 10
        assert_eq!(nearest_aisle(10, &[12, 8, 20], &layout), Some(0));
        assert_eq!(nearest_aisle(10, &[], &layout), None);
    }
}
