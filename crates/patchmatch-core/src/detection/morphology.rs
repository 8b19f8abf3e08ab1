use ndarray::Array2;

/// Morphological opening (erosion followed by dilation) with a 3x3 square kernel.
///
/// Removes isolated matched cells, which are mostly chance matches of the
/// random search, while keeping coherent copied regions.
pub fn morphological_opening(mask: &Array2<bool>) -> Array2<bool> {
    dilate(&erode(mask))
}

/// A cell stays set only if its whole 3x3 neighborhood is set; cells outside
/// the mask count as unset.
pub fn erode(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        mask[[row, col]] && neighborhood(h, w, row, col).all(|cell| cell.is_some_and(|p| mask[p]))
    })
}

/// A cell becomes set if any cell of its 3x3 neighborhood is set.
pub fn dilate(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        neighborhood(h, w, row, col).any(|cell| cell.is_some_and(|p| mask[p]))
    })
}

/// The 9 cells of the 3x3 window around `(row, col)`; `None` for cells
/// falling outside a `h x w` grid.
fn neighborhood(
    h: usize,
    w: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = Option<[usize; 2]>> {
    (-1..=1_isize).flat_map(move |dr| {
        (-1..=1_isize).map(move |dc| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            (r >= 0 && r < h as isize && c >= 0 && c < w as isize).then_some([r as usize, c as usize])
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_removes_isolated_cell() {
        let mut mask = Array2::from_elem((7, 7), false);
        mask[[3, 3]] = true;
        assert!(!morphological_opening(&mask).iter().any(|&v| v));
    }

    #[test]
    fn opening_keeps_solid_block() {
        let mut mask = Array2::from_elem((9, 9), false);
        for r in 2..7 {
            for c in 2..7 {
                mask[[r, c]] = true;
            }
        }
        assert_eq!(morphological_opening(&mask), mask);
    }

    #[test]
    fn erosion_treats_outside_as_unset() {
        let mask = Array2::from_elem((3, 3), true);
        let eroded = erode(&mask);
        assert!(eroded[[1, 1]]);
        assert!(!eroded[[0, 0]]);
    }
}
