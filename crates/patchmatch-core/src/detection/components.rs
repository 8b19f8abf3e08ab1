use std::collections::HashMap;

use ndarray::Array2;

/// Connected set of mask cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    /// Root label assigned during labeling.
    pub label: u32,
    /// Number of cells.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col), inclusive.
    pub bbox: (usize, usize, usize, usize),
    /// Member cells in raster order.
    pub cells: Vec<(usize, usize)>,
}

/// Two-pass connected component labeling with union-find, 4-connectivity.
///
/// Returns components sorted by area, largest first.
pub fn connected_components(mask: &Array2<bool>) -> Vec<Component> {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    // Index 0 is the background label.
    let mut parent: Vec<u32> = vec![0];

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }
            let up = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            labels[[row, col]] = match (up, left) {
                (0, 0) => {
                    let label = parent.len() as u32;
                    parent.push(label);
                    label
                }
                (l, 0) | (0, l) => l,
                (a, b) => {
                    union(&mut parent, a, b);
                    a.min(b)
                }
            };
        }
    }

    let mut by_root: HashMap<u32, Component> = HashMap::new();
    for ((row, col), &label) in labels.indexed_iter() {
        if label == 0 {
            continue;
        }
        let root = find(&parent, label);
        let entry = by_root.entry(root).or_insert_with(|| Component {
            label: root,
            area: 0,
            bbox: (row, row, col, col),
            cells: Vec::new(),
        });
        entry.area += 1;
        entry.bbox.0 = entry.bbox.0.min(row);
        entry.bbox.1 = entry.bbox.1.max(row);
        entry.bbox.2 = entry.bbox.2.min(col);
        entry.bbox.3 = entry.bbox.3.max(col);
        entry.cells.push((row, col));
    }

    let mut components: Vec<Component> = by_root.into_values().collect();
    components.sort_unstable_by(|a, b| b.area.cmp(&a.area).then(a.label.cmp(&b.label)));
    components
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Smaller root wins so labels stay in discovery order.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
