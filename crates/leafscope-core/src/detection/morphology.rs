use ndarray::Array2;

/// Binary structuring element as a set of (row, col) offsets from its anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: Vec<(isize, isize)>,
}

impl StructuringElement {
    /// Plus-shaped neighborhood: every offset with `|dr| + |dc| <= radius`.
    ///
    /// For radius 2:
    /// ```text
    /// . . x . .
    /// . x x x .
    /// x x x x x
    /// . x x x .
    /// . . x . .
    /// ```
    pub fn cross(radius: usize) -> Self {
        let r = radius as isize;
        let mut offsets = Vec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                if dr.abs() + dc.abs() <= r {
                    offsets.push((dr, dc));
                }
            }
        }
        Self { offsets }
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    /// Render as a boolean grid, anchor at the center.
    pub fn to_grid(&self) -> Array2<bool> {
        let r = self
            .offsets
            .iter()
            .map(|&(dr, dc)| dr.unsigned_abs().max(dc.unsigned_abs()))
            .max()
            .unwrap_or(0);
        let size = 2 * r + 1;
        let mut grid = Array2::from_elem((size, size), false);
        for &(dr, dc) in &self.offsets {
            grid[[(dr + r as isize) as usize, (dc + r as isize) as usize]] = true;
        }
        grid
    }
}

#[inline]
fn neighbor(row: usize, col: usize, (dr, dc): (isize, isize), h: usize, w: usize) -> Option<(usize, usize)> {
    let nr = row as isize + dr;
    let nc = col as isize + dc;
    if nr < 0 || nr >= h as isize || nc < 0 || nc >= w as isize {
        None
    } else {
        Some((nr as usize, nc as usize))
    }
}

/// Binary erosion: a pixel stays true only if every in-bounds pixel under the
/// element is true. Pixels outside the image do not erode.
pub fn erode(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    let (h, w) = mask.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        mask[[row, col]]
            && element.offsets().iter().all(|&o| match neighbor(row, col, o, h, w) {
                Some((nr, nc)) => mask[[nr, nc]],
                None => true,
            })
    })
}

/// Binary dilation: a pixel becomes true if any in-bounds pixel under the
/// reflected element is true.
pub fn dilate(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    let (h, w) = mask.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        element
            .offsets()
            .iter()
            .any(|&(dr, dc)| matches!(neighbor(row, col, (-dr, -dc), h, w), Some((nr, nc)) if mask[[nr, nc]]))
    })
}

/// Morphological opening (erosion followed by dilation).
///
/// Removes foreground specks smaller than the element. Never adds pixels.
pub fn morphological_opening(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    let eroded = erode(mask, element);
    dilate(&eroded, element)
}

/// Morphological closing (dilation followed by erosion).
///
/// Fills holes and gaps smaller than the element. Never removes pixels.
pub fn morphological_closing(mask: &Array2<bool>, element: &StructuringElement) -> Array2<bool> {
    let dilated = dilate(mask, element);
    erode(&dilated, element)
}
