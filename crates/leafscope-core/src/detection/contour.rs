use std::collections::{HashSet, VecDeque};

use ndarray::Array2;

use super::components::connected_components;

/// Moore neighborhood, clockwise on screen starting east. Offsets are (row, col).
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Index of west in [`DIRECTIONS`].
const WEST: usize = 4;

/// Closed boundary polyline of one component, as (row, col) vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<(usize, usize)>,
}

/// Outer boundaries of every 8-connected foreground component that is not
/// enclosed by another component. Straight runs are reduced to their end
/// points.
pub fn external_contours(mask: &Array2<bool>) -> Vec<Contour> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let labeling = connected_components(mask);
    if labeling.components.is_empty() {
        return Vec::new();
    }

    let exterior = exterior_background(mask);
    let mut external_labels = HashSet::new();
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }
            let on_border = row == 0 || col == 0 || row == h - 1 || col == w - 1;
            let touches_exterior = on_border
                || exterior[[row - 1, col]]
                || exterior[[row + 1, col]]
                || exterior[[row, col - 1]]
                || exterior[[row, col + 1]];
            if touches_exterior {
                external_labels.insert(labeling.labels[[row, col]]);
            }
        }
    }

    labeling
        .components
        .iter()
        .filter(|c| external_labels.contains(&c.label))
        .map(|c| Contour {
            points: compress_runs(trace_boundary(mask, c.seed)),
        })
        .collect()
}

/// Background pixels 4-connected to the image border.
fn exterior_background(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut exterior = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();

    let seed = |row: usize,
                col: usize,
                exterior: &mut Array2<bool>,
                queue: &mut VecDeque<(usize, usize)>| {
        if !mask[[row, col]] && !exterior[[row, col]] {
            exterior[[row, col]] = true;
            queue.push_back((row, col));
        }
    };
    for col in 0..w {
        seed(0, col, &mut exterior, &mut queue);
        seed(h - 1, col, &mut exterior, &mut queue);
    }
    for row in 0..h {
        seed(row, 0, &mut exterior, &mut queue);
        seed(row, w - 1, &mut exterior, &mut queue);
    }

    while let Some((row, col)) = queue.pop_front() {
        for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
            let Some((nr, nc)) = offset(row, col, dr, dc, h, w) else {
                continue;
            };
            if !mask[[nr, nc]] && !exterior[[nr, nc]] {
                exterior[[nr, nc]] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    exterior
}

#[inline]
fn offset(row: usize, col: usize, dr: isize, dc: isize, h: usize, w: usize) -> Option<(usize, usize)> {
    let nr = row as isize + dr;
    let nc = col as isize + dc;
    if nr < 0 || nr >= h as isize || nc < 0 || nc >= w as isize {
        None
    } else {
        Some((nr as usize, nc as usize))
    }
}

fn direction_between(from: (usize, usize), to: (usize, usize)) -> Option<usize> {
    let delta = (
        to.0 as isize - from.0 as isize,
        to.1 as isize - from.1 as isize,
    );
    DIRECTIONS.iter().position(|&d| d == delta)
}

/// One Moore-neighbor step: sweep clockwise around `p` starting just after
/// the backtrack direction and stop at the first foreground pixel.
///
/// Returns the next pixel and the backtrack direction as seen from it.
fn moore_step(
    mask: &Array2<bool>,
    p: (usize, usize),
    back_dir: usize,
) -> Option<((usize, usize), usize)> {
    let (h, w) = mask.dim();
    for k in 1..=8 {
        let d = (back_dir + k) % 8;
        let (dr, dc) = DIRECTIONS[d];
        let Some(q) = offset(p.0, p.1, dr, dc, h, w) else {
            continue;
        };
        if !mask[q] {
            continue;
        }
        // The pixel examined just before `q` is background (or outside) and
        // adjacent to `q`; it becomes the new backtrack.
        let (br, bc) = DIRECTIONS[(back_dir + k - 1) % 8];
        let b = (p.0 as isize + br, p.1 as isize + bc);
        let delta = (b.0 - q.0 as isize, b.1 - q.1 as isize);
        let new_back = DIRECTIONS.iter().position(|&d| d == delta)?;
        return Some((q, new_back));
    }
    None
}

/// Trace the outer boundary of the component containing `start`, which must
/// be its first pixel in raster order.
fn trace_boundary(mask: &Array2<bool>, start: (usize, usize)) -> Vec<(usize, usize)> {
    let (h, w) = mask.dim();
    let mut points = vec![start];

    // Nothing lies west of a raster-first pixel, so west is a valid backtrack.
    let Some((first_next, mut back)) = moore_step(mask, start, WEST) else {
        return points;
    };

    let mut p = first_next;
    for _ in 0..4 * h * w + 8 {
        let Some((q, b)) = moore_step(mask, p, back) else {
            break;
        };
        if p == start && q == first_next {
            break;
        }
        points.push(p);
        p = q;
        back = b;
    }

    points
}

/// Drop vertices that continue in the same direction as the previous step.
fn compress_runs(points: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let n = points.len();
    if n <= 2 {
        return points;
    }
    let kept: Vec<(usize, usize)> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            direction_between(prev, cur) != direction_between(cur, next)
        })
        .map(|i| points[i])
        .collect();
    if kept.is_empty() {
        points
    } else {
        kept
    }
}
