use crate::frame::{Bgr, ColorFrame};

/// Paint a `thickness` x `thickness` square centered on (row, col), clipped
/// to the frame.
pub fn stamp(frame: &mut ColorFrame, row: isize, col: isize, color: Bgr, thickness: usize) {
    let t = thickness.max(1) as isize;
    let (h, w) = (frame.height() as isize, frame.width() as isize);
    for dr in -(t / 2)..t - t / 2 {
        for dc in -(t / 2)..t - t / 2 {
            let (r, c) = (row + dr, col + dc);
            if r >= 0 && r < h && c >= 0 && c < w {
                frame.set_pixel(r as usize, c as usize, color);
            }
        }
    }
}

/// Bresenham line from `from` to `to` (both (row, col)), inclusive.
pub fn draw_line(
    frame: &mut ColorFrame,
    from: (usize, usize),
    to: (usize, usize),
    color: Bgr,
    thickness: usize,
) {
    let (mut r, mut c) = (from.0 as isize, from.1 as isize);
    let (r1, c1) = (to.0 as isize, to.1 as isize);
    let dc = (c1 - c).abs();
    let dr = -(r1 - r).abs();
    let sc = if c < c1 { 1 } else { -1 };
    let sr = if r < r1 { 1 } else { -1 };
    let mut err = dc + dr;

    loop {
        stamp(frame, r, c, color, thickness);
        if r == r1 && c == c1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dr {
            err += dr;
            c += sc;
        }
        if e2 <= dc {
            err += dc;
            r += sr;
        }
    }
}

/// Draw a closed polyline through `points`.
pub fn draw_closed_polyline(
    frame: &mut ColorFrame,
    points: &[(usize, usize)],
    color: Bgr,
    thickness: usize,
) {
    match points {
        [] => {}
        [only] => stamp(frame, only.0 as isize, only.1 as isize, color, thickness),
        _ => {
            for (i, &p) in points.iter().enumerate() {
                let next = points[(i + 1) % points.len()];
                draw_line(frame, p, next, color, thickness);
            }
        }
    }
}
