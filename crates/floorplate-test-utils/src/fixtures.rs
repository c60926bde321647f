//! Reusable space fixtures.
//!
//! All fixtures use a 9 ft height and level `z = 0` unless stated.

use floorplate_core::{GridPosition, Space};

/// A `w` x `d` space at the origin.
pub fn room(id: &str, w: f64, d: f64) -> Space {
    Space::new(id, w, d, 9.0).expect("fixture dimensions are positive")
}

/// A `w` x `d` space anchored at `(x, y, 0)`.
pub fn room_at(id: &str, w: f64, d: f64, x: f64, y: f64) -> Space {
    room(id, w, d).at(GridPosition::new(x, y, 0.0))
}

/// `n` equal spaces tiled along +x from the origin, ids `"{prefix}{i}"`.
pub fn row_of(prefix: &str, n: usize, w: f64, d: f64) -> Vec<Space> {
    (0..n)
        .map(|i| room_at(&format!("{prefix}{i}"), w, d, i as f64 * w, 0.0))
        .collect()
}

/// A `cols` x `rows` block of `size` x `size` spaces, ids `"r{row}c{col}"`.
pub fn grid_of(cols: usize, rows: usize, size: f64) -> Vec<Space> {
    let mut out = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            out.push(room_at(
                &format!("r{r}c{c}"),
                size,
                size,
                c as f64 * size,
                r as f64 * size,
            ));
        }
    }
    out
}
