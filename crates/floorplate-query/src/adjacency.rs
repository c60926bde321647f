//! Edge-touching adjacency between spaces.
//!
//! Two spaces are adjacent iff they are on the same level (the exact
//! `z` key the occupancy index uses) and an edge of one rotation-adjusted
//! rectangle coincides exactly with the opposite edge of the other over a
//! positive-length interval.
//! Touching at a single corner point does not count.
//!
//! The scan is the plain O(n²) pairwise loop. Working sets are the rooms
//! of one building, tens to low hundreds of spaces.

use floorplate_core::{Rect, Space, SpaceId};
use indexmap::{IndexMap, IndexSet};

/// Which side of the first space a contact lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The `min_x` edge (the other space is to the west).
    MinX,
    /// The `max_x` edge (the other space is to the east).
    MaxX,
    /// The `min_y` edge.
    MinY,
    /// The `max_y` edge.
    MaxY,
}

impl Side {
    /// The side of the other space that touches this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::MinX => Self::MaxX,
            Self::MaxX => Self::MinX,
            Self::MinY => Self::MaxY,
            Self::MaxY => Self::MinY,
        }
    }
}

/// An adjacent pair together with its shared edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    /// First space of the pair (earlier in the input).
    pub a: SpaceId,
    /// Second space of the pair.
    pub b: SpaceId,
    /// Side of `a` that touches `b`.
    pub side: Side,
    /// Length of the shared edge segment (feet, > 0).
    pub length: f64,
}

/// Length of the overlap of `[a0, a1)` and `[b0, b1)`, if positive.
fn overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> Option<f64> {
    let len = a1.min(b1) - a0.max(b0);
    (len > 0.0).then_some(len)
}

/// The shared edge between two spaces, as seen from `a`.
pub fn contact_between(a: &Space, b: &Space) -> Option<(Side, f64)> {
    if !a.position().same_level(&b.position()) {
        return None;
    }
    let ra = Rect::of(a);
    let rb = Rect::of(b);

    if ra.max_x == rb.min_x {
        if let Some(len) = overlap(ra.min_y, ra.max_y, rb.min_y, rb.max_y) {
            return Some((Side::MaxX, len));
        }
    }
    if rb.max_x == ra.min_x {
        if let Some(len) = overlap(ra.min_y, ra.max_y, rb.min_y, rb.max_y) {
            return Some((Side::MinX, len));
        }
    }
    if ra.max_y == rb.min_y {
        if let Some(len) = overlap(ra.min_x, ra.max_x, rb.min_x, rb.max_x) {
            return Some((Side::MaxY, len));
        }
    }
    if rb.max_y == ra.min_y {
        if let Some(len) = overlap(ra.min_x, ra.max_x, rb.min_x, rb.max_x) {
            return Some((Side::MinY, len));
        }
    }
    None
}

/// Every adjacent pair in `spaces`, in input order.
///
/// Pairs sharing an id are skipped.
pub fn contacts(spaces: &[Space]) -> Vec<Contact> {
    let mut out = Vec::new();
    for (i, a) in spaces.iter().enumerate() {
        for b in &spaces[i + 1..] {
            if a.id() == b.id() {
                continue;
            }
            if let Some((side, length)) = contact_between(a, b) {
                out.push(Contact {
                    a: a.id().clone(),
                    b: b.id().clone(),
                    side,
                    length,
                });
            }
        }
    }
    out
}

/// Build the symmetric adjacency graph of `spaces`.
///
/// Every input id appears as a key, including spaces with no neighbours.
///
/// # Examples
///
/// ```
/// use floorplate_core::{GridPosition, Space};
/// use floorplate_query::adjacency;
///
/// let a = Space::new("a", 10.0, 10.0, 9.0).unwrap();
/// let b = Space::new("b", 10.0, 10.0, 9.0)
///     .unwrap()
///     .at(GridPosition::new(10.0, 0.0, 0.0));
/// let graph = adjacency(&[a, b]);
/// assert!(graph.are_adjacent(&"a".into(), &"b".into()));
/// assert!(graph.are_adjacent(&"b".into(), &"a".into()));
/// ```
pub fn adjacency(spaces: &[Space]) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::default();
    for space in spaces {
        graph.neighbours.entry(space.id().clone()).or_default();
    }
    for contact in contacts(spaces) {
        graph.link(contact.a, contact.b);
    }
    graph
}

/// Symmetric map from space id to the ids it shares an edge with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdjacencyGraph {
    neighbours: IndexMap<SpaceId, IndexSet<SpaceId>>,
}

impl AdjacencyGraph {
    fn link(&mut self, a: SpaceId, b: SpaceId) {
        self.neighbours
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.neighbours.entry(b).or_default().insert(a);
    }

    /// Neighbours of `id`, or `None` if `id` was not in the input.
    pub fn neighbours(&self, id: &SpaceId) -> Option<&IndexSet<SpaceId>> {
        self.neighbours.get(id)
    }

    /// Number of neighbours of `id` (0 if unknown).
    pub fn degree(&self, id: &SpaceId) -> usize {
        self.neighbours.get(id).map_or(0, IndexSet::len)
    }

    /// `true` if `a` and `b` share an edge.
    pub fn are_adjacent(&self, a: &SpaceId, b: &SpaceId) -> bool {
        self.neighbours.get(a).is_some_and(|n| n.contains(b))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbours.values().map(IndexSet::len).sum::<usize>() / 2
    }

    /// Number of spaces (keys).
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// `true` if the graph has no spaces.
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Iterate `(id, neighbours)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&SpaceId, &IndexSet<SpaceId>)> {
        self.neighbours.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplate_core::{GridPosition, Rotation};

    fn room(id: &str, w: f64, d: f64, x: f64, y: f64) -> Space {
        Space::new(id, w, d, 9.0)
            .unwrap()
            .at(GridPosition::new(x, y, 0.0))
    }

    #[test]
    fn shared_vertical_edge() {
        let a = room("a", 10.0, 10.0, 0.0, 0.0);
        let b = room("b", 10.0, 10.0, 10.0, 0.0);
        assert_eq!(contact_between(&a, &b), Some((Side::MaxX, 10.0)));
        assert_eq!(contact_between(&b, &a), Some((Side::MinX, 10.0)));
    }

    #[test]
    fn shared_horizontal_edge_partial_overlap() {
        let a = room("a", 10.0, 10.0, 0.0, 0.0);
        let b = room("b", 10.0, 5.0, 4.0, 10.0);
        assert_eq!(contact_between(&a, &b), Some((Side::MaxY, 6.0)));
        assert_eq!(contact_between(&b, &a), Some((Side::MinY, 6.0)));
    }

    #[test]
    fn corner_touch_is_not_adjacency() {
        let a = room("a", 10.0, 10.0, 0.0, 0.0);
        let b = room("b", 10.0, 10.0, 10.0, 10.0);
        assert_eq!(contact_between(&a, &b), None);
    }

    #[test]
    fn gap_is_not_adjacency() {
        let a = room("a", 10.0, 10.0, 0.0, 0.0);
        let b = room("b", 10.0, 10.0, 11.0, 0.0);
        assert_eq!(contact_between(&a, &b), None);
    }

    #[test]
    fn different_levels_never_touch() {
        let a = room("a", 10.0, 10.0, 0.0, 0.0);
        let b = room("b", 10.0, 10.0, 10.0, 0.0).at(GridPosition::new(10.0, 0.0, 12.0));
        assert_eq!(contact_between(&a, &b), None);
    }

    #[test]
    fn rotation_is_respected() {
        // 20x10 rotated becomes 10x20, so its east edge is at x = 10.
        let a = room("a", 20.0, 10.0, 0.0, 0.0).rotated(Rotation::Deg90);
        let b = room("b", 5.0, 5.0, 10.0, 15.0);
        assert_eq!(contact_between(&a, &b), Some((Side::MaxX, 5.0)));
    }

    #[test]
    fn graph_is_symmetric_and_lists_isolated_spaces() {
        let spaces = vec![
            room("a", 10.0, 10.0, 0.0, 0.0),
            room("b", 10.0, 10.0, 10.0, 0.0),
            room("c", 10.0, 10.0, 0.0, 10.0),
            room("lonely", 5.0, 5.0, 100.0, 100.0),
        ];
        let g = adjacency(&spaces);
        assert_eq!(g.len(), 4);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(&"a".into()), 2);
        assert_eq!(g.degree(&"lonely".into()), 0);
        assert!(g.neighbours(&"lonely".into()).is_some());
        // b and c only meet at the corner (10, 10).
        assert!(!g.are_adjacent(&"b".into(), &"c".into()));
        for (id, ns) in g.iter() {
            for n in ns {
                assert!(g.are_adjacent(n, id));
            }
        }
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let g = adjacency(&[]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn opposite_sides_pair_up() {
        for side in [Side::MinX, Side::MaxX, Side::MinY, Side::MaxY] {
            assert_eq!(side.opposite().opposite(), side);
        }
    }
}
