/// A cyclic sequence of vertex indices supporting removal with stable indices.
///
/// Every slot keeps its original index for the lifetime of the ring; removed
/// slots are tagged dead and skipped by [`next`](Self::next) and
/// [`prev`](Self::prev), which always land on live slots.
#[derive(Debug, Clone)]
pub(crate) struct VertexRing {
    nodes: Vec<RingNode>,
    live: usize,
}

#[derive(Debug, Clone, Copy)]
struct RingNode {
    prev: usize,
    next: usize,
    live: bool,
}

impl VertexRing {
    /// Creates a ring over the indices `0..len`, all live.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let nodes = (0..len)
            .map(|i| RingNode {
                prev: (i + len - 1) % len,
                next: (i + 1) % len,
                live: true,
            })
            .collect();
        Self { nodes, live: len }
    }

    /// Number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Next live slot after `i`, wrapping around.
    #[must_use]
    pub fn next(&self, i: usize) -> usize {
        self.nodes[i].next
    }

    /// Previous live slot before `i`, wrapping around.
    #[must_use]
    pub fn prev(&self, i: usize) -> usize {
        self.nodes[i].prev
    }

    /// Removes slot `i` from the ring. Returns `false` if it was already removed.
    pub fn remove(&mut self, i: usize) -> bool {
        if !self.nodes[i].live {
            return false;
        }
        let RingNode { prev, next, .. } = self.nodes[i];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[i].live = false;
        self.live -= 1;
        true
    }

    /// Live slots in original index order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.live)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ring_wraps() {
        let ring = VertexRing::new(4);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.next(3), 0);
        assert_eq!(ring.prev(0), 3);
        assert_eq!(ring.next(1), 2);
    }

    #[test]
    fn removal_skips_dead_slots() {
        let mut ring = VertexRing::new(5);
        assert!(ring.remove(1));
        assert!(ring.remove(2));
        assert_eq!(ring.next(0), 3);
        assert_eq!(ring.prev(3), 0);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![0, 3, 4]);
    }

    #[test]
    fn removal_across_the_seam() {
        let mut ring = VertexRing::new(4);
        ring.remove(0);
        assert_eq!(ring.next(3), 1);
        assert_eq!(ring.prev(1), 3);
    }

    #[test]
    fn double_removal_is_rejected() {
        let mut ring = VertexRing::new(3);
        assert!(ring.remove(1));
        assert!(!ring.remove(1));
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn indices_stay_stable() {
        let mut ring = VertexRing::new(6);
        ring.remove(4);
        ring.remove(0);
        // Slot 5 keeps its index even though two earlier slots are gone.
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![1, 2, 3, 5]);
        assert_eq!(ring.next(5), 1);
        assert_eq!(ring.prev(5), 3);
    }
}
