//! Predecessor bookkeeping produced by the search engine.
//!
//! Each reached position records the position it was first reached from. The
//! source records itself, which is how path reconstruction knows where to stop.

/// Map from reached position to the predecessor that first reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    parents: Vec<Option<usize>>,
}

impl PredecessorMap {
    /// Empty map over `num_positions` positions; nothing is reached yet.
    pub fn new(num_positions: usize) -> Self {
        Self {
            parents: vec![None; num_positions],
        }
    }

    /// Number of positions covered by the map, reached or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Record `predecessor` for `position` unless it is already reached.
    ///
    /// Returns `true` if this call reached the position.
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    #[inline]
    pub fn mark(&mut self, position: usize, predecessor: usize) -> bool {
        let slot = &mut self.parents[position];
        if slot.is_some() {
            return false;
        }
        *slot = Some(predecessor);
        true
    }

    /// Predecessor of `position`, or `None` if it was never reached.
    #[inline]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.parents.get(position).copied().flatten()
    }

    #[inline]
    pub fn is_reached(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    pub fn reached_count(&self) -> usize {
        self.parents.iter().filter(|p| p.is_some()).count()
    }

    /// Walk predecessors back from `target` to the self-marked source.
    ///
    /// Returns the positions in forward order (source first, `target` last),
    /// or `None` if `target` was never reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        let mut path = vec![target];
        let mut current = target;
        loop {
            let parent = self.get(current)?;
            if parent == current {
                break;
            }
            // a chain longer than the map means the parents form a cycle
            if path.len() > self.parents.len() {
                return None;
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::PredecessorMap;

    #[test]
    fn first_mark_wins() {
        let mut m = PredecessorMap::new(4);
        assert!(m.mark(0, 0));
        assert!(m.mark(2, 0));
        assert!(!m.mark(2, 1));
        assert_eq!(m.get(2), Some(0));
        assert_eq!(m.reached_count(), 2);
        assert!(!m.is_reached(3));
    }

    #[test]
    fn path_walks_back_to_source() {
        let mut m = PredecessorMap::new(5);
        m.mark(0, 0);
        m.mark(2, 0);
        m.mark(4, 2);
        assert_eq!(m.path_to(4), Some(vec![0, 2, 4]));
        assert_eq!(m.path_to(0), Some(vec![0]));
        assert_eq!(m.path_to(3), None);
    }

    #[test]
    fn out_of_range_lookup_is_unreached() {
        let m = PredecessorMap::new(2);
        assert_eq!(m.get(7), None);
        assert_eq!(m.path_to(7), None);
        assert!(!m.is_empty());
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn cyclic_parents_do_not_loop() {
        let mut m = PredecessorMap::new(3);
        m.mark(1, 2);
        m.mark(2, 1);
        assert_eq!(m.path_to(2), None);
    }
}
