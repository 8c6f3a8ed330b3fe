use hop_dp::{FrontierKind, HopEngine, HopEngineBuilder, HopProblem};

/// Positions 0..=n where each position can jump forward by any of `steps`.
struct Jumps {
    edges: Vec<Vec<usize>>,
}

impl Jumps {
    fn new(n: usize, steps: &[usize]) -> Self {
        let edges = (0..=n)
            .map(|i| steps.iter().map(|s| i + s).filter(|&j| j <= n).collect())
            .collect();
        Self { edges }
    }
}

impl HopProblem for Jumps {
    fn num_positions(&self) -> usize {
        self.edges.len()
    }
    fn successors(&self, position: usize) -> &[usize] {
        &self.edges[position]
    }
}

#[test]
fn path_is_monotone_and_follows_edges() {
    let problem = Jumps::new(23, &[2, 5, 7]);
    for kind in [FrontierKind::Fifo, FrontierKind::PositionHeap] {
        let engine = HopEngineBuilder::new(Jumps::new(23, &[2, 5, 7]))
            .with_frontier(kind)
            .build();
        let path = engine.run().expect("23 is reachable");
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&23));
        for window in path.windows(2) {
            assert!(problem.successors(window[0]).contains(&window[1]));
        }
    }
}

#[test]
fn fifo_hop_count_is_minimal() {
    // 23 = 7 + 7 + 7 + 2 needs four jumps
    let engine = HopEngine::new(Jumps::new(23, &[2, 5, 7]));
    assert_eq!(engine.hop_count(), Some(4));
    assert_eq!(engine.frontier_kind(), FrontierKind::Fifo);
}

#[test]
fn unreachable_parity() {
    let engine = HopEngine::new(Jumps::new(9, &[2, 4]));
    assert_eq!(engine.run(), None);
    let preds = engine.search();
    assert!((0..=9).all(|p| preds.is_reached(p) == (p % 2 == 0)));
}

#[test]
fn custom_source_and_target() {
    struct Backwards;
    impl HopProblem for Backwards {
        fn num_positions(&self) -> usize {
            4
        }
        fn source(&self) -> usize {
            3
        }
        fn target(&self) -> usize {
            0
        }
        fn successors(&self, position: usize) -> &[usize] {
            const EDGES: [&[usize]; 4] = [&[], &[0], &[1], &[2, 1]];
            EDGES[position]
        }
    }
    let engine = HopEngine::new(Backwards);
    assert_eq!(engine.run(), Some(vec![3, 1, 0]));
}
