use crate::frontier::FrontierKind;
use crate::{HopEngine, HopProblem};

pub struct HopEngineBuilder<P: HopProblem> {
    problem: P,
    frontier: Option<FrontierKind>,
}

impl<P: HopProblem> HopEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            frontier: None,
        }
    }
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = Some(frontier);
        self
    }
    pub fn build(self) -> HopEngine<P> {
        match self.frontier {
            Some(kind) => HopEngine::with_frontier(self.problem, kind),
            None => HopEngine::new(self.problem),
        }
    }
}
