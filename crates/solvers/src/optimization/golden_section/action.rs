/// Control actions supported by golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the optimum of the current bracket.
    StopEarly,
}
