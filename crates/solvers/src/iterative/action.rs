/// Actions an observer can take during an iterative solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current sweep and return the latest iterate.
    StopEarly,
}
