use crate::Method;

/// Emitted by an iterative solver after every sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Which iterative method produced this event.
    pub method: Method,

    /// 1-based sweep number.
    pub iter: usize,

    /// The iterate produced by this sweep.
    pub x: &'a [f64],

    /// Euclidean distance between this iterate and the previous one.
    pub err_norm: f64,
}
