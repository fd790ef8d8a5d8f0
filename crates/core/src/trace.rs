use std::fmt;

use crate::Matrix;

/// Controls whether steps carry a copy of the working state.
///
/// Snapshots cost O(n²) per step for elimination, so callers solving larger
/// systems can turn them off and keep only the descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SnapshotPolicy {
    #[default]
    Always,
    Never,
}

/// A copy of the working state at a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Matrix(Matrix),
    Vector(Vec<f64>),
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(m) => write!(f, "{m}"),
            Self::Vector(v) => write!(f, "{}", format_vector(v)),
        }
    }
}

/// A single entry of a solver trace.
///
/// Steps are created by [`Trace::record`] and never change afterwards, so
/// the fields are only readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    index: usize,
    description: String,
    snapshot: Option<Snapshot>,
}

impl Step {
    /// Position of this step within its trace (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.snapshot {
            Some(snapshot) => write!(f, "{}\n{snapshot}", self.description),
            None => write!(f, "{}", self.description),
        }
    }
}

/// Ordered, append-only record of the steps a solver took.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    policy: SnapshotPolicy,
    steps: Vec<Step>,
}

impl Trace {
    #[must_use]
    pub fn new(policy: SnapshotPolicy) -> Self {
        Self {
            policy,
            steps: Vec::new(),
        }
    }

    /// Appends a step without a snapshot.
    pub fn record(&mut self, description: impl Into<String>) {
        self.push(description.into(), None);
    }

    /// Appends a step, capturing a snapshot if the policy allows it.
    ///
    /// The closure is only called when snapshots are enabled.
    pub fn record_with<F>(&mut self, description: impl Into<String>, snapshot: F)
    where
        F: FnOnce() -> Snapshot,
    {
        let snapshot = match self.policy {
            SnapshotPolicy::Always => Some(snapshot()),
            SnapshotPolicy::Never => None,
        };
        self.push(description.into(), snapshot);
    }

    /// Appends every step of `other`, renumbering them after the current ones.
    pub fn extend(&mut self, other: Trace) {
        for step in other.steps {
            self.push(step.description, step.snapshot);
        }
    }

    fn push(&mut self, description: String, snapshot: Option<Snapshot>) {
        self.steps.push(Step {
            index: self.steps.len(),
            description,
            snapshot,
        });
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the step descriptions in order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(Step::description)
    }

    /// Renders every step (description plus snapshot) as text.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

/// Formats a vector as `[a, b, c]` using the shortest round-trip form.
#[must_use]
pub fn format_vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        let mut trace = Trace::new(SnapshotPolicy::Always);
        trace.record("first");
        trace.record_with("second", || Snapshot::Vector(vec![1.0, 2.0]));

        let indices: Vec<usize> = trace.steps().iter().map(Step::index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(trace.descriptions().collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(
            trace.steps()[1].snapshot(),
            Some(&Snapshot::Vector(vec![1.0, 2.0]))
        );
    }

    #[test]
    fn never_policy_skips_snapshot_closure() {
        let mut trace = Trace::new(SnapshotPolicy::Never);
        trace.record_with("step", || panic!("snapshot must not be built"));
        assert_eq!(trace.len(), 1);
        assert!(trace.steps()[0].snapshot().is_none());
    }

    #[test]
    fn extend_renumbers_appended_steps() {
        let mut first = Trace::default();
        first.record("a");
        let mut second = Trace::default();
        second.record("b");
        second.record("c");

        first.extend(second);

        let indices: Vec<usize> = first.steps().iter().map(Step::index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(first.descriptions().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn render_includes_snapshot_below_description() {
        let mut trace = Trace::default();
        trace.record_with("y", || Snapshot::Vector(vec![0.5, -1.0]));
        trace.record("done");
        assert_eq!(trace.render(), vec!["y\n[0.5, -1.0]", "done"]);
    }

    #[test]
    fn format_vector_uses_round_trip_form() {
        assert_eq!(format_vector(&[0.0, 1.5, -2.0]), "[0.0, 1.5, -2.0]");
        assert_eq!(format_vector(&[]), "[]");
    }
}
