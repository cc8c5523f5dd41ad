//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Real-time Semantics
///
/// Conditions resolve within a single tick and only ever report `Success`
/// or `Failure`. Actions may span many ticks (e.g. "walk to a point") and
/// report `Running` until they finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The activity reached its goal.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The activity could not be carried out.
    Failure,

    /// The behavior is still in progress and must be ticked again.
    ///
    /// This is not a suspension point: the next tick re-walks the tree
    /// from the root and may pick a different branch.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }
}

impl From<bool> for Status {
    /// Maps a predicate outcome: `true` is `Success`, `false` is `Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_maps_to_success_or_failure() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
    }

    #[test]
    fn predicates_are_exclusive() {
        for status in [Status::Success, Status::Failure, Status::Running] {
            let hits = [
                status.is_success(),
                status.is_failure(),
                status.is_running(),
            ];
            assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        }
    }
}
