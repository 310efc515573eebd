use std::fmt::Display;

/// One of the conditions a homeomorphism must satisfy, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Check {
    Bijective,
    ForwardContinuous,
    InverseContinuous,
    ForwardPreservesOpenSets,
    InversePreservesOpenSets,
    ForwardPreservesClosedSets,
    InversePreservesClosedSets,
}

impl Check {
    /// Every check, in the order [`Homeomorphism::is_valid`](super::Homeomorphism::is_valid) runs them.
    pub const ALL: [Check; 7] = [
        Check::Bijective,
        Check::ForwardContinuous,
        Check::InverseContinuous,
        Check::ForwardPreservesOpenSets,
        Check::InversePreservesOpenSets,
        Check::ForwardPreservesClosedSets,
        Check::InversePreservesClosedSets,
    ];

    /// Human-readable sentence describing this check's failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Check::Bijective => "The function is not bijective.",
            Check::ForwardContinuous => "The function is not continuous.",
            Check::InverseContinuous => "The inverse function is not continuous.",
            Check::ForwardPreservesOpenSets => "The function does not preserve open sets.",
            Check::InversePreservesOpenSets => {
                "The inverse function does not preserve open sets."
            }
            Check::ForwardPreservesClosedSets => "The function does not preserve closed sets.",
            Check::InversePreservesClosedSets => {
                "The inverse function does not preserve closed sets."
            }
        }
    }
}

impl Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Check::Bijective => "bijective",
            Check::ForwardContinuous => "forward continuous",
            Check::InverseContinuous => "inverse continuous",
            Check::ForwardPreservesOpenSets => "forward preserves open sets",
            Check::InversePreservesOpenSets => "inverse preserves open sets",
            Check::ForwardPreservesClosedSets => "forward preserves closed sets",
            Check::InversePreservesClosedSets => "inverse preserves closed sets",
        };
        write!(f, "{name}")
    }
}

/// Outcome of every check, evaluated without short-circuiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityReport {
    outcomes: Vec<(Check, bool)>,
}

impl ValidityReport {
    pub(crate) fn new(outcomes: Vec<(Check, bool)>) -> Self {
        Self { outcomes }
    }

    /// Returns the outcome of `check`, or `None` if it was not evaluated.
    pub fn passed(&self, check: Check) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == check)
            .map(|(_, passed)| *passed)
    }

    /// Returns the failed checks in evaluation order.
    pub fn failures(&self) -> Vec<Check> {
        self.outcomes
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(check, _)| *check)
            .collect()
    }

    /// Returns true if every check passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, passed)| *passed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Check, bool)> + '_ {
        self.outcomes.iter().copied()
    }
}

impl Display for ValidityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ValidityReport {{")?;
        for (check, passed) in &self.outcomes {
            writeln!(f, "  {}: {}", check, if *passed { "yes" } else { "no" })?;
        }
        write!(f, "  valid: {}\n}}", if self.is_valid() { "yes" } else { "no" })
    }
}
