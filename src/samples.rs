//! Fixed sample definitions for the FullSim / FastSim / Refined comparison
//!
//! Every regression plot compares the same four samples: detailed simulation
//! (the regression target), fast simulation (the network input), the refined
//! output on jets the network saw during training/validation, and the refined
//! output on held-out test jets.

use crate::dataset::Selection;

/// Placeholder in branch templates, replaced by a sample's branch suffix.
pub const CLASS_PLACEHOLDER: &str = "CLASS";

/// One of the fixed comparison samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleClass {
    /// Detailed simulation ground truth
    Full,
    /// Fast simulation input
    Fast,
    /// Refined output, train+validation jets
    Refined,
    /// Refined output, held-out test jets
    RefinedTest,
}

impl SampleClass {
    /// All samples in drawing order (FullSim first, it anchors axes and ratios).
    pub const ALL: [SampleClass; 4] = [
        SampleClass::Full,
        SampleClass::Fast,
        SampleClass::Refined,
        SampleClass::RefinedTest,
    ];

    /// Branch suffix substituted for the `CLASS` placeholder.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Full => "FullSim",
            Self::Fast => "FastSim",
            Self::Refined | Self::RefinedTest => "Refined",
        }
    }

    /// Legend label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "FullSim",
            Self::Fast => "FastSim",
            Self::Refined => "FastSim Refined",
            Self::RefinedTest => "FastSim Refined (Test)",
        }
    }

    /// Which jets this sample draws from.
    #[must_use]
    pub fn selection(&self) -> Selection {
        match self {
            Self::Full | Self::Fast => Selection::All,
            Self::Refined => Selection::TrainVal,
            Self::RefinedTest => Selection::Test,
        }
    }

    /// Test-like samples are drawn as points with error bars instead of lines.
    #[must_use]
    pub fn draws_as_points(&self) -> bool {
        matches!(self, Self::RefinedTest)
    }
}

/// Substitute a sample's suffix into a branch template.
#[must_use]
pub fn resolve_branch(template: &str, class: SampleClass) -> String {
    template.replace(CLASS_PLACEHOLDER, class.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(SampleClass::Full.suffix(), "FullSim");
        assert_eq!(SampleClass::Fast.suffix(), "FastSim");
        assert_eq!(SampleClass::Refined.suffix(), "Refined");
        assert_eq!(SampleClass::RefinedTest.suffix(), "Refined");
    }

    #[test]
    fn test_resolve_branch() {
        assert_eq!(
            resolve_branch("RecJet_pt_CLASS", SampleClass::Fast),
            "RecJet_pt_FastSim"
        );
        assert_eq!(
            resolve_branch("RecJet_pt_CLASS", SampleClass::RefinedTest),
            "RecJet_pt_Refined"
        );
    }

    #[test]
    fn test_selections() {
        assert_eq!(SampleClass::Full.selection(), Selection::All);
        assert_eq!(SampleClass::Refined.selection(), Selection::TrainVal);
        assert_eq!(SampleClass::RefinedTest.selection(), Selection::Test);
    }

    #[test]
    fn test_full_anchors_drawing_order() {
        assert_eq!(SampleClass::ALL[0], SampleClass::Full);
    }
}
