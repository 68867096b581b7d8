use serde::{Deserialize, Serialize};

/// How a type or property varies across cultures and segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variations {
    /// Invariant
    #[default]
    Nothing,
    Culture,
    Segment,
    CultureAndSegment,
}

impl Variations {
    pub fn varies_by_culture(&self) -> bool {
        matches!(self, Self::Culture | Self::CultureAndSegment)
    }

    pub fn varies_by_segment(&self) -> bool {
        matches!(self, Self::Segment | Self::CultureAndSegment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Culture => "culture",
            Self::Segment => "segment",
            Self::CultureAndSegment => "culture_and_segment",
        }
    }
}

impl std::fmt::Display for Variations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn culture_and_segment_varies_by_both() {
        assert!(Variations::CultureAndSegment.varies_by_culture());
        assert!(Variations::CultureAndSegment.varies_by_segment());
        assert!(!Variations::Nothing.varies_by_culture());
        assert!(!Variations::Culture.varies_by_segment());
    }
}
