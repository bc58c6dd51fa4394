use serde::{Serialize, Serializer};
use std::fmt;

/// Height class of a building, derived from its floor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightCategory {
    LowRise,
    MidRise,
    HighRise,
}

impl HeightCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowRise => "Low-rise",
            Self::MidRise => "Mid-rise",
            Self::HighRise => "High-rise",
        }
    }
}

impl fmt::Display for HeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for HeightCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
