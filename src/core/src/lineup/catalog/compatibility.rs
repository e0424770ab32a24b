use serde::Serialize;

/// How well a player's natural position fits a tactical slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    Exact,
    Acceptable,
    Incompatible,
}

impl Compatibility {
    pub fn is_eligible(&self) -> bool {
        !matches!(self, Compatibility::Incompatible)
    }

    pub fn from_rank(rank: Option<usize>) -> Self {
        match rank {
            Some(0) => Compatibility::Exact,
            Some(_) => Compatibility::Acceptable,
            None => Compatibility::Incompatible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompatibilityWeights {
    pub exact: f32,
    pub acceptable: f32,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        CompatibilityWeights {
            exact: 1.0,
            acceptable: 0.5,
        }
    }
}

impl CompatibilityWeights {
    pub fn weight(&self, compatibility: Compatibility) -> f32 {
        match compatibility {
            Compatibility::Exact => self.exact,
            Compatibility::Acceptable => self.acceptable,
            Compatibility::Incompatible => 0.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.exact.is_finite()
            && self.acceptable.is_finite()
            && self.exact >= 0.0
            && self.acceptable >= 0.0
    }
}
