/// Linguistic category shared by both inputs (GPA, activity) and the output
/// (performance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Degrees of membership of one raw input in the three linguistic categories.
///
/// Degrees are computed independently and need not sum to 1; for the shapes
/// used here at most two are non-zero at once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MembershipVector {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

impl MembershipVector {
    pub const fn get(&self, level: Level) -> f32 {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }
}

/// Aggregated rule strength per output category, max-folded across rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutputStrengths {
    pub low: f32,
    pub medium: f32,
    pub high: f32,
}

impl OutputStrengths {
    pub const fn get(&self, level: Level) -> f32 {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }

    /// Folds one rule's firing strength into the category via max, so a
    /// zero-strength rule never overrides a larger value.
    pub fn accumulate(&mut self, level: Level, strength: f32) {
        let slot = match level {
            Level::Low => &mut self.low,
            Level::Medium => &mut self.medium,
            Level::High => &mut self.high,
        };
        *slot = slot.max(strength);
    }

    pub fn total(&self) -> f32 {
        self.low + self.medium + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_keeps_max() {
        let mut out = OutputStrengths::default();
        out.accumulate(Level::Medium, 0.4);
        out.accumulate(Level::Medium, 0.2);
        out.accumulate(Level::Medium, 0.0);
        assert_eq!(out.get(Level::Medium), 0.4);
    }

    #[test]
    fn total_sums_all_categories() {
        let out = OutputStrengths {
            low: 0.1,
            medium: 0.2,
            high: 0.3,
        };
        assert!((out.total() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn level_labels() {
        assert_eq!(Level::Low.as_str(), "Low");
        assert_eq!(Level::Medium.as_str(), "Medium");
        assert_eq!(Level::High.as_str(), "High");
    }
}
