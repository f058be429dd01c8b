//! Ruleset catalog - the fixed set of allowed budget totals
//!
//! A ruleset bundles a points budget with a short pitch shown in the
//! create-game picker. The list is code-resident reference data; users
//! never edit it.

/// A selectable points budget for a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruleset {
    /// Stable key, also used as the picker option value
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Points budget granted to each army
    pub budget: f64,
    /// One-line pitch for the picker
    pub description: &'static str,
}

const RULESETS: &[Ruleset] = &[
    Ruleset {
        id: "40",
        label: "40 points",
        budget: 40.0,
        description: "Fast draft, lean armies. Great for quick games and sharp decisions.",
    },
    Ruleset {
        id: "80",
        label: "80 points",
        budget: 80.0,
        description: "Balanced budget. Flexible builds with room for a signature piece.",
    },
    Ruleset {
        id: "120",
        label: "120 points",
        budget: 120.0,
        description: "Wider compositions and more tactical variety.",
    },
    Ruleset {
        id: "160",
        label: "160 points",
        budget: 160.0,
        description: "Big brain mode. Field almost everything and plan around it.",
    },
    Ruleset {
        id: "400",
        label: "400 points",
        budget: 400.0,
        description: "Sandbox budget for testing compositions without constraints.",
    },
];

impl Ruleset {
    /// All selectable rulesets, smallest budget first
    pub fn all() -> &'static [Ruleset] {
        RULESETS
    }

    /// Look up a ruleset by id, falling back to the first entry
    pub fn by_id(id: &str) -> Ruleset {
        RULESETS
            .iter()
            .find(|r| r.id == id)
            .copied()
            .unwrap_or(RULESETS[0])
    }

    /// Default budget total for new point sets (smallest allowed)
    pub fn default_total() -> f64 {
        RULESETS[0].budget
    }

    /// Whether a total matches one of the allowed budgets
    pub fn is_allowed_total(total: f64) -> bool {
        RULESETS.iter().any(|r| r.budget == total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_total_is_smallest() {
        assert_eq!(Ruleset::default_total(), 40.0);
        assert!(Ruleset::all()
            .windows(2)
            .all(|pair| pair[0].budget < pair[1].budget));
    }

    #[test]
    fn test_by_id_falls_back_to_first() {
        assert_eq!(Ruleset::by_id("120").budget, 120.0);
        assert_eq!(Ruleset::by_id("nope").budget, 40.0);
    }

    #[test]
    fn test_is_allowed_total() {
        assert!(Ruleset::is_allowed_total(400.0));
        assert!(!Ruleset::is_allowed_total(50.0));
    }
}
