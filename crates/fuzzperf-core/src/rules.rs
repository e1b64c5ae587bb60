use crate::level::{Level, MembershipVector, OutputStrengths};

/// One IF-THEN rule: antecedents on the GPA and activity categories,
/// consequent on the performance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub gpa: Level,
    pub activity: Level,
    pub output: Level,
}

const fn rule(gpa: Level, activity: Level, output: Level) -> Rule {
    Rule {
        gpa,
        activity,
        output,
    }
}

/// The fixed rule base: every 3x3 input combination exactly once. Evaluation
/// order is irrelevant because aggregation is a max fold.
pub const RULES: [Rule; 9] = [
    rule(Level::High, Level::High, Level::High),
    rule(Level::High, Level::Medium, Level::High),
    rule(Level::High, Level::Low, Level::Medium),
    rule(Level::Medium, Level::High, Level::High),
    rule(Level::Medium, Level::Medium, Level::Medium),
    rule(Level::Medium, Level::Low, Level::Low),
    rule(Level::Low, Level::High, Level::Medium),
    rule(Level::Low, Level::Medium, Level::Low),
    rule(Level::Low, Level::Low, Level::Low),
];

/// Runs the rule base: firing strength is the min of the two antecedent
/// memberships, aggregated per output category with max.
pub fn infer(gpa: &MembershipVector, activity: &MembershipVector) -> OutputStrengths {
    let mut out = OutputStrengths::default();
    for rule in &RULES {
        let strength = gpa.get(rule.gpa).min(activity.get(rule.activity));
        out.accumulate(rule.output, strength);
    }
    out
}
