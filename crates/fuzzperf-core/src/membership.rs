use crate::level::MembershipVector;

/// Fuzzifies a GPA on the 0.0–4.0 scale.
///
/// Shapes: low is flat 1 up to 2.0 and reaches 0 at 2.75; medium is a
/// triangle over 2.0–3.5 peaking at 2.75; high rises over 3.0–3.5 and is
/// flat 1 beyond. The flat ends saturate, so every finite input lands in
/// [0,1] without explicit clamping.
pub fn gpa_membership(gpa: f32) -> MembershipVector {
    MembershipVector {
        low: gpa_low(gpa),
        medium: gpa_medium(gpa),
        high: gpa_high(gpa),
    }
}

fn gpa_low(gpa: f32) -> f32 {
    if gpa <= 2.0 {
        1.0
    } else if gpa < 2.75 {
        (2.75 - gpa) / 0.75
    } else {
        0.0
    }
}

fn gpa_medium(gpa: f32) -> f32 {
    if gpa <= 2.0 || gpa >= 3.5 {
        0.0
    } else if gpa <= 2.75 {
        (gpa - 2.0) / 0.75
    } else {
        (3.5 - gpa) / 0.75
    }
}

fn gpa_high(gpa: f32) -> f32 {
    if gpa <= 3.0 {
        0.0
    } else if gpa < 3.5 {
        (gpa - 3.0) / 0.5
    } else {
        1.0
    }
}

/// Fuzzifies an activity-level percentage on the 0–100 scale, breakpoints
/// 40/60/80.
pub fn activity_membership(activity: f32) -> MembershipVector {
    MembershipVector {
        low: activity_low(activity),
        medium: activity_medium(activity),
        high: activity_high(activity),
    }
}

fn activity_low(activity: f32) -> f32 {
    if activity <= 40.0 {
        1.0
    } else if activity < 60.0 {
        (60.0 - activity) / 20.0
    } else {
        0.0
    }
}

fn activity_medium(activity: f32) -> f32 {
    if activity <= 40.0 || activity >= 80.0 {
        0.0
    } else if activity <= 60.0 {
        (activity - 40.0) / 20.0
    } else {
        (80.0 - activity) / 20.0
    }
}

fn activity_high(activity: f32) -> f32 {
    if activity <= 60.0 {
        0.0
    } else if activity < 80.0 {
        (activity - 60.0) / 20.0
    } else {
        1.0
    }
}
