//! Static content for the neutral no-match state.

/// Shown when the analyzer finds no confident match. Calm framing, no
/// alarm wording.
pub const NO_MATCH_MESSAGE: &str =
    "We couldn't match your description to a specific condition. That often just \
     means the description is brief or very general. The tips below support most \
     everyday symptoms, and a healthcare professional can help if things persist.";

const GENERAL_HEALTH_TIPS: &[&str] = &[
    "Drink water regularly through the day",
    "Aim for 7-9 hours of sleep",
    "Eat a balanced diet with plenty of fruits and vegetables",
    "Move your body for at least 30 minutes most days",
    "Wash your hands often, especially before meals",
    "See a healthcare professional if symptoms persist beyond a few days or worsen",
];

/// General-health tips the caller renders alongside [`NO_MATCH_MESSAGE`].
pub fn general_health_tips() -> &'static [&'static str] {
    GENERAL_HEALTH_TIPS
}
