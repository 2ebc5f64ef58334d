//! The default competitor roster.

use race_kernel::{BaseSpeed, CompetitorSpec, FatigueProfile};

/// The classic three-way field.
///
/// - Hare: fast but erratic; speed drawn from `[3, 5]` before the start,
///   1-in-5 chance per tick of a long 400 ms rest.
/// - Tortoise: slow and steady, never rests.
/// - Hound: quick with a 1-in-5 chance per tick of a short 200 ms rest.
///
/// Fatigue is data attached here, not a branch on the name anywhere in the
/// kernel.
pub fn default_roster() -> Vec<CompetitorSpec> {
    vec![
        CompetitorSpec::new("Hare", BaseSpeed::Drawn { min: 3, max: 5 }).with_fatigue(
            FatigueProfile {
                draw_max: 4,
                trigger: 1,
                rest_ms: 400,
            },
        ),
        CompetitorSpec::new("Tortoise", BaseSpeed::Fixed(3)),
        CompetitorSpec::new("Hound", BaseSpeed::Fixed(5)).with_fatigue(FatigueProfile {
            draw_max: 4,
            trigger: 0,
            rest_ms: 200,
        }),
    ]
}
