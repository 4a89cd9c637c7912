//! Run-time estimation.

use crate::domain::{Section, Train};

/// Estimate a train's traversal time over a section, in whole minutes.
///
/// The effective speed is the section limit capped by the train's own
/// limit when one is set. The result is truncated to whole minutes with
/// a floor of 1, so even a zero-length section occupies its train for a
/// minute. Total: defined for every (section, train) pair.
pub fn run_time_minutes(section: &Section, train: &Train) -> i64 {
    let effective_speed = match train.max_speed_kmh {
        Some(train_max) => section.max_speed_kmh.min(train_max),
        None => section.max_speed_kmh,
    };

    // Guards non-positive speeds
    let hours = section.length_km / effective_speed.max(1.0);

    ((hours * 60.0) as i64).max(1)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::{section, train};
    use proptest::prelude::*;

    proptest! {
        /// The estimate is at least one minute for any inputs.
        #[test]
        fn at_least_one_minute(
            length in 0.0f64..1000.0,
            section_speed in 0.0f64..400.0,
            train_speed in proptest::option::of(0.0f64..400.0),
        ) {
            let s = section("S1", length, true, section_speed);
            let mut t = train("A", 5, "2025-06-01T08:00:00Z", &["S1"]);
            t.max_speed_kmh = train_speed;

            prop_assert!(run_time_minutes(&s, &t) >= 1);
        }

        /// Deterministic: the same inputs always give the same estimate.
        #[test]
        fn deterministic(length in 0.0f64..1000.0, speed in 10.0f64..400.0) {
            let s = section("S1", length, true, speed);
            let t = train("A", 5, "2025-06-01T08:00:00Z", &["S1"]);

            prop_assert_eq!(run_time_minutes(&s, &t), run_time_minutes(&s, &t));
        }
    }
}
