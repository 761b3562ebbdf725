//! Milestone thresholds derived from a goal's target.

use crate::constants::{
    MIN_MILESTONE_STEP, QUARTILE_MILESTONE_TARGET_MAX, SINGLE_MILESTONE_TARGET_MAX,
};

/// Intermediate thresholds for a target, ascending, each strictly between
/// zero and the target.
///
/// Small targets get a halfway marker, medium targets quartile markers, and
/// anything larger three strides of `max(5, (target / 4 / 5) * 5)` points.
/// The stride is snapped down to a multiple of five and has no upper cap, so
/// very large targets space their milestones widely.
pub fn milestones(target: i64) -> Vec<i64> {
    if target <= 0 {
        return Vec::new();
    }
    if target <= SINGLE_MILESTONE_TARGET_MAX {
        let half = target / 2;
        return if half > 0 { vec![half] } else { Vec::new() };
    }
    if target <= QUARTILE_MILESTONE_TARGET_MAX {
        return vec![target / 4, target / 2, target * 3 / 4];
    }
    let step = ((target / 4 / MIN_MILESTONE_STEP) * MIN_MILESTONE_STEP).max(MIN_MILESTONE_STEP);
    (1..=3).map(|i| step * i).filter(|m| *m < target).collect()
}

/// Milestones already passed at the given earned-points value
pub fn milestones_reached(target: i64, earned_points: i64) -> Vec<i64> {
    milestones(target)
        .into_iter()
        .filter(|m| *m <= earned_points)
        .collect()
}

/// The first milestone still ahead of the given earned-points value
pub fn next_milestone(target: i64, earned_points: i64) -> Option<i64> {
    milestones(target).into_iter().find(|m| *m > earned_points)
}

/// The milestone crossed by moving from `previous` to `current` earned
/// points, if any. A milestone already passed at `previous` is never
/// reported again, so celebratory feedback fires once per milestone.
pub fn just_crossed(target: i64, previous: i64, current: i64) -> Option<i64> {
    milestones(target)
        .into_iter()
        .find(|m| previous < *m && *m <= current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_target_has_no_milestones() {
        assert!(milestones(0).is_empty());
        assert!(milestones(-5).is_empty());
    }

    #[test]
    fn test_small_target_gets_halfway_marker() {
        assert_eq!(milestones(10), vec![5]);
        assert_eq!(milestones(7), vec![3]);
        assert_eq!(milestones(2), vec![1]);
    }

    #[test]
    fn test_target_of_one_rounds_halfway_to_nothing() {
        assert!(milestones(1).is_empty());
    }

    #[test]
    fn test_medium_target_gets_quartiles() {
        assert_eq!(milestones(20), vec![5, 10, 15]);
        assert_eq!(milestones(11), vec![2, 5, 8]);
        assert_eq!(milestones(16), vec![4, 8, 12]);
    }

    #[test]
    fn test_large_target_uses_stride_of_five_minimum() {
        // 22 / 4 / 5 * 5 = 5
        assert_eq!(milestones(22), vec![5, 10, 15]);
        assert_eq!(milestones(30), vec![5, 10, 15]);
    }

    #[test]
    fn test_large_target_stride_snaps_down_to_five() {
        // 100 / 4 = 25, already a multiple of five
        assert_eq!(milestones(100), vec![25, 50, 75]);
        // 90 / 4 = 22, snapped down to 20
        assert_eq!(milestones(90), vec![20, 40, 60]);
    }

    #[test]
    fn test_huge_target_stride_is_uncapped() {
        assert_eq!(milestones(1000), vec![250, 500, 750]);
    }

    #[test]
    fn test_milestones_are_ascending_and_inside_range() {
        for target in 1..400 {
            let marks = milestones(target);
            for pair in marks.windows(2) {
                assert!(pair[0] < pair[1], "target {}: not ascending", target);
            }
            for m in marks {
                assert!(m > 0 && m < target, "target {}: {} out of range", target, m);
            }
        }
    }

    #[test]
    fn test_milestones_reached_filters_by_earned() {
        assert_eq!(milestones_reached(20, 12), vec![5, 10]);
        assert!(milestones_reached(20, 0).is_empty());
        assert_eq!(milestones_reached(20, 100), vec![5, 10, 15]);
    }

    #[test]
    fn test_next_milestone_is_first_ahead() {
        assert_eq!(next_milestone(20, 0), Some(5));
        assert_eq!(next_milestone(20, 5), Some(10));
        assert_eq!(next_milestone(20, 15), None);
    }

    #[test]
    fn test_just_crossed_reports_a_new_milestone_once() {
        assert_eq!(just_crossed(20, 3, 7), Some(5));
        // milestone 5 was already behind us; nothing new until 10
        assert_eq!(just_crossed(20, 5, 7), None);
        assert_eq!(just_crossed(20, 7, 10), Some(10));
    }

    #[test]
    fn test_just_crossed_skipping_several_reports_the_first() {
        assert_eq!(just_crossed(20, 0, 20), Some(5));
    }
}
