#[cfg(test)]
mod tests {
    use stint::libs::period::{Assignment, Period, PeriodKind, PeriodOrigin};
    use stint::libs::splitter::{apply_tag, TagError, TagRequest};

    fn period(duration: f64) -> Period {
        Period {
            kind: PeriodKind::Active,
            start_ts: 1000.0,
            end_ts: 1000.0 + duration,
            origin: PeriodOrigin::User,
            assignment: Assignment::None,
        }
    }

    #[test]
    fn test_single_tag_assignment() {
        let mut p = period(600.0);
        apply_tag(&mut p, TagRequest::single("writing", "draft chapter")).unwrap();

        assert_eq!(
            p.assignment,
            Assignment::Single {
                name: "writing".to_string(),
                comment: "draft chapter".to_string(),
            }
        );
        // Tagging never touches the period bounds.
        assert_eq!(p.start_ts, 1000.0);
        assert_eq!(p.end_ts, 1600.0);
    }

    #[test]
    fn test_split_durations_sum_exactly() {
        let mut p = period(1000.0);
        apply_tag(&mut p, TagRequest::split("alpha", "beta", 33)).unwrap();

        let Assignment::Split { primary, secondary } = &p.assignment else {
            panic!("expected a split assignment");
        };
        assert_eq!(secondary.duration, 330.0);
        assert_eq!(primary.duration, 670.0);
        assert_eq!(primary.percentage, 67);
        assert_eq!(secondary.percentage, 33);
    }

    #[test]
    fn test_split_exactness_for_every_percentage() {
        // The primary always gets the floor remainder, so the two shares sum
        // exactly to the duration for any percentage, including durations
        // that don't divide evenly.
        for duration in [1.0, 59.0, 997.0, 3601.5] {
            for percentage in 1..=99u8 {
                let mut p = period(duration);
                apply_tag(&mut p, TagRequest::split("a", "b", percentage)).unwrap();
                let Assignment::Split { primary, secondary } = &p.assignment else {
                    panic!("expected a split assignment");
                };
                assert_eq!(primary.duration + secondary.duration, duration);
                assert_eq!(primary.percentage + secondary.percentage, 100);
            }
        }
    }

    #[test]
    fn test_degenerate_percentages_are_rejected() {
        let mut p = period(1000.0);
        assert_eq!(
            apply_tag(&mut p, TagRequest::split("a", "b", 0)),
            Err(TagError::PercentageOutOfRange(0))
        );
        assert_eq!(
            apply_tag(&mut p, TagRequest::split("a", "b", 100)),
            Err(TagError::PercentageOutOfRange(100))
        );
    }

    #[test]
    fn test_percentage_without_secondary_is_rejected() {
        let mut p = period(1000.0);
        let request = TagRequest {
            primary_tag: "a".to_string(),
            secondary_percentage: Some(40),
            ..Default::default()
        };
        assert_eq!(apply_tag(&mut p, request), Err(TagError::PercentageWithoutSecondary));
    }

    #[test]
    fn test_secondary_without_percentage_is_rejected() {
        let mut p = period(1000.0);
        let request = TagRequest {
            primary_tag: "a".to_string(),
            secondary_tag: Some("b".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_tag(&mut p, request), Err(TagError::SecondaryWithoutPercentage));
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut p = period(1000.0);
        assert_eq!(apply_tag(&mut p, TagRequest::single("", "")), Err(TagError::EmptyPrimary));
        assert_eq!(apply_tag(&mut p, TagRequest::split("a", "", 50)), Err(TagError::EmptySecondary));
    }

    #[test]
    fn test_rejected_request_leaves_period_untouched() {
        let mut p = period(1000.0);
        apply_tag(&mut p, TagRequest::single("before", "kept")).unwrap();
        let snapshot = p.clone();

        assert!(apply_tag(&mut p, TagRequest::split("after", "other", 100)).is_err());
        assert_eq!(p, snapshot, "a rejected request must not partially mutate the period");
    }

    #[test]
    fn test_switching_split_to_single_clears_secondary() {
        let mut p = period(1000.0);
        apply_tag(&mut p, TagRequest::split("alpha", "beta", 40)).unwrap();
        apply_tag(&mut p, TagRequest::single("alpha", "")).unwrap();

        assert!(matches!(p.assignment, Assignment::Single { .. }), "no stale split may linger");
    }

    #[test]
    fn test_switching_single_to_split_replaces_tag() {
        let mut p = period(1000.0);
        apply_tag(&mut p, TagRequest::single("alpha", "old comment")).unwrap();
        apply_tag(&mut p, TagRequest::split("alpha", "beta", 25)).unwrap();

        let Assignment::Split { primary, secondary } = &p.assignment else {
            panic!("expected a split assignment");
        };
        assert_eq!(primary.name, "alpha");
        assert_eq!(secondary.name, "beta");
        // The single form's comment does not leak into the split.
        assert_eq!(primary.comment, "");
    }

    #[test]
    fn test_allocations_cover_full_duration() {
        let mut p = period(777.0);
        apply_tag(&mut p, TagRequest::split("a", "b", 61)).unwrap();

        let allocated: f64 = p.assignment.allocations(p.duration()).iter().map(|(_, secs)| secs).sum();
        assert_eq!(allocated, 777.0);
    }
}
