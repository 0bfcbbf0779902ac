#[cfg(test)]
mod tests {
    use stint::libs::period::{Assignment, Period, PeriodKind, PeriodOrigin};
    use stint::libs::session::{Session, SessionTotals};

    fn period(kind: PeriodKind, start_ts: f64, end_ts: f64) -> Period {
        Period {
            kind,
            start_ts,
            end_ts,
            origin: PeriodOrigin::User,
            assignment: Assignment::None,
        }
    }

    #[test]
    fn test_totals_accumulate_on_push() {
        let mut session = Session::new(0.0);
        session.push_period(period(PeriodKind::Active, 0.0, 500.0));
        session.push_period(period(PeriodKind::Break, 500.0, 800.0));
        session.push_period(period(PeriodKind::Idle, 800.0, 1000.0));

        assert_eq!(session.totals.active, 500.0);
        assert_eq!(session.totals.breaks, 300.0);
        assert_eq!(session.totals.idle, 200.0);
    }

    #[test]
    fn test_recompute_matches_accumulated_totals() {
        // The period list is the source of truth; the running sums must
        // always be reproducible from it.
        let mut session = Session::new(0.0);
        for (kind, start, end) in [
            (PeriodKind::Active, 0.0, 120.5),
            (PeriodKind::Idle, 120.5, 400.0),
            (PeriodKind::Active, 400.0, 777.25),
            (PeriodKind::Break, 777.25, 1000.0),
        ] {
            session.push_period(period(kind, start, end));
        }

        assert_eq!(session.totals, SessionTotals::recompute(&session.periods));
    }

    #[test]
    fn test_idle_merges_into_break_for_display() {
        let mut session = Session::new(0.0);
        session.push_period(period(PeriodKind::Break, 0.0, 300.0));
        session.push_period(period(PeriodKind::Idle, 300.0, 500.0));

        // Idle stays distinct in the sums but merges into break time for
        // top-level display.
        assert_eq!(session.totals.breaks, 300.0);
        assert_eq!(session.totals.idle, 200.0);
        assert_eq!(session.totals.break_display(), 500.0);
    }

    #[test]
    fn test_untagged_period_lookup() {
        let mut session = Session::new(0.0);
        session.push_period(period(PeriodKind::Active, 0.0, 100.0));
        session.push_period(period(PeriodKind::Break, 100.0, 200.0));
        session.periods[0].assignment = Assignment::Single {
            name: "alpha".to_string(),
            comment: String::new(),
        };

        assert_eq!(session.untagged_periods(), vec![1]);
    }

    #[test]
    fn test_elapsed_uses_end_when_set() {
        let mut session = Session::new(100.0);
        assert_eq!(session.elapsed(250.0), 150.0);

        session.end_ts = Some(300.0);
        assert_eq!(session.elapsed(999.0), 200.0);
    }
}
