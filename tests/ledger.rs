#[cfg(test)]
mod tests {
    use stint::libs::config::MonitorConfig;
    use stint::libs::ledger::{LedgerState, PeriodLedger};
    use stint::libs::period::{PeriodKind, PeriodOrigin};
    use stint::libs::session::{Session, SessionTotals};

    /// Thresholds used by all scenarios: idle after 300s without input,
    /// automatic break after 1200s of idle.
    fn config() -> MonitorConfig {
        MonitorConfig {
            idle_threshold: 300,
            idle_break_threshold: 1200,
            poll_interval: 100,
        }
    }

    /// Checks the ledger invariants: strict ordering, gaplessness, positive
    /// durations, and (for ended sessions) durations summing to elapsed time.
    fn assert_invariants(session: &Session) {
        for pair in session.periods.windows(2) {
            assert!(pair[0].start_ts < pair[1].start_ts, "periods must be strictly ordered");
            assert_eq!(pair[0].end_ts, pair[1].start_ts, "consecutive periods must share a boundary");
        }
        for period in &session.periods {
            assert!(period.duration() > 0.0, "no committed period may have zero or negative duration");
        }
        if let Some(end_ts) = session.end_ts {
            let sum: f64 = session.periods.iter().map(|p| p.duration()).sum();
            assert!((sum - (end_ts - session.start_ts)).abs() < 1e-6, "durations must sum to elapsed time");
        }
    }

    #[test]
    fn test_resume_from_idle_opens_new_active_period() {
        // The regression scenario: active work, an idle gap past the
        // threshold, then fresh input. Resuming must open a third period,
        // not extend or drop one.
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1010.0, 1010.0);
        ledger.tick(1400.0, 1050.0); // 350s without input -> idle
        ledger.tick(1500.0, 1500.0); // fresh input -> back to active
        ledger.end_session(1600.0);

        let session = ledger.session();
        assert_invariants(session);
        let kinds: Vec<PeriodKind> = session.periods.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PeriodKind::Active, PeriodKind::Idle, PeriodKind::Active]);
    }

    #[test]
    fn test_active_period_closes_when_input_stopped() {
        // The active period ends at the last input timestamp, not at the
        // tick that detected the idleness.
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1400.0, 1050.0);

        let session = ledger.session();
        assert_eq!(session.periods.len(), 1);
        assert_eq!(session.periods[0].kind, PeriodKind::Active);
        assert_eq!(session.periods[0].end_ts, 1050.0);
        assert_eq!(ledger.state(), LedgerState::Idle);
    }

    #[test]
    fn test_idle_converts_to_automatic_break() {
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1400.0, 1050.0); // idle since 1050
        ledger.tick(2200.0, 1050.0); // still idle, below the auto-break threshold
        assert_eq!(ledger.state(), LedgerState::Idle);

        ledger.tick(2250.0, 1050.0); // 1200s of idle -> automatic break
        assert_eq!(ledger.state(), LedgerState::OnBreak);
        assert_eq!(ledger.open_origin(), PeriodOrigin::IdleTimeout);

        ledger.end_session(2400.0);
        let session = ledger.session();
        assert_invariants(session);
        let kinds: Vec<PeriodKind> = session.periods.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PeriodKind::Active, PeriodKind::Idle, PeriodKind::Break]);
        // The idle period runs up to the moment the break started.
        assert_eq!(session.periods[1].end_ts, 2250.0);
    }

    #[test]
    fn test_fresh_input_wins_over_auto_break() {
        // When one tick sees both fresh input and an expired auto-break
        // threshold, the user is back: resume into a new active period.
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1400.0, 1050.0);
        ledger.tick(2300.0, 2290.0);
        assert_eq!(ledger.state(), LedgerState::Active);

        ledger.end_session(2400.0);
        let session = ledger.session();
        assert_invariants(session);
        let kinds: Vec<PeriodKind> = session.periods.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PeriodKind::Active, PeriodKind::Idle, PeriodKind::Active]);
    }

    #[test]
    fn test_break_toggle_round_trip() {
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.toggle_break(1100.0);
        assert_eq!(ledger.state(), LedgerState::OnBreak);
        ledger.toggle_break(1400.0);
        assert_eq!(ledger.state(), LedgerState::Active);
        ledger.end_session(1500.0);

        let session = ledger.session();
        assert_invariants(session);
        let kinds: Vec<PeriodKind> = session.periods.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PeriodKind::Active, PeriodKind::Break, PeriodKind::Active]);
        assert_eq!(session.totals.active, 200.0);
        assert_eq!(session.totals.breaks, 300.0);
    }

    #[test]
    fn test_toggle_break_while_idle_starts_break() {
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1400.0, 1050.0);
        ledger.toggle_break(1450.0);
        assert_eq!(ledger.state(), LedgerState::OnBreak);
        assert_eq!(ledger.open_origin(), PeriodOrigin::User);

        ledger.end_session(1500.0);
        let session = ledger.session();
        assert_invariants(session);
        let kinds: Vec<PeriodKind> = session.periods.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PeriodKind::Active, PeriodKind::Idle, PeriodKind::Break]);
    }

    #[test]
    fn test_no_break_ends_without_toggle() {
        // Breaks end only on an explicit toggle; input during a break does
        // not resume work by itself.
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.toggle_break(1100.0);
        ledger.tick(1200.0, 1190.0);
        ledger.tick(1300.0, 1290.0);
        assert_eq!(ledger.state(), LedgerState::OnBreak);
    }

    #[test]
    fn test_zero_duration_periods_are_suppressed() {
        // Two commands at the same instant: the first close would commit a
        // zero-duration period and is discarded instead.
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.toggle_break(1000.0);
        assert_eq!(ledger.state(), LedgerState::OnBreak);
        ledger.toggle_break(1000.0);
        assert_eq!(ledger.state(), LedgerState::Active);
        ledger.end_session(1100.0);

        let session = ledger.session();
        assert_invariants(session);
        // Both toggles collapsed away; the whole session is one active period.
        assert_eq!(session.periods.len(), 1);
        assert_eq!(session.periods[0].kind, PeriodKind::Active);
        assert_eq!(session.periods[0].start_ts, 1000.0);
        assert_eq!(session.periods[0].end_ts, 1100.0);
    }

    #[test]
    fn test_zero_elapsed_session_commits_nothing() {
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.end_session(1000.0);

        let session = ledger.session();
        assert_invariants(session);
        assert!(session.periods.is_empty());
        assert_eq!(session.end_ts, Some(1000.0));
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.toggle_break(1200.0);
        ledger.end_session(1600.0);

        let first = ledger.session().clone();
        ledger.end_session(1700.0);
        ledger.tick(1800.0, 1800.0);
        ledger.toggle_break(1900.0);

        assert_eq!(ledger.session(), &first, "an ended session must not change");
    }

    #[test]
    fn test_clock_skew_is_clamped() {
        // An input timestamp before the open period must not produce a
        // negative-duration period.
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1100.0, 900.0);
        assert_eq!(ledger.state(), LedgerState::Active);

        // With the skewed value clamped to the session start, the whole
        // active period collapses to zero and is discarded when idleness
        // finally triggers.
        ledger.tick(1400.0, 900.0);
        assert_eq!(ledger.state(), LedgerState::Idle);
        ledger.end_session(1500.0);

        let session = ledger.session();
        assert_invariants(session);
        assert_eq!(session.periods.len(), 1);
        assert_eq!(session.periods[0].kind, PeriodKind::Idle);
        assert_eq!(session.periods[0].start_ts, 1000.0);
    }

    #[test]
    fn test_totals_match_recomputed_period_list() {
        let mut ledger = PeriodLedger::start(1000.0, &config());
        ledger.tick(1400.0, 1050.0);
        ledger.tick(1500.0, 1500.0);
        ledger.toggle_break(1700.0);
        ledger.toggle_break(1800.0);
        ledger.end_session(2000.0);

        let session = ledger.session();
        assert_invariants(session);
        assert_eq!(session.totals, SessionTotals::recompute(&session.periods));
        assert_eq!(session.totals.active + session.totals.break_display(), session.elapsed(2000.0));
    }

    #[test]
    fn test_long_mixed_sequence_stays_gapless() {
        // A denser exercise of the machine: idle gaps, resumes, manual
        // breaks, and an auto-break, polled at uneven intervals.
        let mut ledger = PeriodLedger::start(0.0, &config());
        let mut last_input = 0.0;
        for step in 1..200 {
            let now = step as f64 * 37.0;
            // Input arrives in bursts: none between steps 40-60 and 120-170.
            if !(40..60).contains(&step) && !(120..170).contains(&step) {
                last_input = now;
            }
            ledger.tick(now, last_input);
            if step == 80 {
                ledger.toggle_break(now);
            }
            if step == 90 {
                ledger.toggle_break(now);
            }
        }
        ledger.end_session(200.0 * 37.0);

        let session = ledger.session();
        assert_invariants(session);
        assert!(session.periods.iter().any(|p| p.kind == PeriodKind::Idle));
        assert!(session.periods.iter().any(|p| p.kind == PeriodKind::Break));
        assert_eq!(session.totals, SessionTotals::recompute(&session.periods));
    }
}
