mod tests {
    use embassy_time::{Duration, Instant};
    use totem_composer::{
        interval::advance,
        tempo::{DEFAULT_BEAT_PERIOD, INDICATOR_BLINK, MAX_BEAT_PERIOD, MIN_BEAT_PERIOD, TapTempo},
    };

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    /// Three taps, so the history holds exactly `d1` and `d2`
    fn tapped(d1: u64, d2: u64) -> TapTempo {
        let mut tempo = TapTempo::new();
        tempo.tap(ms(10_000));
        tempo.tap(ms(10_000 + d1));
        tempo.tap(ms(10_000 + d1 + d2));
        tempo
    }

    #[test]
    fn test_defaults_to_120_bpm() {
        let tempo = TapTempo::new();
        assert_eq!(tempo.period(), DEFAULT_BEAT_PERIOD);
        assert_eq!(tempo.bpm(), 120);
    }

    #[test]
    fn test_first_poll_fires() {
        let mut tempo = TapTempo::new();
        assert!(tempo.poll(ms(0)));
        assert!(tempo.consume_tick());
    }

    #[test]
    fn test_bpm_is_mean_of_last_two_intervals() {
        let cases = [
            (500, 500),
            (400, 600),
            (300, 310),
            (1500, 1700),
            (50, 50),
            (5000, 3000),
            (0, 0),
        ];
        for (d1, d2) in cases {
            let tempo = tapped(d1, d2);
            let period = ((d1 + d2) / 2).clamp(200, 2000);
            assert_eq!(u64::from(tempo.bpm()), 60_000 / period, "d1 {d1} d2 {d2}");
        }
    }

    #[test]
    fn test_third_tap_moves_tempo() {
        let mut tempo = TapTempo::new();
        tempo.tap(ms(1000));
        tempo.tap(ms(1500));
        tempo.tap(ms(2020));
        assert_eq!(tempo.period(), Duration::from_millis(510));
        assert_eq!(tempo.bpm(), 117);
    }

    #[test]
    fn test_period_is_clamped() {
        let fast = tapped(10, 10);
        assert_eq!(fast.period(), Duration::from_millis(10));
        assert_eq!(fast.clamped_period(), MIN_BEAT_PERIOD);
        assert_eq!(fast.bpm(), 300);

        let slow = tapped(9000, 9000);
        assert_eq!(slow.clamped_period(), MAX_BEAT_PERIOD);
        assert_eq!(slow.bpm(), 30);
    }

    #[test]
    fn test_tap_fires_on_same_instant() {
        let mut tempo = TapTempo::new();
        assert!(tempo.poll(ms(0)));
        assert!(!tempo.poll(ms(100)));

        tempo.tap(ms(120));
        assert!(tempo.poll(ms(120)));
        assert_eq!(tempo.last_tap(), ms(120));
    }

    #[test]
    fn test_consume_tick_clears_flag() {
        let mut tempo = TapTempo::new();
        tempo.poll(ms(0));
        assert!(tempo.consume_tick());
        assert!(!tempo.consume_tick());
    }

    #[test]
    fn test_ticks_coalesce_until_consumed() {
        let mut tempo = TapTempo::new();
        assert!(tempo.poll(ms(0)));
        assert!(tempo.poll(ms(500)));
        assert!(tempo.poll(ms(1000)));
        assert!(tempo.consume_tick());
        assert!(!tempo.consume_tick());
    }

    #[test]
    fn test_reschedules_from_fire_time() {
        let mut tempo = tapped(400, 400);
        assert!(tempo.poll(ms(10_800)));
        assert_eq!(tempo.next_tick(), Some(ms(11_200)));

        assert!(!tempo.poll(ms(11_199)));
        assert!(tempo.poll(ms(11_205)));
        assert_eq!(tempo.next_tick(), Some(ms(11_605)));
    }

    #[test]
    fn test_reschedule_uses_latest_period() {
        let mut tempo = TapTempo::new();
        tempo.poll(ms(0));
        assert_eq!(tempo.next_tick(), Some(ms(500)));

        tempo.tap(ms(100));
        tempo.tap(ms(400));
        assert!(tempo.poll(ms(400)));
        // Intervals are now 300 and 100 -> period 200
        assert_eq!(tempo.next_tick(), Some(ms(600)));
    }

    #[test]
    fn test_indicator_blinks_after_tick() {
        let mut tempo = TapTempo::new();
        assert!(!tempo.indicator_lit(ms(0)));

        tempo.poll(ms(1000));
        assert!(tempo.indicator_lit(ms(1000)));
        assert!(tempo.indicator_lit(ms(1000) + INDICATOR_BLINK - Duration::from_millis(1)));
        assert!(!tempo.indicator_lit(ms(1000) + INDICATOR_BLINK));
    }

    fn after(base: Instant, millis: u64) -> Instant {
        advance(base, Duration::from_millis(millis))
    }

    #[test]
    fn test_ticks_across_counter_rollover() {
        let start = Instant::from_ticks(u64::MAX - Duration::from_millis(100).as_ticks());
        let mut tempo = TapTempo::new();

        tempo.tap(start);
        assert!(tempo.poll(start));
        assert!(tempo.consume_tick());
        assert!(tempo.indicator_lit(after(start, 10)));
        assert!(!tempo.indicator_lit(after(start, 30)));

        tempo.tap(after(start, 400));
        assert!(tempo.poll(after(start, 400)));
        tempo.consume_tick();
        let next = 400 + tempo.clamped_period().as_millis();
        assert_eq!(tempo.next_tick(), Some(after(start, next)));

        assert!(!tempo.poll(after(start, next - 1)));
        assert!(tempo.poll(after(start, next)));
        assert!(tempo.indicator_lit(after(start, next + 5)));
    }

    #[test]
    fn test_first_poll_fires_late_in_counter_range() {
        let mut tempo = TapTempo::new();
        assert!(!tempo.indicator_lit(Instant::from_ticks(1 << 63)));
        assert!(tempo.poll(Instant::from_ticks(1 << 63)));
        assert!(tempo.indicator_lit(Instant::from_ticks(1 << 63)));
    }

    #[test]
    fn test_huge_first_interval_does_not_overflow() {
        let mut tempo = TapTempo::new();
        tempo.tap(Instant::from_ticks(u64::MAX - 1));
        assert_eq!(tempo.clamped_period(), MAX_BEAT_PERIOD);
        assert_eq!(tempo.bpm(), 30);
    }
}
