mod tests {
    use totem_composer::{PatternId, pattern::PATTERN_COUNT};

    const ALL: [PatternId; 6] = [
        PatternId::Rainbow,
        PatternId::Confetti,
        PatternId::BpmBoogie,
        PatternId::ScrollRows,
        PatternId::RollingRows,
        PatternId::RollingRowsDiagonal,
    ];

    #[test]
    fn test_names_round_trip() {
        for id in ALL {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(PatternId::parse_from_str("rainbow"), Some(PatternId::Rainbow));
        assert_eq!(
            PatternId::parse_from_str("rolling_rows_diagonal"),
            Some(PatternId::RollingRowsDiagonal)
        );
        assert_eq!(PatternId::parse_from_str("Rainbow"), None);
        assert_eq!(PatternId::parse_from_str(""), None);
    }

    #[test]
    fn test_from_raw() {
        for (raw, id) in ALL.into_iter().enumerate() {
            assert_eq!(PatternId::from_raw(raw as u8), Some(id));
            assert_eq!(id as u8, raw as u8);
        }
        assert_eq!(PatternId::from_raw(PATTERN_COUNT), None);
        assert_eq!(PatternId::from_raw(255), None);
    }

    #[test]
    fn test_next_and_previous_cycle() {
        assert_eq!(PatternId::RollingRowsDiagonal.next(), PatternId::Rainbow);
        assert_eq!(PatternId::Rainbow.previous(), PatternId::RollingRowsDiagonal);

        for id in ALL {
            assert_eq!(id.next().previous(), id);
            let mut cycled = id;
            for _ in 0..PATTERN_COUNT {
                cycled = cycled.next();
            }
            assert_eq!(cycled, id);
        }
    }

    #[test]
    fn test_slot_matches_id() {
        for id in ALL {
            assert_eq!(id.to_slot().id(), id);
        }
    }
}
