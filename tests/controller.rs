mod tests {
    use embassy_time::Instant;
    use totem_composer::{
        BrightnessFilterConfig, Button, Command, CommandQueue, Controller, ControllerConfig,
        FilterProcessorConfig, MatrixLayout, PatternId, Press, QueueFull, Rgb, UiState,
        color::scale_color,
        controller::{DEFAULT_BRIGHTNESS, MAX_HUE_SPEED},
        filter::UNCORRECTED,
        ui::TAP_MODE_HOLD,
    };

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    fn uncorrected(pattern: PatternId, brightness: u8) -> ControllerConfig<4, 3> {
        ControllerConfig {
            layout: MatrixLayout::serpentine(),
            pattern,
            brightness,
            filters: FilterProcessorConfig {
                brightness: BrightnessFilterConfig::default(),
                correction: UNCORRECTED,
                temperature: UNCORRECTED,
            },
            ..ControllerConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let queue = CommandQueue::<4>::new();
        let controller = Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());
        assert_eq!(controller.brightness(), DEFAULT_BRIGHTNESS);
        assert_eq!(controller.pattern(), PatternId::Rainbow);
        assert_eq!(controller.pattern_name(), "rainbow");
        assert_eq!(controller.bpm(), 120);
        assert_eq!(controller.hue_speed(), 1);
        assert!(controller.tap_mode());
        assert!(controller.layout().is_serpentine());
    }

    #[test]
    fn test_pattern_selection_wraps() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.previous_pattern();
        assert_eq!(controller.pattern(), PatternId::RollingRowsDiagonal);
        controller.next_pattern();
        assert_eq!(controller.pattern(), PatternId::Rainbow);
        controller.next_pattern();
        assert_eq!(controller.pattern(), PatternId::Confetti);
        controller.set_pattern(PatternId::ScrollRows);
        assert_eq!(controller.pattern_name(), "scroll_rows");
    }

    #[test]
    fn test_brightness_saturates() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.set_brightness(254);
        controller.increase_brightness(3);
        assert_eq!(controller.brightness(), 255);

        controller.set_brightness(2);
        controller.decrease_brightness(3);
        assert_eq!(controller.brightness(), 0);
    }

    #[test]
    fn test_hue_speed_bounds() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.decrease_hue_speed();
        controller.decrease_hue_speed();
        assert_eq!(controller.hue_speed(), 0);

        for _ in 0..40 {
            controller.increase_hue_speed();
        }
        assert_eq!(controller.hue_speed(), MAX_HUE_SPEED);
    }

    #[test]
    fn test_hue_advances_every_tick() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.update(ms(10));
        assert_eq!(controller.hue(), 0);
        controller.update(ms(20));
        assert_eq!(controller.hue(), 1);
        controller.update(ms(30));
        assert_eq!(controller.hue(), 1);

        controller.increase_hue_speed();
        controller.update(ms(40));
        assert_eq!(controller.hue(), 3);
    }

    #[test]
    fn test_queued_tap_registers_before_poll() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.update(ms(0));
        controller.render(ms(0));
        assert!(!controller.tempo().tick_pending());

        queue.sender().try_send(Command::Tap).unwrap();
        controller.update(ms(250));
        assert!(queue.is_empty());
        assert_eq!(controller.tempo().last_tap(), ms(250));
        assert!(controller.tempo().tick_pending());
    }

    #[test]
    fn test_tap_mode_toggle_ignores_taps() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.apply(Command::ToggleTapMode, ms(0));
        assert!(!controller.tap_mode());
        controller.tap(ms(100));
        controller.tap(ms(200));
        assert_eq!(controller.tempo().last_tap(), ms(0));
        assert_eq!(controller.bpm(), 120);

        controller.toggle_tap_mode();
        controller.tap(ms(300));
        assert_eq!(controller.tempo().last_tap(), ms(300));
    }

    #[test]
    fn test_commands_are_applied_in_order() {
        let queue = CommandQueue::<4>::new();
        let sender = queue.sender();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        sender.try_send(Command::SetBrightness(10)).unwrap();
        sender.try_send(Command::IncreaseBrightness(5)).unwrap();
        sender.try_send(Command::SetPattern(PatternId::BpmBoogie)).unwrap();
        sender.try_send(Command::PreviousPattern).unwrap();
        assert_eq!(
            sender.try_send(Command::NextPattern),
            Err(QueueFull(Command::NextPattern))
        );
        assert_eq!(queue.len(), 4);

        controller.update(ms(0));
        assert_eq!(controller.brightness(), 15);
        assert_eq!(controller.pattern(), PatternId::Confetti);
    }

    #[test]
    fn test_first_beat_lights_bottom_row() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<4, 3, 4>::new(queue.receiver(), &uncorrected(PatternId::RollingRows, 255));
        let layout = controller.layout();

        controller.update(ms(0));
        let output = controller.render(ms(0)).to_vec();

        for col in 0..3 {
            assert_ne!(output[layout.index(0, col)], Rgb::default());
            for row in 1..4 {
                assert_eq!(output[layout.index(row, col)], Rgb::default());
            }
        }
        assert_eq!(output.as_slice(), controller.leds());
    }

    #[test]
    fn test_brightness_only_touches_output() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<4, 3, 4>::new(queue.receiver(), &uncorrected(PatternId::BpmBoogie, 128));

        controller.update(ms(16));
        let output = controller.render(ms(16)).to_vec();
        let leds = controller.leds();

        assert!(leds.iter().any(|led| *led != Rgb::default()));
        for (out, led) in output.iter().zip(leds) {
            assert_eq!(*out, scale_color(*led, 128));
        }
    }

    #[test]
    fn test_tempo_indicator_follows_ticks() {
        let queue = CommandQueue::<4>::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        controller.update(ms(1000));
        assert!(controller.tempo_indicator(ms(1010)));
        assert!(!controller.tempo_indicator(ms(1030)));
    }

    #[test]
    fn test_function_hold_disables_taps_through_queue() {
        let queue = CommandQueue::<4>::new();
        let sender = queue.sender();
        let mut ui = UiState::new();
        let mut controller =
            Controller::<9, 9, 4>::new(queue.receiver(), &ControllerConfig::default());

        let hold = Press::Long { held: TAP_MODE_HOLD };
        if let Some(command) = ui.handle(Button::Function, hold) {
            sender.try_send(command).unwrap();
        }
        controller.update(ms(4000));
        assert!(!controller.tap_mode());

        if let Some(command) = ui.handle(Button::Function, Press::Short) {
            sender.try_send(command).unwrap();
        }
        controller.update(ms(4100));
        assert_eq!(controller.tempo().last_tap(), ms(0));
    }
}
