mod tests {
    use myrtio_matrix_animations::{
        AnimationId, AnimationRunner, Duration, FrameResult, GridError, ManualClock,
        MatrixLayout, OFF, OutputDriver, Rgb, RunnerConfig, SwitchChannel,
        SmartLedsOutput, runner::DEFAULT_FRAME_DURATION,
    };
    use smart_leds::SmartLedsWrite;

    const LAYOUT: MatrixLayout = MatrixLayout::serpentine(8, 4);
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[derive(Default)]
    struct RecordingOutput {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingOutput {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    /// Strip driver that keeps the last frame it accepted
    #[derive(Default)]
    struct FakeStrip {
        pixels: Vec<Rgb>,
        fail: bool,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.pixels = iterator.into_iter().map(Into::into).collect();
            Ok(())
        }
    }

    fn config(animation: AnimationId) -> RunnerConfig {
        RunnerConfig {
            animation,
            frame_duration: Duration::from_millis(20),
            ..RunnerConfig::new(LAYOUT)
        }
    }

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::new(LAYOUT);
        assert_eq!(config.animation, AnimationId::Null);
        assert_eq!(config.frame_duration, DEFAULT_FRAME_DURATION);
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(16));
    }

    #[test]
    fn test_setup_runs_once_per_activation() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(0);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::Null),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );

        let mut leds = [WHITE; 32];
        runner.tick(&mut leds).unwrap();
        assert!(runner.output().frames[0].iter().all(|&led| led == OFF));

        // Null only clears in setup, so a second frame keeps what is there
        leds = [WHITE; 32];
        runner.tick(&mut leds).unwrap();
        assert!(runner.output().frames[1].iter().all(|&led| led == WHITE));
    }

    #[test]
    fn test_switch_request_is_applied_before_the_frame() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(1_000);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::Null),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );
        let mut leds = [OFF; 32];
        runner.tick(&mut leds).unwrap();

        switches.sender().try_send(AnimationId::FauxTv).unwrap();
        clock.advance(20);
        runner.tick(&mut leds).unwrap();

        assert_eq!(runner.animation().id(), AnimationId::FauxTv);
        assert!(switches.is_empty());
        assert!(runner.output().frames[1].iter().all(|&led| led != OFF));
    }

    #[test]
    fn test_latest_switch_request_wins() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(0);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::Null),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );

        let sender = switches.sender();
        sender.try_send(AnimationId::FauxTv).unwrap();
        sender.try_send(AnimationId::Starfield).unwrap();

        let mut leds = [OFF; 32];
        runner.tick(&mut leds).unwrap();
        assert_eq!(runner.animation().id(), AnimationId::Starfield);
    }

    #[test]
    fn test_switch_to_null_overwrites_previous_frame() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(5_000);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::FauxTv),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );

        let mut leds = [OFF; 32];
        runner.tick(&mut leds).unwrap();
        assert!(leds.iter().all(|&led| led != OFF));

        runner.switch_to(AnimationId::Null);
        clock.advance(20);
        runner.tick(&mut leds).unwrap();
        assert!(leds.iter().all(|&led| led == OFF));
        assert!(runner.output().frames[1].iter().all(|&led| led == OFF));
    }

    #[test]
    fn test_short_buffer_writes_nothing() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(0);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::FauxTv),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );

        let mut leds = [OFF; 10];
        assert_eq!(
            runner.tick(&mut leds),
            Err(GridError::BufferTooSmall {
                required: 32,
                actual: 10
            })
        );
        assert!(runner.output().frames.is_empty());
    }

    #[test]
    fn test_frame_pacing() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(1_000);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::Starfield),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );
        let mut leds = [OFF; 32];

        assert_eq!(
            runner.tick(&mut leds),
            Ok(FrameResult {
                next_deadline: 1_020,
                sleep_duration: Duration::from_millis(20),
            })
        );

        // Early frame: keep the schedule
        clock.advance(5);
        assert_eq!(
            runner.tick(&mut leds),
            Ok(FrameResult {
                next_deadline: 1_040,
                sleep_duration: Duration::from_millis(35),
            })
        );

        // Late frame within the drift window: keep the schedule, shorter sleep
        clock.set(1_050);
        assert_eq!(
            runner.tick(&mut leds),
            Ok(FrameResult {
                next_deadline: 1_060,
                sleep_duration: Duration::from_millis(10),
            })
        );

        // Long stall: restart from now instead of catching up
        clock.set(2_000);
        assert_eq!(
            runner.tick(&mut leds),
            Ok(FrameResult {
                next_deadline: 2_020,
                sleep_duration: Duration::from_millis(20),
            })
        );
    }

    #[test]
    fn test_frame_pacing_across_clock_wrap() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(u32::MAX - 9);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::Null),
            &clock,
            RecordingOutput::default(),
            switches.receiver(),
        );
        let mut leds = [OFF; 32];

        let first = runner.tick(&mut leds).unwrap();
        assert_eq!(first.next_deadline, 10);
        assert_eq!(first.sleep_duration, Duration::from_millis(20));

        clock.advance(20);
        let second = runner.tick(&mut leds).unwrap();
        assert_eq!(second.next_deadline, 30);
        assert_eq!(second.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_smart_leds_output_forwards_frames() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(3_000);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::FauxTv),
            &clock,
            SmartLedsOutput::new(FakeStrip::default()),
            switches.receiver(),
        );

        let mut leds = [OFF; 32];
        runner.tick(&mut leds).unwrap();
        assert_eq!(runner.output().writer().pixels, leds);
        assert_eq!(runner.output().failed_writes(), 0);
    }

    #[test]
    fn test_smart_leds_output_counts_failed_writes() {
        let switches = SwitchChannel::<4>::new();
        let clock = ManualClock::new(3_000);
        let mut runner = AnimationRunner::new(
            &config(AnimationId::FauxTv),
            &clock,
            SmartLedsOutput::new(FakeStrip::default()),
            switches.receiver(),
        );
        let mut leds = [OFF; 32];
        runner.tick(&mut leds).unwrap();
        let accepted = leds;

        runner.output_mut().writer_mut().fail = true;
        clock.advance(500);
        runner.tick(&mut leds).unwrap();
        clock.advance(20);
        runner.tick(&mut leds).unwrap();

        assert_ne!(leds, accepted);
        assert_eq!(runner.output().failed_writes(), 2);
        assert_eq!(runner.output().writer().pixels, accepted);
    }
}
