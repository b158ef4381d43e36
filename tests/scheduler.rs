mod tests {
    use embassy_time::Instant;
    use myrtio_section_composer::color::{BLACK, Rgb, WHITE};
    use myrtio_section_composer::effect::{
        EffectKind, EffectSlot, FadeEffect, PulseEffect, RainbowEffect, SolidEffect, StrobeEffect,
        WipeEffect,
    };
    use myrtio_section_composer::error::SchedulerError;
    use myrtio_section_composer::pixels::PixelBuffer;
    use myrtio_section_composer::scheduler::{EffectScheduler, InstanceState};
    use myrtio_section_composer::section::{ALL_SECTION, SectionRegistry, SectionSpec};

    const N: usize = 80;
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    type Scheduler = EffectScheduler<N, 4>;

    fn registry() -> SectionRegistry<4> {
        SectionRegistry::with_sections(
            N,
            &[
                SectionSpec::new("Front", 50).unwrap(),
                SectionSpec::new("Rear", 30).unwrap(),
            ],
        )
        .unwrap()
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn color(color: Rgb) -> EffectSlot {
        EffectSlot::Color(SolidEffect::new(color))
    }

    #[test]
    fn test_color_touches_only_its_section() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        frame.fill(WHITE);
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Front", color(RED), at(0))
            .unwrap();
        scheduler.tick(at(0), &registry, &mut frame);

        assert!(frame.as_slice()[..50].iter().all(|led| *led == RED));
        assert!(frame.as_slice()[50..].iter().all(|led| *led == WHITE));
    }

    #[test]
    fn test_all_and_named_sections_coexist() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        let mut scheduler = Scheduler::new();

        let strobe = EffectSlot::Strobe(StrobeEffect {
            color: GREEN,
            frequency: 2.0,
            duration: 1.0,
        });
        scheduler.start(&registry, ALL_SECTION, strobe, at(0)).unwrap();
        scheduler
            .start(&registry, "Front", color(BLUE), at(0))
            .unwrap();
        assert!(scheduler.is_active(ALL_SECTION));
        assert!(scheduler.is_active("Front"));

        scheduler.tick(at(0), &registry, &mut frame);
        assert!(frame.as_slice()[..50].iter().all(|led| *led == BLUE));
        assert!(frame.as_slice()[50..].iter().all(|led| *led == GREEN));

        scheduler.tick(at(300), &registry, &mut frame);
        assert!(frame.as_slice()[..50].iter().all(|led| *led == BLUE));
        assert!(frame.as_slice()[50..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_all_preempts_named_sections() {
        let registry = registry();
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Front", color(RED), at(0))
            .unwrap();
        scheduler
            .start(&registry, "Rear", color(BLUE), at(0))
            .unwrap();
        assert_eq!(scheduler.active_count(), 2);

        scheduler
            .start(&registry, ALL_SECTION, EffectSlot::Off, at(10))
            .unwrap();
        assert_eq!(scheduler.active_count(), 1);
        assert!(!scheduler.is_active("Front"));
        assert!(!scheduler.is_active("Rear"));
        assert!(scheduler.is_active(ALL_SECTION));
    }

    #[test]
    fn test_named_start_keeps_other_sections() {
        let registry = registry();
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Front", color(RED), at(0))
            .unwrap();
        scheduler
            .start(&registry, "Rear", color(BLUE), at(0))
            .unwrap();
        scheduler
            .start(&registry, "Front", color(GREEN), at(5))
            .unwrap();

        assert_eq!(scheduler.active_count(), 2);
        assert_eq!(
            scheduler.active("Front").map(|instance| *instance.effect()),
            Some(color(GREEN))
        );
        assert_eq!(
            scheduler.active("Rear").map(|instance| *instance.effect()),
            Some(color(BLUE))
        );
    }

    #[test]
    fn test_start_rejects_bad_requests() {
        let registry = registry();
        let mut scheduler = Scheduler::new();

        assert_eq!(
            scheduler.start(&registry, "Side", color(RED), at(0)),
            Err(SchedulerError::UnknownSection)
        );

        let wipe = EffectSlot::Wipe(WipeEffect {
            speed: 0.0,
            ..WipeEffect::default()
        });
        assert!(matches!(
            scheduler.start(&registry, "Front", wipe, at(0)),
            Err(SchedulerError::InvalidParameter(_))
        ));
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn test_pulse_holds_final_frame_then_leaves() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        let mut scheduler = Scheduler::new();

        let pulse = EffectSlot::Pulse(PulseEffect {
            color: RED,
            duration: 2.0,
        });
        scheduler.start(&registry, "Front", pulse, at(0)).unwrap();

        scheduler.tick(at(0), &registry, &mut frame);
        assert_eq!(frame.as_slice()[0], BLACK);

        scheduler.tick(at(2001), &registry, &mut frame);
        assert!(pulse.is_complete(at(2001) - at(0), 50));
        assert_eq!(frame.as_slice()[0], RED);
        assert_eq!(
            scheduler.active("Front").map(|instance| instance.state()),
            Some(InstanceState::Finished)
        );

        scheduler.tick(at(2017), &registry, &mut frame);
        assert!(!scheduler.is_active("Front"));
        assert!(frame.as_slice()[..50].iter().all(|led| *led == RED));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        frame.fill(BLUE);
        let mut scheduler = Scheduler::new();

        scheduler.stop("Front");
        scheduler.stop("Front");
        scheduler.stop(ALL_SECTION);
        scheduler.tick(at(0), &registry, &mut frame);

        assert!(frame.as_slice().iter().all(|led| *led == BLUE));
    }

    #[test]
    fn test_stop_keeps_last_pixels() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Rear", color(GREEN), at(0))
            .unwrap();
        scheduler.tick(at(0), &registry, &mut frame);
        scheduler.stop("Rear");
        scheduler.tick(at(16), &registry, &mut frame);

        assert!(!scheduler.is_active("Rear"));
        assert!(frame.as_slice()[50..].iter().all(|led| *led == GREEN));
    }

    #[test]
    fn test_zero_duration_restores_section() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Front", color(BLUE), at(0))
            .unwrap();
        scheduler.tick(at(0), &registry, &mut frame);

        let pulse = EffectSlot::Pulse(PulseEffect {
            color: RED,
            duration: 0.0,
        });
        scheduler.start(&registry, "Front", pulse, at(10)).unwrap();
        scheduler.tick(at(16), &registry, &mut frame);
        assert!(frame.as_slice()[..50].iter().all(|led| *led == BLUE));

        scheduler.tick(at(32), &registry, &mut frame);
        assert!(!scheduler.is_active("Front"));
        assert!(frame.as_slice()[..50].iter().all(|led| *led == BLUE));
    }

    #[test]
    fn test_fade_starts_from_current_pixels() {
        let registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        frame.fill(WHITE);
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Front", color(RED), at(0))
            .unwrap();
        scheduler.tick(at(0), &registry, &mut frame);

        let fade = EffectSlot::Fade(FadeEffect {
            color: BLACK,
            duration: 1.0,
        });
        scheduler.start(&registry, "Front", fade, at(100)).unwrap();

        scheduler.tick(at(100), &registry, &mut frame);
        assert_eq!(frame.as_slice()[0], RED);

        scheduler.tick(at(600), &registry, &mut frame);
        let mid = frame.as_slice()[0];
        assert!(mid.r > 0 && mid.r < 255);
        assert_eq!((mid.g, mid.b), (0, 0));

        scheduler.tick(at(1100), &registry, &mut frame);
        assert_eq!(frame.as_slice()[0], BLACK);
        assert!(frame.as_slice()[50..].iter().all(|led| *led == WHITE));
    }

    #[test]
    fn test_removed_section_drops_its_instance() {
        let mut registry = registry();
        let mut frame = PixelBuffer::<N>::new(N);
        let mut scheduler = Scheduler::new();

        scheduler
            .start(&registry, "Rear", color(GREEN), at(0))
            .unwrap();
        scheduler.tick(at(0), &registry, &mut frame);

        registry
            .replace_all(&[SectionSpec::new("Front", 80).unwrap()])
            .unwrap();
        scheduler.tick(at(16), &registry, &mut frame);
        assert!(!scheduler.is_active("Rear"));

        scheduler
            .start(&registry, "Rear", color(GREEN), at(20))
            .unwrap_err();
    }

    #[test]
    fn test_instances_get_distinct_seeds() {
        let registry = registry();
        let mut scheduler = Scheduler::with_seed(1);

        scheduler
            .start(&registry, "Front", color(RED), at(0))
            .unwrap();
        scheduler
            .start(&registry, "Rear", color(RED), at(0))
            .unwrap();

        let front = scheduler.active("Front").map(|instance| instance.seed());
        let rear = scheduler.active("Rear").map(|instance| instance.seed());
        assert_ne!(front, rear);
    }

    #[test]
    fn test_every_kind_on_tiny_sections() {
        let registry = SectionRegistry::<4>::with_sections(
            4,
            &[
                SectionSpec::new("Zero", 0).unwrap(),
                SectionSpec::new("One", 1).unwrap(),
                SectionSpec::new("Two", 2).unwrap(),
                SectionSpec::new("Edge", 1).unwrap(),
            ],
        )
        .unwrap();

        for kind in EffectKind::ALL {
            for (section, start, count) in [("Zero", 0, 0), ("One", 0, 1), ("Two", 1, 2)] {
                let effect = kind.to_slot(Some(RED));
                let mut frame = PixelBuffer::<N>::new(4);
                frame.fill(BLUE);
                let mut scheduler = Scheduler::new();
                scheduler.start(&registry, section, effect, at(0)).unwrap();

                let run_ms = effect
                    .run_time(count)
                    .map_or(1_000, |run| run.as_millis());
                let mut now = 0;
                while now <= run_ms + 200 {
                    scheduler.tick(at(now), &registry, &mut frame);
                    now += 100;
                }

                let pixels = frame.as_slice();
                assert_eq!(pixels.len(), 4);
                for (i, led) in pixels.iter().enumerate() {
                    if i < start || i >= start + count {
                        let kind = kind.as_str();
                        assert_eq!(*led, BLUE, "{kind} on {section} wrote pixel {i}");
                    }
                }
                assert_eq!(
                    scheduler.is_active(section),
                    effect.is_persistent(count),
                    "{} on {}",
                    kind.as_str(),
                    section
                );
            }
        }
    }

    #[test]
    fn test_rainbow_on_stock_sized_sections() {
        let registry = SectionRegistry::<4>::with_sections(
            3,
            &[
                SectionSpec::new("Left Windows", 2).unwrap(),
                SectionSpec::new("Top Light", 1).unwrap(),
            ],
        )
        .unwrap();
        let mut frame = PixelBuffer::<N>::new(3);
        let mut scheduler = Scheduler::new();

        let rainbow = EffectSlot::Rainbow(RainbowEffect::endless());
        scheduler
            .start(&registry, "Left Windows", rainbow, at(0))
            .unwrap();
        scheduler
            .start(&registry, "Top Light", rainbow, at(0))
            .unwrap();
        scheduler.tick(at(0), &registry, &mut frame);
        scheduler.tick(at(2_500), &registry, &mut frame);

        let pixels = frame.as_slice();
        assert!(pixels.iter().all(|led| *led != BLACK));
        assert_ne!(pixels[0], pixels[1]);
        assert!(scheduler.is_active("Left Windows"));
    }
}
