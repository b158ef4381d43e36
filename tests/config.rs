mod tests {
    use myrtio_section_composer::color::Rgb;
    use myrtio_section_composer::config::{DEFAULT_SECTIONS, SectionsConfig};
    use myrtio_section_composer::effect::{
        EffectSlot, PulseEffect, SolidEffect, StrobeEffect, WipeDirection, WipeEffect,
    };
    use myrtio_section_composer::scene::{Scene, SceneStep};
    use myrtio_section_composer::section::{SectionRegistry, SectionSpec};

    #[test]
    fn test_sections_config_from_json() {
        let json = r#"{"sections": [{"name": "Front", "count": 50}, {"name": "Rear", "count": 30}]}"#;
        let config: SectionsConfig<16> = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.sections.as_slice(),
            &[
                SectionSpec::new("Front", 50).unwrap(),
                SectionSpec::new("Rear", 30).unwrap()
            ]
        );

        let registry = SectionRegistry::<16>::with_sections(80, &config.sections).unwrap();
        assert_eq!(registry.list()[1].start, 50);
    }

    #[test]
    fn test_sections_config_round_trip() {
        let config = SectionsConfig::<16>::stock().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SectionsConfig<16> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_sections_config_from_registry() {
        let mut registry = SectionRegistry::<16>::with_sections(80, &[]).unwrap();
        registry
            .replace_all(&[
                SectionSpec::new("Rear", 30).unwrap(),
                SectionSpec::new("Front", 50).unwrap(),
            ])
            .unwrap();

        let config = SectionsConfig::from_registry(&registry);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"sections":[{"name":"Rear","count":30},{"name":"Front","count":50}]}"#
        );
    }

    #[test]
    fn test_stock_layout() {
        let config = SectionsConfig::<16>::stock().unwrap();
        assert_eq!(config.sections.len(), DEFAULT_SECTIONS.len());
        assert_eq!(config.sections[0].name.as_str(), "Left Windows");
        assert_eq!(config.sections[9].count, 0);

        let registry = SectionRegistry::<16>::with_sections(18, &config.sections).unwrap();
        assert_eq!(registry.mapped_count(), 18);

        assert!(SectionsConfig::<4>::stock().is_err());
    }

    #[test]
    fn test_effect_from_json() {
        let strobe: EffectSlot = serde_json::from_str(
            r#"{"strobe": {"color": {"r": 0, "g": 255, "b": 0}, "frequency": 2.0, "duration": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(
            strobe,
            EffectSlot::Strobe(StrobeEffect {
                color: Rgb { r: 0, g: 255, b: 0 },
                frequency: 2.0,
                duration: 1.0,
            })
        );

        let off: EffectSlot = serde_json::from_str(r#""off""#).unwrap();
        assert_eq!(off, EffectSlot::Off);

        let on: EffectSlot =
            serde_json::from_str(r#"{"on": {"color": {"r": 1, "g": 2, "b": 3}}}"#).unwrap();
        assert_eq!(on, EffectSlot::On(SolidEffect::new(Rgb { r: 1, g: 2, b: 3 })));
    }

    #[test]
    fn test_effect_defaults_from_json() {
        let pulse: EffectSlot = serde_json::from_str(r#"{"pulse": {}}"#).unwrap();
        assert_eq!(pulse, EffectSlot::Pulse(PulseEffect::default()));

        let wipe: EffectSlot =
            serde_json::from_str(r#"{"wipe": {"direction": "backward"}}"#).unwrap();
        assert_eq!(
            wipe,
            EffectSlot::Wipe(WipeEffect {
                direction: WipeDirection::Backward,
                ..WipeEffect::default()
            })
        );

        assert!(serde_json::from_str::<EffectSlot>(r#"{"lava": {}}"#).is_err());
    }

    #[test]
    fn test_scene_from_json() {
        let json = r#"{
            "name": "Test",
            "steps": [
                {"run_effect": {"section": "Front", "effect": {"color": {"color": {"r": 255, "g": 0, "b": 0}}}}},
                {"play_sound": {"file": "horn.wav"}},
                {"wait": {"seconds": 0.5}},
                "stop_sound"
            ]
        }"#;
        let scene: Scene<8> = serde_json::from_str(json).unwrap();

        assert_eq!(scene.name.as_str(), "Test");
        assert!(scene.description.is_empty());
        assert_eq!(scene.steps.len(), 4);
        assert_eq!(scene.steps[2], SceneStep::Wait { seconds: 0.5 });
        assert_eq!(scene.steps[3], SceneStep::StopSound);
        assert!(matches!(
            &scene.steps[0],
            SceneStep::RunEffect { section, effect: EffectSlot::Color(_) } if section.as_str() == "Front"
        ));

        assert!(serde_json::from_str::<Scene<2>>(json).is_err());
    }
}
