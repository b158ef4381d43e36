mod tests {
    use embassy_time::Duration;
    use myrtio_section_composer::math8::{
        as_secs_f32, blend8, from_secs_f32, hash32, hash_unit, progress8, scale8, unit8,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress8(Duration::from_millis(50), Duration::from_millis(100)),
            127
        );
        assert_eq!(
            progress8(Duration::from_millis(100), Duration::from_millis(100)),
            255
        );
        assert_eq!(
            progress8(Duration::from_millis(200), Duration::from_millis(100)),
            255
        );
    }

    #[test]
    fn test_progress8_zero_duration_is_done() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(0)),
            255
        );
    }

    #[test]
    fn test_unit8() {
        assert_eq!(unit8(0.0), 0);
        assert_eq!(unit8(0.5), 128);
        assert_eq!(unit8(1.0), 255);
        assert_eq!(unit8(-1.0), 0);
        assert_eq!(unit8(7.0), 255);
        assert_eq!(unit8(f32::NAN), 0);
    }

    #[test]
    fn test_seconds_conversion() {
        assert_eq!(from_secs_f32(1.5), Duration::from_millis(1500));
        assert_eq!(from_secs_f32(0.0), Duration::from_millis(0));
        assert_eq!(from_secs_f32(-2.0), Duration::from_millis(0));
        assert_eq!(from_secs_f32(f32::NAN), Duration::from_millis(0));
        assert!((as_secs_f32(Duration::from_millis(250)) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash32(7, 100, 3), hash32(7, 100, 3));
        assert_ne!(hash32(7, 100, 3), hash32(8, 100, 3));
        assert_ne!(hash32(7, 100, 3), hash32(7, 101, 3));
        assert_ne!(hash32(7, 100, 3), hash32(7, 100, 4));

        for i in 0..256 {
            let value = hash_unit(42, 1000, i);
            assert!((0.0..1.0).contains(&value));
        }
    }
}
