mod tests {
    use myrtio_section_composer::bounds::SectionRange;
    use myrtio_section_composer::error::{ConfigError, LookupError};
    use myrtio_section_composer::section::{ALL_SECTION, SectionRegistry, SectionSpec};

    fn spec(name: &str, count: usize) -> SectionSpec {
        SectionSpec::new(name, count).unwrap()
    }

    fn layout() -> [SectionSpec; 4] {
        [spec("A", 2), spec("B", 3), spec("C", 0), spec("D", 4)]
    }

    #[test]
    fn test_starts_are_derived_from_counts() {
        let registry = SectionRegistry::<8>::with_sections(10, &layout()).unwrap();

        assert_eq!(registry.resolve("A"), Ok(SectionRange::new(0, 2)));
        assert_eq!(registry.resolve("B"), Ok(SectionRange::new(2, 3)));
        assert_eq!(registry.resolve("C"), Ok(SectionRange::new(5, 0)));
        assert_eq!(registry.resolve("D"), Ok(SectionRange::new(5, 4)));
        assert_eq!(registry.mapped_count(), 9);
    }

    #[test]
    fn test_ranges_are_contiguous_and_disjoint() {
        let registry = SectionRegistry::<8>::with_sections(10, &layout()).unwrap();
        let sections = registry.list();

        let mut next = 0;
        for (i, section) in sections.iter().enumerate() {
            assert_eq!(section.start, next);
            next = section.range().end();
            for other in &sections[i + 1..] {
                assert!(!section.range().overlaps(other.range()));
            }
        }
        assert!(next <= registry.pixel_count());
    }

    #[test]
    fn test_all_spans_the_strip() {
        let registry = SectionRegistry::<8>::with_sections(10, &layout()).unwrap();
        assert_eq!(registry.resolve(ALL_SECTION), Ok(SectionRange::new(0, 10)));
        assert_eq!(registry.resolve(""), Ok(SectionRange::new(0, 10)));

        let empty = SectionRegistry::<8>::new(10);
        assert_eq!(empty.resolve(ALL_SECTION), Ok(SectionRange::new(0, 10)));
    }

    #[test]
    fn test_unknown_section() {
        let registry = SectionRegistry::<8>::with_sections(10, &layout()).unwrap();
        assert_eq!(registry.resolve("Side"), Err(LookupError));
        assert!(!registry.contains("Side"));
        assert!(registry.contains("A"));
        assert!(registry.contains(ALL_SECTION));
    }

    #[test]
    fn test_overflow_is_rejected_atomically() {
        let mut registry = SectionRegistry::<8>::with_sections(10, &layout()).unwrap();
        let before = registry.clone();

        let result = registry.replace_all(&[spec("A", 6), spec("B", 5)]);
        assert_eq!(
            result,
            Err(ConfigError::Overflow {
                required: 11,
                available: 10
            })
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let mut registry = SectionRegistry::<8>::new(10);

        assert_eq!(
            registry.replace_all(&[spec("A", 1), spec("A", 1)]),
            Err(ConfigError::DuplicateName)
        );
        assert_eq!(
            registry.replace_all(&[spec("", 1)]),
            Err(ConfigError::EmptyName)
        );
        assert_eq!(
            registry.replace_all(&[spec(ALL_SECTION, 1)]),
            Err(ConfigError::ReservedName)
        );
        assert!(registry.list().is_empty());

        let long = "x".repeat(64);
        assert_eq!(SectionSpec::new(&long, 1), Err(ConfigError::NameTooLong));
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut registry = SectionRegistry::<2>::new(10);
        assert_eq!(
            registry.replace_all(&[spec("A", 1), spec("B", 1), spec("C", 1)]),
            Err(ConfigError::TooManySections)
        );
    }

    #[test]
    fn test_reorder_recomputes_starts() {
        let mut registry = SectionRegistry::<8>::with_sections(10, &layout()).unwrap();
        registry.replace_all(&[spec("D", 4), spec("A", 2)]).unwrap();

        assert_eq!(registry.resolve("D"), Ok(SectionRange::new(0, 4)));
        assert_eq!(registry.resolve("A"), Ok(SectionRange::new(4, 2)));
        assert_eq!(registry.resolve("B"), Err(LookupError));

        let specs = registry.specs();
        assert_eq!(specs.as_slice(), &[spec("D", 4), spec("A", 2)]);
    }
}
