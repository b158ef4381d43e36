//! Section registry
//!
//! Maps named, ordered sections onto contiguous ranges of the pixel buffer.
//! A section's start is never stored by the caller: it is the sum of the
//! counts of every preceding section, recomputed on each replacement.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::bounds::SectionRange;
use crate::error::{ConfigError, LookupError};

/// Maximum length of a section name in bytes
pub const SECTION_NAME_LEN: usize = 32;

/// Name of the synthetic section spanning the whole strip
pub const ALL_SECTION: &str = "All";

pub type SectionName = String<SECTION_NAME_LEN>;

/// Build a section name, failing if it does not fit
pub fn section_name(name: &str) -> Result<SectionName, ConfigError> {
    let mut out = SectionName::new();
    out.push_str(name).map_err(|()| ConfigError::NameTooLong)?;
    Ok(out)
}

/// Returns true if the name addresses the whole strip
///
/// An empty name is accepted as an alias, matching clients that omit the
/// section to mean "everything".
pub fn is_all(name: &str) -> bool {
    name.is_empty() || name == ALL_SECTION
}

/// Configured section as provided by the user: name and pixel count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: SectionName,
    pub count: usize,
}

impl SectionSpec {
    pub fn new(name: &str, count: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            name: section_name(name)?,
            count,
        })
    }
}

/// Section with its resolved position in the strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: SectionName,
    pub start: usize,
    pub count: usize,
}

impl Section {
    pub const fn range(&self) -> SectionRange {
        SectionRange::new(self.start, self.count)
    }
}

/// Ordered list of named sections over a strip of fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry<const MAX_SECTIONS: usize> {
    pixel_count: usize,
    sections: Vec<Section, MAX_SECTIONS>,
}

impl<const MAX_SECTIONS: usize> SectionRegistry<MAX_SECTIONS> {
    /// Create an empty registry over `pixel_count` pixels
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            sections: Vec::new(),
        }
    }

    /// Create a registry and install the given layout
    pub fn with_sections(pixel_count: usize, specs: &[SectionSpec]) -> Result<Self, ConfigError> {
        let mut registry = Self::new(pixel_count);
        registry.replace_all(specs)?;
        Ok(registry)
    }

    /// Physical pixel count of the strip
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Sections in layout order
    pub fn list(&self) -> &[Section] {
        &self.sections
    }

    /// Number of pixels covered by named sections
    pub fn mapped_count(&self) -> usize {
        self.sections.iter().map(|section| section.count).sum()
    }

    pub fn contains(&self, name: &str) -> bool {
        is_all(name) || self.find(name).is_some()
    }

    /// Replace the whole ordered list
    ///
    /// The new layout is validated in full before it is installed; on error
    /// the registry is left untouched.
    pub fn replace_all(&mut self, specs: &[SectionSpec]) -> Result<(), ConfigError> {
        self.sections = Self::layout(self.pixel_count, specs)?;
        Ok(())
    }

    /// Resolve a section name into its pixel range
    pub fn resolve(&self, name: &str) -> Result<SectionRange, LookupError> {
        if is_all(name) {
            return Ok(SectionRange::new(0, self.pixel_count));
        }
        self.find(name).map(Section::range).ok_or(LookupError)
    }

    /// Current layout as user-facing specs
    pub fn specs(&self) -> Vec<SectionSpec, MAX_SECTIONS> {
        self.sections
            .iter()
            .map(|section| SectionSpec {
                name: section.name.clone(),
                count: section.count,
            })
            .collect()
    }

    fn find(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.name.as_str() == name)
    }

    fn layout(
        pixel_count: usize,
        specs: &[SectionSpec],
    ) -> Result<Vec<Section, MAX_SECTIONS>, ConfigError> {
        if specs.len() > MAX_SECTIONS {
            return Err(ConfigError::TooManySections);
        }

        let mut sections = Vec::new();
        let mut start = 0usize;
        for (i, spec) in specs.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if spec.name.as_str() == ALL_SECTION {
                return Err(ConfigError::ReservedName);
            }
            if specs[..i].iter().any(|other| other.name == spec.name) {
                return Err(ConfigError::DuplicateName);
            }

            sections
                .push(Section {
                    name: spec.name.clone(),
                    start,
                    count: spec.count,
                })
                .map_err(|_| ConfigError::TooManySections)?;
            start = start.saturating_add(spec.count);
        }

        if start > pixel_count {
            return Err(ConfigError::Overflow {
                required: start,
                available: pixel_count,
            });
        }

        Ok(sections)
    }
}
