//! The assembled report and its serialization shape.
//!
//! A report is an ordered collection of named sections, one per collector.
//! Each section is an ordered mapping from field name to either a scalar
//! count or a one-level-nested breakdown. Field and section order follow the
//! order in which they were added, and breakdown keys arrive pre-sorted from
//! [`crate::accum::CountMap`], so serializing the same report twice produces
//! byte-identical output.
//!
//! The schema (section names, field names, breakdown key format) is a
//! compatibility surface consumed by external tooling; see DESIGN.md.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single field value inside a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetricValue {
    /// A scalar counter.
    Count(u64),
    /// A nested label → count mapping ("by X" breakdowns).
    Breakdown(Vec<(String, u64)>),
}

/// One named sub-report contributed by one collector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    fields: Vec<(&'static str, MetricValue)>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scalar field (builder style).
    #[must_use]
    pub fn count(mut self, name: &'static str, value: u64) -> Self {
        self.fields.push((name, MetricValue::Count(value)));
        self
    }

    /// Appends a nested breakdown field (builder style). The entries are
    /// rendered in the order given.
    #[must_use]
    pub fn breakdown(mut self, name: &'static str, entries: Vec<(String, u64)>) -> Self {
        self.fields.push((name, MetricValue::Breakdown(entries)));
        self
    }

    /// Fields in rendering order.
    pub fn fields(&self) -> &[(&'static str, MetricValue)] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&MetricValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Looks up a scalar field by name.
    pub fn scalar(&self, name: &str) -> Option<u64> {
        match self.field(name) {
            Some(MetricValue::Count(value)) => Some(*value),
            _ => None,
        }
    }
}

/// The merged output of one full aggregation pass.
///
/// Section names are fixed, known in advance, and never duplicated; every
/// registered collector produces exactly one section even when all its
/// counters are zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<(&'static str, Section)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section under its collector-provided name.
    pub fn push_section(&mut self, name: &'static str, section: Section) {
        debug_assert!(
            self.section(name).is_none(),
            "duplicate report section: {name}"
        );
        self.sections.push((name, section));
    }

    /// Sections in registration order.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &Section)> {
        self.sections.iter().map(|(name, section)| (*name, section))
    }

    /// Looks up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(section_name, _)| *section_name == name)
            .map(|(_, section)| section)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// Manual Serialize impls: serde's derive would require map types, and the
// whole point here is preserving the insertion order of sections and fields.

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Count(value) => serializer.serialize_u64(*value),
            MetricValue::Breakdown(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (label, count) in entries {
                    map.serialize_entry(label, count)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, section) in &self.sections {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}
