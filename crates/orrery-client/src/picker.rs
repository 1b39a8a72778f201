//! The column of body buttons that open the info panel.

use orrery_scene::BodyKind;

/// One button in the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerEntry {
    pub kind: BodyKind,
    pub label: &'static str,
    pub api_name: &'static str,
}

impl From<BodyKind> for PickerEntry {
    fn from(kind: BodyKind) -> Self {
        Self {
            kind,
            label: kind.display_name(),
            api_name: kind.api_name(),
        }
    }
}

/// Picker order: planets outward with the Moon after Earth, then the Sun.
const ORDER: [BodyKind; 11] = [
    BodyKind::Mercury,
    BodyKind::Venus,
    BodyKind::Earth,
    BodyKind::Moon,
    BodyKind::Mars,
    BodyKind::Jupiter,
    BodyKind::Saturn,
    BodyKind::Uranus,
    BodyKind::Neptune,
    BodyKind::Pluto,
    BodyKind::Sun,
];

#[derive(Clone, Debug)]
pub struct BodyPicker {
    entries: Vec<PickerEntry>,
}

impl Default for BodyPicker {
    fn default() -> Self {
        Self {
            entries: ORDER.into_iter().map(PickerEntry::from).collect(),
        }
    }
}

impl BodyPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    /// Entry whose label or API name matches, ignoring case.
    pub fn find(&self, name: &str) -> Option<&PickerEntry> {
        let name = name.trim();
        self.entries.iter().find(|entry| {
            entry.label.eq_ignore_ascii_case(name) || entry.api_name.eq_ignore_ascii_case(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_body_is_pickable() {
        let picker = BodyPicker::new();
        assert_eq!(picker.entries().len(), BodyKind::ALL.len());
        for kind in BodyKind::ALL {
            assert!(picker.entries().iter().any(|e| e.kind == kind), "{kind}");
        }
    }

    #[test]
    fn test_order_and_names() {
        let picker = BodyPicker::new();
        let labels: Vec<_> = picker.entries().iter().map(|e| e.label).collect();
        assert_eq!(labels.first(), Some(&"Mercury"));
        assert_eq!(labels[3], "Moon");
        assert_eq!(labels[8], "Neptune");
        assert_eq!(labels.last(), Some(&"Sun"));
        assert!(picker.entries().iter().all(|e| e.api_name == e.label.to_lowercase()));
    }

    #[test]
    fn test_find() {
        let picker = BodyPicker::new();
        assert_eq!(picker.find("NEPTUNE").map(|e| e.kind), Some(BodyKind::Neptune));
        assert!(picker.find("ceres").is_none());
    }
}
