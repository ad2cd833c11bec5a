use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an element tracked for visibility.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the `index`-th item nested under `parent`, e.g. `experience/item-2`.
    pub fn item(parent: &ElementId, index: usize) -> Self {
        Self(format!("{}/item-{index}", parent.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionAnchor {
    Home,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionAnchor {
    /// Page order, top to bottom.
    pub const ALL: [SectionAnchor; 5] = [
        SectionAnchor::Home,
        SectionAnchor::Skills,
        SectionAnchor::Projects,
        SectionAnchor::Experience,
        SectionAnchor::Contact,
    ];

    pub fn fragment(self) -> &'static str {
        match self {
            SectionAnchor::Home => "#home",
            SectionAnchor::Skills => "#skills",
            SectionAnchor::Projects => "#projects",
            SectionAnchor::Experience => "#experience",
            SectionAnchor::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionAnchor::Home => "Home",
            SectionAnchor::Skills => "Skills",
            SectionAnchor::Projects => "Projects",
            SectionAnchor::Experience => "Experience",
            SectionAnchor::Contact => "Contact",
        }
    }

    pub fn from_fragment(fragment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.fragment() == fragment)
    }

    /// Element id under which the section itself is observed.
    pub fn element_id(self) -> ElementId {
        ElementId::new(&self.fragment()[1..])
    }
}

impl fmt::Display for SectionAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Pending,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Triangle,
    Square,
    Hexagon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(digits.get(at..at + 2)?, 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_round_trip_through_lookup() {
        for anchor in SectionAnchor::ALL {
            assert_eq!(SectionAnchor::from_fragment(anchor.fragment()), Some(anchor));
        }
        assert_eq!(SectionAnchor::from_fragment("#about"), None);
        assert_eq!(SectionAnchor::from_fragment("skills"), None);
    }

    #[test]
    fn nested_item_ids_carry_parent_prefix() {
        let parent = SectionAnchor::Experience.element_id();
        assert_eq!(parent.as_str(), "experience");
        assert_eq!(ElementId::item(&parent, 3).as_str(), "experience/item-3");
    }

    #[test]
    fn parses_palette_hex_colours() {
        assert_eq!(Rgb::from_hex("#06B6D4"), Some(Rgb(0x06, 0xB6, 0xD4)));
        assert_eq!(Rgb::from_hex("06B6D4"), None);
        assert_eq!(Rgb::from_hex("#06B6"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
    }
}
