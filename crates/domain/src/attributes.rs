//! Attribute value objects - the five-attribute block every sheet carries.
//!
//! Persisted with the short keys the table uses on paper (`vig`, `agi`,
//! `int`, `per`, `pre`) so existing documents keep loading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five sheet attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Vigor - physical resilience, feeds the health pool
    #[serde(rename = "vig")]
    Vigor,
    /// Agility - speed and reflexes
    #[serde(rename = "agi")]
    Agility,
    /// Intellect - reasoning and technical skill
    #[serde(rename = "int")]
    Intellect,
    /// Perception - awareness of the scene
    #[serde(rename = "per")]
    Perception,
    /// Presence - force of personality, feeds the sanity pool
    #[serde(rename = "pre")]
    Presence,
}

impl Attribute {
    /// Short lowercase key as written on the sheet (e.g. "vig").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vigor => "vig",
            Self::Agility => "agi",
            Self::Intellect => "int",
            Self::Perception => "per",
            Self::Presence => "pre",
        }
    }

    /// Full display name (e.g. "Vigor").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vigor => "Vigor",
            Self::Agility => "Agilidade",
            Self::Intellect => "Intelecto",
            Self::Perception => "Percepção",
            Self::Presence => "Presença",
        }
    }

    /// All five attributes, in sheet order.
    pub fn all() -> [Attribute; 5] {
        [
            Self::Vigor,
            Self::Agility,
            Self::Intellect,
            Self::Perception,
            Self::Presence,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vig" => Ok(Self::Vigor),
            "agi" => Ok(Self::Agility),
            "int" => Ok(Self::Intellect),
            "per" => Ok(Self::Perception),
            "pre" => Ok(Self::Presence),
            _ => Err(()),
        }
    }
}

/// The full five-attribute block of a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "vig")]
    pub vigor: i32,
    #[serde(rename = "agi")]
    pub agility: i32,
    #[serde(rename = "int")]
    pub intellect: i32,
    #[serde(rename = "per")]
    pub perception: i32,
    #[serde(rename = "pre")]
    pub presence: i32,
}

impl Attributes {
    pub fn new(vigor: i32, agility: i32, intellect: i32, perception: i32, presence: i32) -> Self {
        Self {
            vigor,
            agility,
            intellect,
            perception,
            presence,
        }
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Vigor => self.vigor,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
            Attribute::Perception => self.perception,
            Attribute::Presence => self.presence,
        }
    }

    pub fn add(&mut self, attr: Attribute, delta: i32) {
        match attr {
            Attribute::Vigor => self.vigor += delta,
            Attribute::Agility => self.agility += delta,
            Attribute::Intellect => self.intellect += delta,
            Attribute::Perception => self.perception += delta,
            Attribute::Presence => self.presence += delta,
        }
    }

    /// Sum of all five base values; creation budget is 10.
    pub fn sum(&self) -> i32 {
        self.vigor + self.agility + self.intellect + self.perception + self.presence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_round_trip() {
        let attrs = Attributes::new(2, 3, 1, 2, 2);
        let json = serde_json::to_string(&attrs).expect("serialize");
        assert!(json.contains("\"vig\":2"));
        assert!(json.contains("\"pre\":2"));
        let back: Attributes = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, attrs);
    }

    #[test]
    fn get_and_add_agree() {
        let mut attrs = Attributes::default();
        for attr in Attribute::all() {
            attrs.add(attr, 2);
            assert_eq!(attrs.get(attr), 2);
        }
        assert_eq!(attrs.sum(), 10);
    }
}
