//! Dice value objects and rolling.
//!
//! Players roll from a four-die tray; the game master has the full
//! seven-die set. Only the last result per die size is kept.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A polyhedral die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl Die {
    /// Number of faces.
    pub fn faces(&self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// Uppercase label (e.g. "D20"), used for the GM's last-die display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::D4 => "D4",
            Self::D6 => "D6",
            Self::D8 => "D8",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D20 => "D20",
            Self::D100 => "D100",
        }
    }

    /// Lowercase wire key (e.g. "d20").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D4 => "d4",
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::D10 => "d10",
            Self::D12 => "d12",
            Self::D20 => "d20",
            Self::D100 => "d100",
        }
    }

    /// The tray available on every player card.
    pub fn player_dice() -> [Die; 4] {
        [Self::D4, Self::D6, Self::D12, Self::D20]
    }

    /// The game master's full set.
    pub fn gm_dice() -> [Die; 7] {
        [
            Self::D4,
            Self::D6,
            Self::D8,
            Self::D10,
            Self::D12,
            Self::D20,
            Self::D100,
        ]
    }

    /// Parse a die a player may roll; d8/d10/d100 are GM-only.
    pub fn parse_player(s: &str) -> Result<Die, DomainError> {
        let die: Die = s
            .parse()
            .map_err(|_| DomainError::validation(format!("Unknown die: {s}")))?;
        if Self::player_dice().contains(&die) {
            Ok(die)
        } else {
            Err(DomainError::validation(format!(
                "Die {} is not in the player tray",
                die.as_str()
            )))
        }
    }

    /// Parse a die from the game master's set.
    pub fn parse_gm(s: &str) -> Result<Die, DomainError> {
        s.parse()
            .map_err(|_| DomainError::validation(format!("Unknown die: {s}")))
    }

    /// Roll the die: uniform in `[1, faces]`.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(1..=self.faces())
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Die {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d4" => Ok(Self::D4),
            "d6" => Ok(Self::D6),
            "d8" => Ok(Self::D8),
            "d10" => Ok(Self::D10),
            "d12" => Ok(Self::D12),
            "d20" => Ok(Self::D20),
            "d100" => Ok(Self::D100),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = rand::thread_rng();
        for die in Die::gm_dice() {
            for _ in 0..200 {
                let result = die.roll(&mut rng);
                assert!((1..=die.faces()).contains(&result), "{die}: {result}");
            }
        }
    }

    #[test]
    fn player_tray_excludes_gm_only_dice() {
        assert!(Die::parse_player("d12").is_ok());
        assert!(Die::parse_player("D20").is_ok());
        assert!(Die::parse_player("d8").is_err());
        assert!(Die::parse_player("d100").is_err());
        assert!(Die::parse_player("d3").is_err());
    }

    #[test]
    fn gm_set_accepts_all_seven() {
        for die in Die::gm_dice() {
            assert_eq!(Die::parse_gm(die.as_str()).expect("valid"), die);
        }
        assert!(Die::parse_gm("d7").is_err());
    }
}
