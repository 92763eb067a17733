use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Fallback strategy used when the computer rolls a mistake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeuristicLadder {
    /// Block the opponent's immediate win, then center, corner, any cell.
    #[default]
    Block,
    /// Take the computer's own immediate win instead of blocking, then
    /// center, corner, any cell.
    SeekWin,
    /// Own win first, then block, then center, corner, any cell.
    WinThenBlock,
    /// Any available cell, uniformly.
    Random,
}

impl HeuristicLadder {
    pub const ALL: [HeuristicLadder; 4] = [
        HeuristicLadder::Block,
        HeuristicLadder::SeekWin,
        HeuristicLadder::WinThenBlock,
        HeuristicLadder::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeuristicLadder::Block => "block",
            HeuristicLadder::SeekWin => "seek-win",
            HeuristicLadder::WinThenBlock => "win-then-block",
            HeuristicLadder::Random => "random",
        }
    }
}

impl fmt::Display for HeuristicLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicLadder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ladder| ladder.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|l| l.name()).collect();
                format!("Unknown heuristic '{}'. Expected one of: {}", s, names.join(", "))
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Random,
    Easy,
    Medium,
    Hard,
    Smart,
    Unbeatable,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 6] = [
        DifficultyTier::Random,
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Smart,
        DifficultyTier::Unbeatable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DifficultyTier::Random => "random",
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Smart => "smart",
            DifficultyTier::Unbeatable => "unbeatable",
        }
    }

    pub fn mistake_probability(&self) -> f64 {
        match self {
            DifficultyTier::Random | DifficultyTier::Smart => 1.0,
            DifficultyTier::Easy => 0.5,
            DifficultyTier::Medium => 0.2,
            DifficultyTier::Hard => 0.05,
            DifficultyTier::Unbeatable => 0.0,
        }
    }

    pub fn ladder(&self) -> HeuristicLadder {
        match self {
            DifficultyTier::Random => HeuristicLadder::Random,
            DifficultyTier::Easy => HeuristicLadder::SeekWin,
            DifficultyTier::Medium | DifficultyTier::Hard | DifficultyTier::Unbeatable => {
                HeuristicLadder::Block
            }
            DifficultyTier::Smart => HeuristicLadder::WinThenBlock,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        DifficultyProfile {
            name: self.name().to_string(),
            mistake_probability: self.mistake_probability(),
            ladder: self.ladder(),
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.name()).collect();
                format!("Unknown difficulty '{}'. Expected one of: {}", s, names.join(", "))
            })
    }
}

/// Immutable per-game configuration of the computer player.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyProfile {
    name: String,
    mistake_probability: f64,
    ladder: HeuristicLadder,
}

impl DifficultyProfile {
    pub fn new(
        name: impl Into<String>,
        mistake_probability: f64,
        ladder: HeuristicLadder,
    ) -> Result<Self, String> {
        validate_probability(mistake_probability)?;
        Ok(Self {
            name: name.into(),
            mistake_probability,
            ladder,
        })
    }

    pub fn perfect() -> Self {
        DifficultyTier::Unbeatable.profile()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mistake_probability(&self) -> f64 {
        self.mistake_probability
    }

    pub fn ladder(&self) -> HeuristicLadder {
        self.ladder
    }
}

impl fmt::Display for DifficultyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (mistake probability {:.2}, {})",
            self.name, self.mistake_probability, self.ladder
        )
    }
}

fn validate_probability(probability: f64) -> Result<(), String> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(format!(
            "mistake_probability must be between 0 and 1, got {}",
            probability
        ));
    }
    Ok(())
}

/// Difficulty as written in config files: a tier name or a custom profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DifficultySetting {
    Tier(DifficultyTier),
    Custom {
        mistake_probability: f64,
        #[serde(default)]
        ladder: HeuristicLadder,
    },
}

impl DifficultySetting {
    pub fn to_profile(&self) -> Result<DifficultyProfile, String> {
        match self {
            DifficultySetting::Tier(tier) => Ok(tier.profile()),
            DifficultySetting::Custom {
                mistake_probability,
                ladder,
            } => DifficultyProfile::new("custom", *mistake_probability, *ladder),
        }
    }
}

impl Default for DifficultySetting {
    fn default() -> Self {
        DifficultySetting::Tier(DifficultyTier::Medium)
    }
}

impl Validate for DifficultySetting {
    fn validate(&self) -> Result<(), String> {
        match self {
            DifficultySetting::Tier(_) => Ok(()),
            DifficultySetting::Custom {
                mistake_probability,
                ..
            } => validate_probability(*mistake_probability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_profile_rejects_out_of_range_probability() {
        assert!(DifficultyProfile::new("bad", -0.1, HeuristicLadder::Block).is_err());
        assert!(DifficultyProfile::new("bad", 1.5, HeuristicLadder::Block).is_err());
        assert!(DifficultyProfile::new("bad", f64::NAN, HeuristicLadder::Block).is_err());
        assert!(DifficultyProfile::new("edge", 0.0, HeuristicLadder::Block).is_ok());
        assert!(DifficultyProfile::new("edge", 1.0, HeuristicLadder::Random).is_ok());
    }

    #[test]
    fn test_tier_presets() {
        let easy = DifficultyTier::Easy.profile();
        assert_eq!(easy.mistake_probability(), 0.5);
        assert_eq!(easy.ladder(), HeuristicLadder::SeekWin);

        assert_eq!(DifficultyProfile::perfect().mistake_probability(), 0.0);
        assert_eq!(DifficultyTier::Smart.ladder(), HeuristicLadder::WinThenBlock);
        assert_eq!(DifficultyTier::Random.ladder(), HeuristicLadder::Random);
    }

    #[test]
    fn test_tier_and_ladder_parse_from_names() {
        assert_eq!("HARD".parse::<DifficultyTier>(), Ok(DifficultyTier::Hard));
        assert!("impossible".parse::<DifficultyTier>().is_err());
        assert_eq!(
            "seek-win".parse::<HeuristicLadder>(),
            Ok(HeuristicLadder::SeekWin)
        );
        for tier in DifficultyTier::ALL {
            assert_eq!(tier.to_string().parse::<DifficultyTier>(), Ok(tier));
        }
    }

    #[test]
    fn test_setting_reads_tier_or_custom_from_yaml() {
        let serializer = YamlConfigSerializer::new();

        let tier: DifficultySetting = serializer.deserialize("Hard").unwrap();
        assert_eq!(tier, DifficultySetting::Tier(DifficultyTier::Hard));

        let custom: DifficultySetting = serializer
            .deserialize("mistake_probability: 0.3\nladder: SeekWin\n")
            .unwrap();
        let profile = custom.to_profile().unwrap();
        assert_eq!(profile.mistake_probability(), 0.3);
        assert_eq!(profile.ladder(), HeuristicLadder::SeekWin);

        let defaulted: DifficultySetting =
            serializer.deserialize("mistake_probability: 0.8\n").unwrap();
        assert_eq!(defaulted.to_profile().unwrap().ladder(), HeuristicLadder::Block);
    }

    #[test]
    fn test_custom_setting_validation() {
        let bad = DifficultySetting::Custom {
            mistake_probability: 2.0,
            ladder: HeuristicLadder::Block,
        };
        assert!(bad.validate().is_err());
        assert!(bad.to_profile().is_err());
        assert!(DifficultySetting::default().validate().is_ok());
    }
}
