use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Closed position vocabulary understood by the layout engine.
///
/// Tags are line-relative: the left/right prefix only matters for ordering
/// players inside their line, never for choosing the line itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionTag {
    GK,
    LB,
    LWB,
    LCB,
    CB,
    RCB,
    RB,
    RWB,
    LDM,
    CDM,
    RDM,
    LM,
    LCM,
    CM,
    RCM,
    RM,
    LAM,
    CAM,
    RAM,
    LW,
    LF,
    CF,
    ST,
    RF,
    RW,
    // Generic positions
    DF,
    MF,
    FW,
}

impl PositionTag {
    pub const ALL: [PositionTag; 28] = [
        PositionTag::GK,
        PositionTag::LB,
        PositionTag::LWB,
        PositionTag::LCB,
        PositionTag::CB,
        PositionTag::RCB,
        PositionTag::RB,
        PositionTag::RWB,
        PositionTag::LDM,
        PositionTag::CDM,
        PositionTag::RDM,
        PositionTag::LM,
        PositionTag::LCM,
        PositionTag::CM,
        PositionTag::RCM,
        PositionTag::RM,
        PositionTag::LAM,
        PositionTag::CAM,
        PositionTag::RAM,
        PositionTag::LW,
        PositionTag::LF,
        PositionTag::CF,
        PositionTag::ST,
        PositionTag::RF,
        PositionTag::RW,
        PositionTag::DF,
        PositionTag::MF,
        PositionTag::FW,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::GK => "GK",
            Self::LB => "LB",
            Self::LWB => "LWB",
            Self::LCB => "LCB",
            Self::CB => "CB",
            Self::RCB => "RCB",
            Self::RB => "RB",
            Self::RWB => "RWB",
            Self::LDM => "LDM",
            Self::CDM => "CDM",
            Self::RDM => "RDM",
            Self::LM => "LM",
            Self::LCM => "LCM",
            Self::CM => "CM",
            Self::RCM => "RCM",
            Self::RM => "RM",
            Self::LAM => "LAM",
            Self::CAM => "CAM",
            Self::RAM => "RAM",
            Self::LW => "LW",
            Self::LF => "LF",
            Self::CF => "CF",
            Self::ST => "ST",
            Self::RF => "RF",
            Self::RW => "RW",
            Self::DF => "DF",
            Self::MF => "MF",
            Self::FW => "FW",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Self::GK)
    }
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Long-form spellings seen in fixture data, keyed by normalized text.
static POSITION_ALIASES: Lazy<HashMap<&'static str, PositionTag>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for tag in PositionTag::ALL {
        map.insert(short_key(tag), tag);
    }

    let aliases: &[(&'static str, PositionTag)] = &[
        ("goalkeeper", PositionTag::GK),
        ("keeper", PositionTag::GK),
        ("left-back", PositionTag::LB),
        ("right-back", PositionTag::RB),
        ("center-back", PositionTag::CB),
        ("centre-back", PositionTag::CB),
        ("left-wing-back", PositionTag::LWB),
        ("right-wing-back", PositionTag::RWB),
        ("defensive-mid", PositionTag::CDM),
        ("defensive-midfielder", PositionTag::CDM),
        ("central-mid", PositionTag::CM),
        ("central-midfielder", PositionTag::CM),
        ("attacking-mid", PositionTag::CAM),
        ("attacking-midfielder", PositionTag::CAM),
        ("left-mid", PositionTag::LM),
        ("right-mid", PositionTag::RM),
        ("left-wing", PositionTag::LW),
        ("left-winger", PositionTag::LW),
        ("right-wing", PositionTag::RW),
        ("right-winger", PositionTag::RW),
        ("striker", PositionTag::ST),
        ("center-forward", PositionTag::CF),
        ("centre-forward", PositionTag::CF),
        ("defender", PositionTag::DF),
        ("midfielder", PositionTag::MF),
        ("forward", PositionTag::FW),
        ("def", PositionTag::DF),
        ("mid", PositionTag::MF),
        ("fwd", PositionTag::FW),
    ];
    map.extend(aliases.iter().copied());
    map
});

fn short_key(tag: PositionTag) -> &'static str {
    match tag {
        PositionTag::GK => "gk",
        PositionTag::LB => "lb",
        PositionTag::LWB => "lwb",
        PositionTag::LCB => "lcb",
        PositionTag::CB => "cb",
        PositionTag::RCB => "rcb",
        PositionTag::RB => "rb",
        PositionTag::RWB => "rwb",
        PositionTag::LDM => "ldm",
        PositionTag::CDM => "cdm",
        PositionTag::RDM => "rdm",
        PositionTag::LM => "lm",
        PositionTag::LCM => "lcm",
        PositionTag::CM => "cm",
        PositionTag::RCM => "rcm",
        PositionTag::RM => "rm",
        PositionTag::LAM => "lam",
        PositionTag::CAM => "cam",
        PositionTag::RAM => "ram",
        PositionTag::LW => "lw",
        PositionTag::LF => "lf",
        PositionTag::CF => "cf",
        PositionTag::ST => "st",
        PositionTag::RF => "rf",
        PositionTag::RW => "rw",
        PositionTag::DF => "df",
        PositionTag::MF => "mf",
        PositionTag::FW => "fw",
    }
}

impl FromStr for PositionTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        POSITION_ALIASES
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| format!("Invalid position: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes_round_trip_through_from_str() {
        for tag in PositionTag::ALL {
            assert_eq!(tag.short_name().parse::<PositionTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_parsing_is_case_and_separator_insensitive() {
        assert_eq!("gk".parse::<PositionTag>(), Ok(PositionTag::GK));
        assert_eq!("Left Back".parse::<PositionTag>(), Ok(PositionTag::LB));
        assert_eq!("centre_back".parse::<PositionTag>(), Ok(PositionTag::CB));
        assert_eq!(" Striker ".parse::<PositionTag>(), Ok(PositionTag::ST));
        assert_eq!("right-winger".parse::<PositionTag>(), Ok(PositionTag::RW));
    }

    #[test]
    fn test_unknown_tags_are_rejected() {
        assert!("sweeper-keeper".parse::<PositionTag>().is_err());
        assert!("".parse::<PositionTag>().is_err());
    }
}
