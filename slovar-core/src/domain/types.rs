//! Script and variant vocabulary shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Writing system detected for a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Cyrillic,
    Latin,
    /// No letter covered by either alphabet (digits, symbols)
    Neutral,
}

/// Conversion target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Serbian in Cyrillic script
    SrCirilica,
    /// Serbian in Latin script
    SrLatinica,
    /// Croatian: Latin script plus vocabulary substitution
    HrLanguage,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::SrCirilica, Variant::SrLatinica, Variant::HrLanguage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::SrCirilica => "sr_cirilica",
            Variant::SrLatinica => "sr_latinica",
            Variant::HrLanguage => "hr_language",
        }
    }

    /// Script the variant is written in
    pub fn script(&self) -> Script {
        match self {
            Variant::SrCirilica => Script::Cyrillic,
            Variant::SrLatinica | Variant::HrLanguage => Script::Latin,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Variant::SrCirilica => "Serbian, Cyrillic script",
            Variant::SrLatinica => "Serbian, Latin script",
            Variant::HrLanguage => "Croatian, Latin script with vocabulary substitution",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown variant {0:?}, expected one of sr_cirilica, sr_latinica, hr_language")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sr_cirilica" | "cirilica" | "cyrillic" => Ok(Variant::SrCirilica),
            "sr_latinica" | "latinica" | "latin" => Ok(Variant::SrLatinica),
            "hr_language" | "hr" | "croatian" => Ok(Variant::HrLanguage),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip_through_from_str() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_variant_aliases() {
        assert_eq!("HR".parse::<Variant>().unwrap(), Variant::HrLanguage);
        assert_eq!("sr-latinica".parse::<Variant>().unwrap(), Variant::SrLatinica);
        assert!("klingon".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_serde_uses_column_names() {
        let json = serde_json::to_string(&Variant::HrLanguage).unwrap();
        assert_eq!(json, "\"hr_language\"");
    }
}
