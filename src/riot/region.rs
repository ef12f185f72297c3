use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform routing values of the Riot API.
///
/// Only used to resolve the regional route a platform belongs to; every
/// endpoint this crate calls uses regional routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    LA1,
    LA2,
    NA1,
    JP1,
    KR,
    EUN1,
    EUW1,
    ME1,
    RU,
    TR1,
    OC1,
    PH2,
    SG2,
    TH2,
    TW2,
    VN2,
}

impl Platform {
    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 => Region::Americas,
            Self::JP1 | Self::KR => Region::Asia,
            Self::EUN1 | Self::EUW1 | Self::ME1 | Self::RU | Self::TR1 => Region::Europe,
            Self::OC1 | Self::PH2 | Self::SG2 | Self::TH2 | Self::TW2 | Self::VN2 => Region::Sea,
        }
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "NA" | "NA1" => Ok(Self::NA1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "ME" | "ME1" => Ok(Self::ME1),
            "RU" => Ok(Self::RU),
            "TR" | "TR1" => Ok(Self::TR1),
            "OCE" | "OC" | "OC1" => Ok(Self::OC1),
            "PH" | "PH2" => Ok(Self::PH2),
            "SG" | "SG2" => Ok(Self::SG2),
            "TH" | "TH2" => Ok(Self::TH2),
            "TW" | "TW2" => Ok(Self::TW2),
            "VN" | "VN2" => Ok(Self::VN2),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

/// Regional routing values for Riot API (Account-v1, Match-v5)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Region {
    Americas,
    Asia,
    #[default]
    Europe,
    Sea,
    /// Any other subdomain of `api.riotgames.com`, used verbatim.
    Custom(String),
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
            Self::Custom(subdomain) => subdomain,
        }
    }
}

/// Accepts a routing name (`europe`) or any platform code (`EUW1`, `na`).
/// Anything else is kept as a raw subdomain; the Riot API decides whether it
/// exists.
impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_lowercase().as_str() {
            "" => Err(AppError::InvalidRegion(s.to_string())),
            "americas" => Ok(Self::Americas),
            "asia" => Ok(Self::Asia),
            "europe" => Ok(Self::Europe),
            "sea" => Ok(Self::Sea),
            other => Ok(other
                .parse::<Platform>()
                .map(Platform::to_region)
                .unwrap_or_else(|_| Self::Custom(value.to_string()))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_routing_names() {
        assert_eq!("europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!("AMERICAS".parse::<Region>().unwrap(), Region::Americas);
        assert_eq!(" sea ".parse::<Region>().unwrap(), Region::Sea);
    }

    #[test]
    fn parses_platform_codes_into_their_region() {
        assert_eq!("EUW1".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!("na".parse::<Region>().unwrap(), Region::Americas);
        assert_eq!("kr".parse::<Region>().unwrap(), Region::Asia);
        assert_eq!("OCE".parse::<Region>().unwrap(), Region::Sea);
    }

    #[test]
    fn unknown_region_is_kept_as_subdomain() {
        let region = "esports".parse::<Region>().unwrap();

        assert_eq!(region, Region::Custom("esports".to_string()));
        assert_eq!(region.base_url(), "https://esports.api.riotgames.com");
    }

    #[test]
    fn blank_region_is_an_error() {
        let err = "  ".parse::<Region>().unwrap_err();

        assert!(matches!(err, AppError::InvalidRegion(_)));
    }

    #[test]
    fn base_url_uses_routing_subdomain() {
        assert_eq!(Region::Asia.base_url(), "https://asia.api.riotgames.com");
        assert_eq!(Platform::EUW1.to_region().to_string(), "europe");
    }
}
