// src/data.rs
//
// The record shapes written to the output document. Field order here is
// serialization order.

use serde::Serialize;

/// Power tier, icon-encoded on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
    Unknown,
}

impl Rank {
    /// Exact-match lookup on the rank icon's alt text.
    /// Anything unmapped (including empty) is Unknown, never an error.
    pub fn from_icon_alt(alt: &str) -> Self {
        match alt {
            "Rank E icon" => Self::E,
            "Rank D icon" => Self::D,
            "Rank C icon" => Self::C,
            "Rank B icon" => Self::B,
            "Rank A icon" => Self::A,
            "Rank S icon" => Self::S,
            _ => Self::Unknown,
        }
    }
}

/// Tribe affiliation, icon-encoded on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tribe {
    Brave,
    Mysterious,
    Tough,
    Charming,
    Heartful,
    Shady,
    Eerie,
    Slippery,
    Boss,
    Unknown,
}

impl Tribe {
    pub fn from_icon_alt(alt: &str) -> Self {
        match alt {
            "Brave Tribe" => Self::Brave,
            "Mysterious Tribe" => Self::Mysterious,
            "Tough Tribe" => Self::Tough,
            "Charming Tribe" => Self::Charming,
            "Heartful Tribe" => Self::Heartful,
            "Shady Tribe" => Self::Shady,
            "Eerie Tribe" => Self::Eerie,
            "Slippery Tribe" => Self::Slippery,
            "Boss medal" => Self::Boss,
            _ => Self::Unknown,
        }
    }
}

/// Category, decided purely by which table the row came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YokaiType {
    Regular,
    Legendary,
    Boss,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalizedName {
    pub display: String,
    pub aliases: Vec<String>,
}

impl LocalizedName {
    pub fn new(display: String) -> Self {
        Self { display, aliases: Vec::new() }
    }

    /// Placeholder for languages the scrape does not populate.
    pub fn unknown() -> Self {
        Self::new(s!("unknown"))
    }
}

/// Per-language names. Only `en` comes from the scrape; `fr` and `jp`
/// keep the placeholder so the keys always exist in the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Names {
    pub en: LocalizedName,
    pub fr: LocalizedName,
    pub jp: LocalizedName,
}

impl Names {
    pub fn english(display: String) -> Self {
        Self {
            en: LocalizedName::new(display),
            fr: LocalizedName::unknown(),
            jp: LocalizedName::unknown(),
        }
    }
}

/// One catalogued character. Built once per row, immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Yokai {
    pub id: u32,
    pub image: String,
    pub tribe_id: Tribe,
    pub rank_id: Rank,
    pub yokai_type: YokaiType,
    pub first_game_id: String,
    pub game_ids: Vec<String>,
    pub names: Names,
}

/// The whole run's output: records in encounter order, no dedup.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Medallium {
    pub yokai: Vec<Yokai>,
}
