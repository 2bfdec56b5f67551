//! Shared restaurant record models.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::geo::UserCoordinate;

pub const MAPS_SEARCH_BASE_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Area {
    #[default]
    #[serde(rename = "関東")]
    Kanto,
    #[serde(rename = "関西")]
    Kansai,
}

impl Area {
    pub const ALL: [Area; 2] = [Area::Kanto, Area::Kansai];

    /// Label shown on the area toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Area::Kanto => "関東（東京）",
            Area::Kansai => "関西（大阪）",
        }
    }

    pub fn center(&self) -> UserCoordinate {
        match self {
            Area::Kanto => UserCoordinate { lat: 35.6812, lng: 139.7671 },
            Area::Kansai => UserCoordinate { lat: 34.7024, lng: 135.4959 },
        }
    }

    /// Path segment used in page addresses and data routes.
    pub fn slug(&self) -> &'static str {
        match self {
            Area::Kanto => "kanto",
            Area::Kansai => "kansai",
        }
    }
}

impl Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownAreaError(pub String);

impl Display for UnknownAreaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown area: {:?}", self.0)
    }
}

impl FromStr for Area {
    type Err = UnknownAreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::ALL
            .into_iter()
            .find(|area| area.slug() == s)
            .ok_or_else(|| UnknownAreaError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub area: Area,
    pub country: String,
    pub region: String,
    pub lat: f64,
    pub lng: f64,
    pub nearest_station: String,
    pub walk_minutes: u32,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RestaurantRecord {
    pub fn coordinate(&self) -> UserCoordinate {
        UserCoordinate { lat: self.lat, lng: self.lng }
    }

    /// Address used for map search, falling back to the nearest station.
    pub fn search_address(&self) -> String {
        match &self.address {
            Some(address) => address.clone(),
            None => format!("{}駅", self.nearest_station),
        }
    }

    pub fn maps_search_url(&self) -> String {
        let query = format!("{} {}", self.name, self.search_address());
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{MAPS_SEARCH_BASE_URL}{encoded}")
    }

    pub fn has_any_tag<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        tags.into_iter().any(|t| self.tags.contains(t))
    }
}

/// CSS class for a feature tag chip.
pub fn tag_css_class(tag: &str) -> &'static str {
    match tag {
        "大使館職員御用達" => "tag-embassy",
        "大阪関西万博出店" | "アフター万博" => "tag-expo",
        "ハラール対応" => "tag-halal",
        "ベジタリアンメニューあり" => "tag-vege",
        "予約必須" => "tag-reserve",
        "家族経営" => "tag-family",
        "ワインセレクションあり" => "tag-wine",
        "クラフトビール専門" => "tag-beer",
        "テラス席あり" => "tag-terrace",
        "テイクアウト可" => "tag-takeout",
        _ => "tag-default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: Option<&str>) -> RestaurantRecord {
        RestaurantRecord {
            name: "Casa Lisboa".to_string(),
            area: Area::Kanto,
            country: "ポルトガル".to_string(),
            region: "ヨーロッパ".to_string(),
            lat: 35.66,
            lng: 139.70,
            nearest_station: "渋谷".to_string(),
            walk_minutes: 5,
            description: String::new(),
            image_url: String::new(),
            address: address.map(|a| a.to_string()),
            tags: vec!["予約必須".to_string()],
        }
    }

    #[test]
    fn maps_url_uses_address_when_present() {
        let url = record(Some("東京都渋谷区1-2-3")).maps_search_url();
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=Casa+Lisboa+%E6%9D%B1%E4%BA%AC%E9%83%BD%E6%B8%8B%E8%B0%B7%E5%8C%BA1-2-3"
        );
    }

    #[test]
    fn maps_url_falls_back_to_station() {
        let r = record(None);
        assert_eq!(r.search_address(), "渋谷駅");
        assert_eq!(
            r.maps_search_url(),
            "https://www.google.com/maps/search/?api=1&query=Casa+Lisboa+%E6%B8%8B%E8%B0%B7%E9%A7%85"
        );
    }

    #[test]
    fn area_slug_round_trips() {
        for area in Area::ALL {
            assert_eq!(area.to_string().parse::<Area>(), Ok(area));
        }
        assert!("hokkaido".parse::<Area>().is_err());
    }

    #[test]
    fn area_deserializes_from_japanese_key() {
        let area: Area = serde_json::from_str("\"関西\"").unwrap();
        assert_eq!(area, Area::Kansai);
    }

    #[test]
    fn unknown_tags_get_default_class() {
        assert_eq!(tag_css_class("ハラール対応"), "tag-halal");
        assert_eq!(tag_css_class("アフター万博"), "tag-expo");
        assert_eq!(tag_css_class("ペット同伴可"), "tag-default");
    }
}
