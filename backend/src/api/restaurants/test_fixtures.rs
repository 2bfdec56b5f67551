use common::restaurant::{Area, RestaurantRecord};

pub fn record(name: &str, area: Area, region: &str, country: &str, tags: &[&str]) -> RestaurantRecord {
    let center = area.center();
    RestaurantRecord {
        name: name.to_string(),
        area,
        country: country.to_string(),
        region: region.to_string(),
        lat: center.lat,
        lng: center.lng,
        nearest_station: "新宿".to_string(),
        walk_minutes: 3,
        description: format!("{name} description"),
        image_url: format!("https://example.com/{name}.jpg"),
        address: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn with_position(mut record: RestaurantRecord, lat: f64, lng: f64) -> RestaurantRecord {
    record.lat = lat;
    record.lng = lng;
    record
}

/// Five Kanto records followed by two Kansai records.
pub fn sample_records() -> Vec<RestaurantRecord> {
    vec![
        record("Pho Saigon", Area::Kanto, "東南アジア", "ベトナム", &["テイクアウト可"]),
        record("Istanbul Kebab", Area::Kanto, "中東", "トルコ", &["ハラール対応", "テイクアウト可"]),
        record("Le Petit Bistro", Area::Kanto, "ヨーロッパ", "フランス", &["ワインセレクションあり", "予約必須"]),
        record("Bangkok Garden", Area::Kanto, "東南アジア", "タイ", &[]),
        record("Casa Lisboa", Area::Kanto, "ヨーロッパ", "ポルトガル", &["家族経営"]),
        record("Trattoria Sole", Area::Kansai, "ヨーロッパ", "イタリア", &["テラス席あり"]),
        record("Seoul Table", Area::Kansai, "東アジア", "韓国", &["大阪関西万博出店"]),
    ]
}
