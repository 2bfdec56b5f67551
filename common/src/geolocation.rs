//! Browser geolocation request lifecycle.

use serde::{Deserialize, Serialize};

use crate::geo::UserCoordinate;

/// Browser-enforced bound on a single position request.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GeolocationState {
    #[default]
    Idle,
    Requesting,
    Resolved(UserCoordinate),
    Failed(String),
    Unsupported,
}

impl GeolocationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GeolocationState::Idle | GeolocationState::Requesting)
    }

    pub fn status_text(&self) -> String {
        match self {
            GeolocationState::Idle => "ボタンを押すと現在地を取得します".to_string(),
            GeolocationState::Requesting => "📡 位置情報を取得中...".to_string(),
            GeolocationState::Resolved(c) => format!("✅ 取得完了: {:.4}, {:.4}", c.lat, c.lng),
            GeolocationState::Failed(reason) => format!("❌ エラー: {reason}"),
            GeolocationState::Unsupported => "⚠️ このブラウザは位置情報に対応していません".to_string(),
        }
    }
}

/// Tracks the latest position request. Every press gets a new id and only the reply carrying
/// the newest id is applied, so a re-issued request overrides one still in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeolocationSession {
    pub state: GeolocationState,
    latest_request: u64,
}

impl GeolocationSession {
    /// Button press. Always allowed, so a finished or pending request can be re-issued.
    pub fn request(&mut self) -> u64 {
        self.latest_request += 1;
        self.state = GeolocationState::Requesting;
        self.latest_request
    }

    /// Applies the bridge reply for `request_id`. Returns false when a newer request superseded it.
    pub fn complete(&mut self, request_id: u64, reply: GeolocationReply) -> bool {
        if request_id != self.latest_request || self.state != GeolocationState::Requesting {
            return false;
        }
        self.state = reply.into_state();
        true
    }

    pub fn resolved_coordinate(&self) -> Option<UserCoordinate> {
        match self.state {
            GeolocationState::Resolved(coordinate) => Some(coordinate),
            _ => None,
        }
    }
}

/// Message posted back by the in-page geolocation script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeolocationReply {
    Resolved { lat: f64, lng: f64 },
    Failed { reason: String },
    Unsupported,
}

impl GeolocationReply {
    pub fn into_state(self) -> GeolocationState {
        match self {
            GeolocationReply::Resolved { lat, lng } => match UserCoordinate::new(lat, lng) {
                Some(coordinate) => GeolocationState::Resolved(coordinate),
                None => GeolocationState::Failed(format!("invalid coordinate {lat}, {lng}")),
            },
            GeolocationReply::Failed { reason } => GeolocationState::Failed(reason),
            GeolocationReply::Unsupported => GeolocationState::Unsupported,
        }
    }
}
