use serde::Deserialize;

use crate::types::{AssetPosition, MarginSummary};

/// Known shape of a `clearinghouseState` response.
///
/// Only used for the optional summary; account classification works on raw JSON.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserStateResponse {
    pub asset_positions: Vec<AssetPosition>,
    pub cross_margin_summary: MarginSummary,
    pub margin_summary: MarginSummary,
    pub withdrawable: String,
}
