use std::collections::HashMap;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Meta {
    pub universe: Vec<AssetMeta>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AssetMeta {
    pub name: String,
}

impl Meta {
    /// Perp coin name to asset index, the position in `universe`.
    pub fn coin_to_asset(&self) -> HashMap<String, u32> {
        self.universe
            .iter()
            .enumerate()
            .map(|(asset_ind, asset)| (asset.name.clone(), asset_ind as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_index_is_universe_position() {
        let meta: Meta = serde_json::from_str(
            r#"{"universe":[{"name":"BTC","szDecimals":5,"maxLeverage":40},
                            {"name":"ETH","szDecimals":4},
                            {"name":"SOL","szDecimals":2,"isDelisted":false}]}"#,
        )
        .expect("meta should parse");
        let map = meta.coin_to_asset();
        assert_eq!(map.get("BTC"), Some(&0));
        assert_eq!(map.get("SOL"), Some(&2));
        assert_eq!(map.get("DOGE"), None);
        assert_eq!(map.get("Sol"), None);
    }
}
