//! Material instance types (beta endpoint).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Images of a material instance. The API keys these in PascalCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialInstanceImages {
    #[serde(rename = "OfferImage", default)]
    pub offer_image: Option<String>,
    #[serde(rename = "Background", default)]
    pub background: Option<String>,
    /// Any further named images
    #[serde(flatten)]
    pub other: HashMap<String, String>,
}

/// Material instance used to render shop tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialInstance {
    pub id: String,
    /// Game mode the material belongs to, e.g. `BattleRoyale`
    pub primary_mode: String,
    #[serde(default)]
    pub product_tag: Option<String>,
    #[serde(default)]
    pub images: MaterialInstanceImages,
    /// Named colors as hex strings
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub scalings: HashMap<String, f64>,
}

impl MaterialInstance {
    /// Get a named color.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_instance_images() {
        let json = r#"{
            "id": "MI_Shop_Tile_Default",
            "primaryMode": "BattleRoyale",
            "productTag": "Product.BR",
            "images": {
                "OfferImage": "https://fortnite-api.com/images/materialinstances/mi_shop_tile_default/offerimage.png",
                "Background": "https://fortnite-api.com/images/materialinstances/mi_shop_tile_default/background.png",
                "Glow": "https://fortnite-api.com/images/materialinstances/mi_shop_tile_default/glow.png"
            },
            "colors": {"Background_Color_A": "ff3a6fff"},
            "scalings": {"ZoomImage_Percent": 0.75}
        }"#;
        let instance: MaterialInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.primary_mode, "BattleRoyale");
        assert!(instance.images.offer_image.as_deref().unwrap().ends_with("offerimage.png"));
        assert!(instance.images.background.is_some());
        assert!(instance.images.other.contains_key("Glow"));
        assert_eq!(instance.color("Background_Color_A"), Some("ff3a6fff"));
        assert_eq!(instance.scalings["ZoomImage_Percent"], 0.75);
    }
}
