//! Long-delivery eligibility for the checkout banner.
//!
//! Products carry a boolean metafield (`custom.long_delivery`). The host hands
//! over the cart lines and the metafield records it fetched; if any line's
//! product is flagged, checkout shows a warning banner.
//!
//! Product identifiers may come as bare numeric ids (`"42"`) or as global ids
//! (`"gid://shopify/Product/42"`). Both sides of every comparison go through
//! [`normalize_id`].

use serde::{Deserialize, Serialize};

/// Metafield namespace holding the flag.
pub const LONG_DELIVERY_NAMESPACE: &str = "custom";
/// Metafield key holding the flag.
pub const LONG_DELIVERY_KEY: &str = "long_delivery";
/// Owner type the metafield is defined on.
pub const LONG_DELIVERY_OWNER_TYPE: &str = "product";

/// Translation key of the banner heading.
pub const BANNER_HEADING_KEY: &str = "someItemshavelongDeliveryTimes";
/// Translation key of the banner body.
pub const BANNER_BODY_KEY: &str = "checkEstimatedDeliveryTime";

/// A cart line, reduced to the product it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id in bare or global form
    pub product_id: String,
}

/// A metafield value attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRecord {
    /// Product id in bare or global form
    pub target_id: String,
    /// Boolean serialized as a string; missing means not flagged
    #[serde(default)]
    pub value: Option<String>,
}

impl FlagRecord {
    /// Only the literal string `"true"` sets the flag.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.as_deref() == Some("true")
    }
}

/// Reduces a global id to its trailing segment. Bare ids pass through.
#[must_use]
pub fn normalize_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Returns true if any line refers to a product whose flag is set.
///
/// Empty inputs are never flagged.
#[must_use]
pub fn is_flagged(lines: &[LineItem], records: &[FlagRecord]) -> bool {
    lines.iter().any(|line| {
        let product = normalize_id(&line.product_id);
        records
            .iter()
            .any(|record| record.is_set() && normalize_id(&record.target_id) == product)
    })
}

/// Banner tone as understood by the checkout host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTone {
    /// Red, attention-grabbing
    Critical,
}

/// Banner descriptor; the host renders it with its own components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryBanner {
    /// Visual tone
    pub tone: BannerTone,
    /// Translation key of the heading
    pub heading_key: &'static str,
    /// Translation key of the body text
    pub body_key: &'static str,
}

/// Produces the long-delivery banner when the cart is flagged.
#[must_use]
pub fn render_banner(lines: &[LineItem], records: &[FlagRecord]) -> Option<DeliveryBanner> {
    is_flagged(lines, records).then_some(DeliveryBanner {
        tone: BannerTone::Critical,
        heading_key: BANNER_HEADING_KEY,
        body_key: BANNER_BODY_KEY,
    })
}
