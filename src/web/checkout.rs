//! Checkout banner endpoint.
//!
//! The checkout host posts the cart lines together with the
//! `custom.long_delivery` metafield records it resolved for them.

use crate::core::eligibility::{DeliveryBanner, FlagRecord, LineItem, render_banner};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Request body of the banner endpoint.
///
/// Entries that do not parse are dropped rather than failing the request, so
/// malformed eligibility data reads as "not flagged".
#[derive(Debug, Clone, Deserialize)]
pub struct BannerRequest {
    /// Cart lines
    #[serde(default, deserialize_with = "lenient_list")]
    pub lines: Vec<LineItem>,
    /// Metafield records for the products in the cart
    #[serde(default, deserialize_with = "lenient_list")]
    pub flags: Vec<FlagRecord>,
}

/// Keeps the array entries that parse as `T`; anything other than an array is
/// treated as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if parsed.len() < total {
        debug!(dropped = total - parsed.len(), "ignored malformed checkout entries");
    }
    Ok(parsed)
}

/// Response body; `banner` is `null` when nothing needs to be shown.
#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    /// Banner to render, if any
    pub banner: Option<DeliveryBanner>,
}

/// `POST /api/checkout/long-delivery-banner`
pub async fn long_delivery_banner(Json(request): Json<BannerRequest>) -> Json<BannerResponse> {
    let banner = render_banner(&request.lines, &request.flags);
    debug!(
        lines = request.lines.len(),
        flags = request.flags.len(),
        shown = banner.is_some(),
        "long delivery banner evaluated"
    );
    Json(BannerResponse { banner })
}
