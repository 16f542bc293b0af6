//! Variant expansion: one template plus one ingested design file becomes the
//! ordered, priced variant list submitted to the remote catalog.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::templates::Template;

/// Size positions at or beyond this index use `tier2_price` when defined.
pub const TIER2_START: usize = 4;
/// Size positions at or beyond this index use `tier3_price` when defined.
pub const TIER3_START: usize = 5;

/// The remote catalog's reference to an ingested design image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFileHandle {
    pub remote_file_id: i64,
    pub preview_url: String,
}

/// File attachment carried by every variant of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncVariantFile {
    pub id: i64,
    pub preview_url: String,
}

/// One priced, design-attached unit offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncVariant {
    pub variant_id: i64,
    /// Retail price with exactly two decimal places, e.g. `"29.95"`.
    pub retail_price: String,
    pub files: Vec<SyncVariantFile>,
}

/// Price for the size at `position` (0-based) within a color group.
///
/// Both tier checks apply independently and the later one wins: from
/// [`TIER3_START`] on, `tier3_price` is used whenever it is defined, even when
/// `tier2_price` is absent.
#[must_use]
pub fn price_for_position(template: &Template, position: usize) -> Decimal {
    let mut price = template.base_price;
    if position >= TIER2_START {
        if let Some(tier2) = template.tier2_price {
            price = tier2;
        }
    }
    if position >= TIER3_START {
        if let Some(tier3) = template.tier3_price {
            price = tier3;
        }
    }
    price
}

/// Expands `template` into its full variant matrix with `file` attached to
/// every variant.
///
/// Output order is color-group order, then size order, exactly as listed in
/// the template; the remote listing keeps this order.
#[must_use]
pub fn expand(template: &Template, file: &RemoteFileHandle) -> Vec<SyncVariant> {
    let attachment = SyncVariantFile {
        id: file.remote_file_id,
        preview_url: file.preview_url.clone(),
    };

    template
        .color_groups
        .iter()
        .flat_map(|group| group.size_variant_ids.iter().enumerate())
        .map(|(position, &variant_id)| SyncVariant {
            variant_id,
            retail_price: format_price(price_for_position(template, position)),
            files: vec![attachment.clone()],
        })
        .collect()
}

/// Two decimal places; half cents round away from zero.
fn format_price(price: Decimal) -> String {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
