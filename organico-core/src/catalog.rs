//! Static catalog and growth series.
//!
//! Both tables are literal data baked into the binary. They are never fetched,
//! filtered or mutated; accessors hand out the same slices every time.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::CatalogError;

/// Identifier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative price stored as whole cents.
///
/// Displays as `$12.99` and serializes as the decimal number `12.99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u32,
}

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    /// Parse a decimal dollar amount, rounding to the nearest cent.
    pub fn from_dollars(dollars: f64) -> Result<Self, CatalogError> {
        if !dollars.is_finite() || dollars < 0.0 || dollars > f64::from(u32::MAX) / 100.0 {
            return Err(CatalogError::InvalidPrice(dollars));
        }
        Ok(Self {
            cents: (dollars * 100.0).round() as u32,
        })
    }

    pub const fn cents(self) -> u32 {
        self.cents
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.cents) / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Star rating in `0.0..=5.0`, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating {
    tenths: u8,
}

impl Rating {
    /// Highest rating a product can carry, in tenths.
    pub const MAX_TENTHS: u8 = 50;

    /// Build a rating from tenths of a star. Panics on values above 5.0, which
    /// turns a bad literal in a `const` table into a compile error.
    pub const fn from_tenths(tenths: u8) -> Self {
        assert!(tenths <= Self::MAX_TENTHS, "rating above 5.0");
        Self { tenths }
    }

    pub fn new(stars: f64) -> Result<Self, CatalogError> {
        if !(0.0..=5.0).contains(&stars) {
            return Err(CatalogError::RatingOutOfRange(stars));
        }
        Ok(Self {
            tenths: (stars * 10.0).round() as u8,
        })
    }

    pub const fn tenths(self) -> u8 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// One product card on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: &'static str,
    pub price: Price,
    pub rating: Rating,
    pub image_ref: &'static str,
}

/// One point of the growth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    /// Month abbreviation used as the category label
    pub label: &'static str,
    pub value: i64,
}

static BEST_SELLERS: [CatalogItem; 3] = [
    CatalogItem {
        id: ItemId(1),
        name: "Organic Raw Almonds",
        price: Price::from_cents(1299),
        rating: Rating::from_tenths(48),
        image_ref: "https://public.readdy.ai/ai/img_res/ab4b225e31daea1ef678d5a045ed37e7.jpg",
    },
    CatalogItem {
        id: ItemId(2),
        name: "Green Tea Blend",
        price: Price::from_cents(1899),
        rating: Rating::from_tenths(49),
        image_ref: "https://public.readdy.ai/ai/img_res/96f80b7503bd0547477bbed5818639ba.jpg",
    },
    CatalogItem {
        id: ItemId(3),
        name: "Dried Goji Berries",
        price: Price::from_cents(1599),
        rating: Rating::from_tenths(47),
        image_ref: "https://public.readdy.ai/ai/img_res/8c22a3359930e28ea02c7add388c4d48.jpg",
    },
];

static GROWTH_SERIES: [SeriesPoint; 6] = [
    SeriesPoint { label: "Jan", value: 820 },
    SeriesPoint { label: "Feb", value: 932 },
    SeriesPoint { label: "Mar", value: 901 },
    SeriesPoint { label: "Apr", value: 934 },
    SeriesPoint { label: "May", value: 1290 },
    SeriesPoint { label: "Jun", value: 1330 },
];

/// The fixed best-seller list, in display order.
pub fn items() -> &'static [CatalogItem] {
    &BEST_SELLERS
}

/// Look up a catalog item by id.
pub fn find(id: ItemId) -> Option<&'static CatalogItem> {
    BEST_SELLERS.iter().find(|item| item.id == id)
}

/// The fixed six-month sales series shown in the growth chart.
pub fn series() -> &'static [SeriesPoint] {
    &GROWTH_SERIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_is_three_items_in_display_order() {
        let names: Vec<_> = items().iter().map(|item| item.name).collect();
        assert_eq!(
            names,
            vec!["Organic Raw Almonds", "Green Tea Blend", "Dried Goji Berries"]
        );
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = items().iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items().len());
    }

    #[test]
    fn find_returns_matching_item() {
        assert_eq!(find(ItemId(2)).map(|item| item.name), Some("Green Tea Blend"));
        assert!(find(ItemId(99)).is_none());
    }

    #[test]
    fn price_and_rating_display() {
        assert_eq!(Price::from_cents(1299).to_string(), "$12.99");
        assert_eq!(Price::from_cents(500).to_string(), "$5.00");
        assert_eq!(Rating::from_tenths(48).to_string(), "4.8");
        assert_eq!(Rating::from_tenths(50).to_string(), "5.0");
    }

    #[test]
    fn runtime_constructors_validate_range() {
        assert_eq!(Price::from_dollars(18.99), Ok(Price::from_cents(1899)));
        assert!(Price::from_dollars(-1.0).is_err());
        assert!(Price::from_dollars(f64::NAN).is_err());
        assert_eq!(Rating::new(4.7), Ok(Rating::from_tenths(47)));
        assert_eq!(Rating::new(5.1), Err(CatalogError::RatingOutOfRange(5.1)));
    }

    #[test]
    fn catalog_serializes_decimal_prices() {
        let json = serde_json::to_value(&items()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 12.99);
        assert_eq!(json["rating"], 4.8);
    }

    #[test]
    fn series_has_six_months() {
        let labels: Vec<_> = series().iter().map(|point| point.label).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(series()[5].value, 1330);
    }
}
