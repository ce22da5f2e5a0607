//! Price-range filtering.

use pf_core::AppConfig;

use crate::ParkingSpot;

/// An inclusive `[min, max]` price window, as set on the price slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= price <= max`.
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// See [`filter_by_price`].
    pub fn filter(&self, spots: &[ParkingSpot]) -> Vec<ParkingSpot> {
        filter_by_price(spots, self.min, self.max)
    }
}

impl From<&AppConfig> for PriceRange {
    /// The full slider range from the configuration.
    fn from(cfg: &AppConfig) -> Self {
        Self::new(cfg.min_price, cfg.max_price)
    }
}

/// Spots whose price lies in `[min_price, max_price]`, in input order.
pub fn filter_by_price(spots: &[ParkingSpot], min_price: f64, max_price: f64) -> Vec<ParkingSpot> {
    let range = PriceRange::new(min_price, max_price);
    spots
        .iter()
        .filter(|s| range.contains(s.price))
        .cloned()
        .collect()
}
