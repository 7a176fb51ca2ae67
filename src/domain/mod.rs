// Domain types and value objects
mod currency;
pub mod halving;
mod price_point;

pub use currency::Currency;
pub use halving::{BlockHeight, Epoch, HALVING_INTERVAL, HalvingEstimate};
pub use price_point::{PricePoint, PriceSeries, SpotPrice};
