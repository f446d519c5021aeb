//! The two call sites of the aggregation core: the world map and the per-country detail page.

pub mod country;
pub mod world;

pub use country::{CountryInsights, CountryReport};
pub use world::{CountryEntry, WorldMap, country_index};
