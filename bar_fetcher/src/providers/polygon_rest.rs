//! Polygon.io aggregates (`/v2/aggs`) REST provider.

pub mod params;
pub mod provider;
pub mod response;

pub use provider::PolygonProvider;
