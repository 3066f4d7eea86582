mod constellation;
mod provider;
mod table;

pub use constellation::{Bounds, ConstellationSpec, SensorKind};
pub use provider::Provider;
pub use table::{Catalog, CatalogFilter};
