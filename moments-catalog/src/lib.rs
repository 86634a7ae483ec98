pub mod moment;

pub use moment::{Catalog, Moment};
