//! Drakeforge Script - RON content loader and schema definitions
//!
//! Loads game content from RON files:
//! - Taxonomy tables (levels, rarities, elements, stat ranges)
//! - Forge tuning (seed, merge factors)
//! - Any other serde config through [`from_ron_file`]

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::{
    from_ron_file, from_ron_str, taxonomy_to_ron, Content, Loader, STANDARD_FORGE,
    STANDARD_TAXONOMY,
};
pub use schema::{ElementDef, RarityDef, StatRangeDef, TaxonomyDef};
