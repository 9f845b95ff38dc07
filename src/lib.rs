//! In-memory core of a land-property marketplace session.
//!
//! [`store::PropertyStore`] owns the ordered listing collection and is
//! the single source of truth; [`filter::filter_properties`] derives the
//! view a listing page renders; [`map::MapLayout`] assigns schematic map
//! positions. All state lives for one session only; there is no
//! persistence and no backend.

pub mod filter;
pub mod map;
pub mod models;
pub mod store;
