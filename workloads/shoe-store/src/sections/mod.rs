//! Section renderers for the catalog page.

mod header;
mod shoe_card;
mod shoe_grid;
mod super_header;

pub use header::*;
pub use shoe_card::*;
pub use shoe_grid::*;
pub use super_header::*;
