//! Supermarket sales dashboard: filter state, query building, response shaping
//! and the five-endpoint fetch cycle shared by every client of the sales API.

pub mod config;
pub mod cycle;
pub mod dto;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod palette;
pub mod query;
pub mod state;

pub use config::*;
pub use cycle::*;
pub use dto::*;
pub use error::*;
pub use filter::*;
pub use normalize::*;
pub use query::*;
pub use state::*;

#[cfg(test)]
mod testing;
