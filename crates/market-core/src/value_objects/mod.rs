//! Value objects - immutable types that represent domain concepts

mod chain;
mod snowflake;

pub use chain::{Chain, ChainSpec, IdentityKey, ListingFields};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
