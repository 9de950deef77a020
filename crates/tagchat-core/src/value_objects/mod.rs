//! Value objects - immutable types that represent domain concepts

mod snowflake;
mod user_tag;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use user_tag::UserTag;
