//! History Builder: ordered quotes to labeled feature rows.

mod builder;

pub use builder::build_records;
