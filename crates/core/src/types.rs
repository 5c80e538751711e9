/// Database identifier type used across all crates.
pub type DbId = i64;
