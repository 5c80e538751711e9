pub mod dogs;
pub mod greeting;
