pub mod alphanumeric;
pub mod empty;
pub mod lowercase;
