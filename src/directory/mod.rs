pub mod lazy_index;
pub mod service;
pub mod source;
