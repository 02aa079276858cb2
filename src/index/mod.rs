pub mod matches;
pub mod node;
pub mod search_index;
