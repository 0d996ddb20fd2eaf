pub mod binary;
pub mod jump;
pub mod linear;

pub use binary::{binary_search, encode_search_result};
pub use jump::jump_search;
pub use linear::linear_search;
