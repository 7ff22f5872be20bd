pub mod catalog;
pub mod errors;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use catalog::Catalog;
