pub mod types;


#[cfg(feature = "serde")]
pub mod serialize;
