//! Plain data: the product record and the DTOs that create and change it.

pub mod product;

pub use product::*;
