pub mod product;
pub mod review;
