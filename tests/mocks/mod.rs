#![allow(dead_code)]

pub mod product_api_mock;
