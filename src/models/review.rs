// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Number of icons in a star rating.
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,       // Server-assigned review ID
    pub reviewer: String, // Display name of the reviewer
    pub comment: String,  // Free-text review body
    pub rating: u8,       // 1..=5
}

/// Body of `POST /products/{id}/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub reviewer: String,
    pub rating: u8,
    pub comment: String,
}

/// Fill state of each icon in a star rating: icon `i` (1-based) is filled when `i <= rating`.
pub fn star_fills(rating: u8) -> [bool; MAX_RATING as usize] {
    let mut fills = [false; MAX_RATING as usize];
    for (i, filled) in fills.iter_mut().enumerate() {
        *filled = (i as u8) < rating;
    }
    fills
}
