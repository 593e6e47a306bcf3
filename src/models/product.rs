use serde::{Deserialize, Serialize};
use crate::models::review::Review;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,           // Unique ID for the product
    pub name: String,         // Product name
    #[serde(default)]
    pub reviews: Vec<Review>, // Reviews in server order
}

impl Product {
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Mean rating rendered with one decimal place, or `None` when there are no reviews.
    ///
    /// Rounds the binary value of the mean to the nearest tenth, the way a browser's
    /// `toFixed(1)` does: 41/20 is just below 2.05 and shows "2.0". The only exact ties
    /// are means on a quarter (17/4 = 4.25), which round up.
    pub fn average_rating(&self) -> Option<String> {
        let count = self.reviews.len() as u64;
        if count == 0 {
            return None;
        }
        let sum: u64 = self.reviews.iter().map(|r| u64::from(r.rating)).sum();

        let quarters = sum * 4;
        if quarters % count == 0 && (quarters / count) % 2 == 1 {
            let tenths = (sum * 20 + count) / (count * 2);
            return Some(format!("{}.{}", tenths / 10, tenths % 10));
        }
        Some(format!("{:.1}", sum as f64 / count as f64))
    }
}
