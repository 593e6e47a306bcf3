pub mod product_card;
pub mod products_list;
pub mod review_form;
pub mod reviews_list;
pub mod star_rating;
pub mod status;
