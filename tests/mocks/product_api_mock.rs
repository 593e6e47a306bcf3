use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use product_reviews::api::ProductApi;
use product_reviews::error::ApiError;
use product_reviews::models::product::Product;
use product_reviews::models::review::{NewReview, Review};

/// This module provides an in-memory stand-in for the review backend.
/// Queued responses are served first; afterwards every fetch returns `products`
/// and every submission succeeds.
#[derive(Default)]
pub struct MockProductApi {
    products: RefCell<Vec<Product>>,
    fetch_responses: RefCell<VecDeque<Result<Vec<Product>, ApiError>>>,
    submit_responses: RefCell<VecDeque<Result<(), ApiError>>>,
    submit_delay_ms: Cell<u32>,
    fetch_calls: Cell<usize>,
    submissions: RefCell<Vec<(String, NewReview)>>,
}

impl MockProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        *self.products.borrow_mut() = products;
        self
    }

    pub fn fail_next_fetch(self, err: ApiError) -> Self {
        self.fetch_responses.borrow_mut().push_back(Err(err));
        self
    }

    pub fn then_fetch(self, products: Vec<Product>) -> Self {
        self.fetch_responses.borrow_mut().push_back(Ok(products));
        self
    }

    pub fn fail_next_submit(self, err: ApiError) -> Self {
        self.submit_responses.borrow_mut().push_back(Err(err));
        self
    }

    /// Delays each submission; browser tests only (uses the JS timer).
    pub fn with_submit_delay(self, millis: u32) -> Self {
        self.submit_delay_ms.set(millis);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }

    pub fn submissions(&self) -> Vec<(String, NewReview)> {
        self.submissions.borrow().clone()
    }
}

impl ProductApi for MockProductApi {
    fn fetch_products(&self) -> LocalBoxFuture<'_, Result<Vec<Product>, ApiError>> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        let response = self
            .fetch_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(self.products.borrow().clone()));
        async move { response }.boxed_local()
    }

    fn submit_review<'a>(
        &'a self,
        product_id: &'a str,
        review: &'a NewReview,
    ) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        self.submissions
            .borrow_mut()
            .push((product_id.to_string(), review.clone()));
        let response = self
            .submit_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()));
        let delay = self.submit_delay_ms.get();
        async move {
            if delay > 0 {
                gloo_timers::future::TimeoutFuture::new(delay).await;
            }
            response
        }
        .boxed_local()
    }
}

pub fn review(id: &str, reviewer: &str, comment: &str, rating: u8) -> Review {
    Review {
        id: id.into(),
        reviewer: reviewer.into(),
        comment: comment.into(),
        rating,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Test Product 1".into(),
            reviews: vec![
                review("r1", "John Doe", "Great product!", 5),
                review("r2", "Jane Smith", "Not bad, but could be better.", 3),
            ],
        },
        Product {
            id: "2".into(),
            name: "Test Product 2".into(),
            reviews: vec![],
        },
    ]
}
