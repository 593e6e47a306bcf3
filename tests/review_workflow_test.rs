// Native tests for the fetch and submit workflows against the in-memory backend.
use product_reviews::api::ProductApi;
use product_reviews::config::ApiConfig;
use product_reviews::context::{ListState, ProductsState};
use product_reviews::error::ApiError;
use product_reviews::form::{Field, FormPhase, ReviewForm, SUBMIT_LABEL};
use product_reviews::models::review::NewReview;

mod mocks;
use mocks::product_api_mock::{review, sample_products, MockProductApi};

async fn load(api: &MockProductApi, state: &mut ProductsState) {
    state.begin_load();
    let result = api.fetch_products().await;
    state.finish_load(result);
}

fn filled_form() -> ReviewForm {
    let mut form = ReviewForm::default();
    form.edit(Field::Product, "1".into());
    form.edit(Field::Reviewer, " John Doe ".into());
    form.edit(Field::Rating, "5".into());
    form.edit(Field::Comment, "This is a great product! I love it.  ".into());
    form
}

#[tokio::test]
async fn initial_load_populates_list() {
    let api = MockProductApi::new().with_products(sample_products());
    let mut state = ProductsState::default();
    assert_eq!(state.list_state(), ListState::Loading);

    load(&api, &mut state).await;

    assert_eq!(api.fetch_calls(), 1);
    match state.list_state() {
        ListState::Populated(products) => {
            assert_eq!(products.len(), 2);
            assert_eq!(products[0].average_rating().as_deref(), Some("4.0"));
            assert_eq!(products[1].average_rating(), None);
        }
        other => panic!("expected populated list, got {:?}", other),
    }
}

#[tokio::test]
async fn network_failure_becomes_error_panel() {
    let api = MockProductApi::new().fail_next_fetch(ApiError::network("Network error"));
    let mut state = ProductsState::default();

    load(&api, &mut state).await;

    assert!(!state.loading);
    assert!(state.products.is_empty());
    assert_eq!(state.list_state(), ListState::Failed("Network error".into()));
}

#[tokio::test]
async fn empty_collection_shows_empty_state() {
    let api = MockProductApi::new();
    let mut state = ProductsState::default();

    load(&api, &mut state).await;

    assert_eq!(state.list_state(), ListState::Empty);
}

#[tokio::test]
async fn successful_submission_posts_once_and_refreshes() {
    let mut updated = sample_products();
    updated[0]
        .reviews
        .push(review("r3", "John Doe", "This is a great product! I love it.", 5));
    let api = MockProductApi::new()
        .with_products(sample_products())
        .then_fetch(sample_products())
        .then_fetch(updated);

    let mut state = ProductsState::default();
    load(&api, &mut state).await;

    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    assert_eq!(form.phase(), FormPhase::Submitting);

    let result = submission.send(&api).await;
    let token = form.finish(result).expect("submission succeeded");
    load(&api, &mut state).await;

    assert_eq!(
        api.submissions(),
        vec![(
            "1".to_string(),
            NewReview {
                reviewer: "John Doe".into(),
                rating: 5,
                comment: "This is a great product! I love it.".into(),
            }
        )]
    );
    assert_eq!(api.fetch_calls(), 2);
    assert_eq!(state.products[0].review_count(), 3);
    assert_eq!(state.products[0].average_rating().as_deref(), Some("4.3"));

    assert!(form.show_success());
    assert_eq!(form.product_id, "");
    assert_eq!(form.reviewer, "");
    assert_eq!(form.rating, "");
    assert_eq!(form.comment, "");

    form.dismiss_success(token);
    assert!(!form.show_success());
}

#[tokio::test]
async fn rejected_submission_keeps_entered_values() {
    let api = MockProductApi::new().fail_next_submit(ApiError::submit_status(
        500,
        "Internal Server Error",
        r#"{"message":"Server error occurred"}"#,
    ));

    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    let result = submission.send(&api).await;
    assert_eq!(form.finish(result), None);

    assert_eq!(form.submit_error(), Some("Server error occurred"));
    assert_eq!(form.submit_label(), SUBMIT_LABEL);
    assert_eq!(form.product_id, "1");
    assert_eq!(form.reviewer, " John Doe ");
    assert_eq!(form.rating, "5");
    assert_eq!(api.fetch_calls(), 0);
}

#[tokio::test]
async fn rejection_without_message_names_status() {
    let api = MockProductApi::new().fail_next_submit(ApiError::submit_status(
        502,
        "Bad Gateway",
        "",
    ));

    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    form.finish(submission.send(&api).await);

    assert_eq!(form.submit_error(), Some("Failed to submit review: Bad Gateway"));
}

#[test]
fn invalid_form_makes_no_request() {
    let api = MockProductApi::new();
    let mut form = filled_form();
    form.edit(Field::Comment, "Too short".into());

    assert_eq!(form.begin_submit(), None);
    assert!(api.submissions().is_empty());
    assert_eq!(
        form.error(Field::Comment),
        Some("Comment must be at least 10 characters")
    );
}

#[test]
fn reviews_go_to_the_product_reviews_endpoint() {
    let config = ApiConfig::default();
    assert_eq!(
        config.reviews_url("1"),
        "http://localhost:3000/products/1/reviews"
    );
}
