//! Review form state machine.
//!
//! Holds the raw field values exactly as typed so a failed submission leaves them
//! untouched. Validation is recomputed from scratch on every submit attempt.

use crate::api::ProductApi;
use crate::error::Result;
use crate::models::review::{NewReview, MAX_RATING};

pub const REVIEWER_MIN_LEN: usize = 2;
pub const COMMENT_MIN_LEN: usize = 10;

pub const SUBMIT_LABEL: &str = "Submit Review";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "✓ Review submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Product,
    Reviewer,
    Rating,
    Comment,
}

/// At most one message per field, from the latest validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    product: Option<&'static str>,
    reviewer: Option<&'static str>,
    rating: Option<&'static str>,
    comment: Option<&'static str>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Product => &mut self.product,
            Field::Reviewer => &mut self.reviewer,
            Field::Rating => &mut self.rating,
            Field::Comment => &mut self.comment,
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Product => self.product,
            Field::Reviewer => self.reviewer,
            Field::Rating => self.rating,
            Field::Comment => self.comment,
        }
    }

    pub fn set(&mut self, field: Field, message: &'static str) {
        *self.slot(field) = Some(message);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.messages().next().is_none()
    }

    /// Messages in form order.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> {
        [self.product, self.reviewer, self.rating, self.comment]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// A validated review ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    pub product_id: String,
    pub review: NewReview,
}

impl ReviewSubmission {
    pub async fn send(&self, api: &dyn ProductApi) -> Result<()> {
        api.submit_review(&self.product_id, &self.review).await
    }
}

/// Reads the rating input as a number, so `5.0` counts as 5; anything that is not a
/// whole number in 1..=5 is rejected.
fn parse_rating(input: &str) -> Option<u8> {
    let rating = input.trim().parse::<f64>().ok()?;
    let in_range = (1.0..=f64::from(MAX_RATING)).contains(&rating);
    (in_range && rating.fract() == 0.0).then_some(rating as u8)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub product_id: String,
    pub reviewer: String,
    pub rating: String,
    pub comment: String,
    errors: FieldErrors,
    submit_error: Option<String>,
    phase: FormPhase,
    success_token: u64,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            reviewer: String::new(),
            rating: String::new(),
            comment: String::new(),
            errors: FieldErrors::default(),
            submit_error: None,
            phase: FormPhase::Idle,
            success_token: 0,
        }
    }
}

impl ReviewForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.phase == FormPhase::Success
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Stores the new value and drops that field's error without re-validating.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Product => self.product_id = value,
            Field::Reviewer => self.reviewer = value,
            Field::Rating => self.rating = value,
            Field::Comment => self.comment = value,
        }
        self.errors.clear(field);
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.product_id.is_empty() {
            errors.set(Field::Product, "Please select a product");
        }

        let reviewer = self.reviewer.trim();
        if reviewer.is_empty() {
            errors.set(Field::Reviewer, "Reviewer name is required");
        } else if reviewer.chars().count() < REVIEWER_MIN_LEN {
            errors.set(Field::Reviewer, "Reviewer name must be at least 2 characters");
        }

        if parse_rating(&self.rating).is_none() {
            errors.set(Field::Rating, "Rating must be between 1 and 5");
        }

        let comment = self.comment.trim();
        if comment.is_empty() {
            errors.set(Field::Comment, "Comment is required");
        } else if comment.chars().count() < COMMENT_MIN_LEN {
            errors.set(Field::Comment, "Comment must be at least 10 characters");
        }

        errors
    }

    /// Handles a submit intent. Returns the payload to send when every field is valid;
    /// returns `None` (with errors recorded) otherwise, or while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<ReviewSubmission> {
        if self.is_submitting() {
            return None;
        }

        self.phase = FormPhase::Validating;
        self.submit_error = None;
        self.errors = self.validate();
        if !self.errors.is_empty() {
            self.phase = FormPhase::Failed;
            return None;
        }

        let rating = parse_rating(&self.rating)?;
        self.phase = FormPhase::Submitting;
        Some(ReviewSubmission {
            product_id: self.product_id.clone(),
            review: NewReview {
                reviewer: self.reviewer.trim().to_string(),
                rating,
                comment: self.comment.trim().to_string(),
            },
        })
    }

    /// Applies the outcome of a submission. On success returns the token that
    /// `dismiss_success` needs to hide this particular success message.
    pub fn finish(&mut self, result: Result<()>) -> Option<u64> {
        match result {
            Ok(()) => {
                self.product_id.clear();
                self.reviewer.clear();
                self.rating.clear();
                self.comment.clear();
                self.errors = FieldErrors::default();
                self.submit_error = None;
                self.phase = FormPhase::Success;
                self.success_token += 1;
                Some(self.success_token)
            }
            Err(err) => {
                self.submit_error = Some(err.to_string());
                self.phase = FormPhase::Failed;
                None
            }
        }
    }

    /// Hides the success message if it is still the one identified by `token`.
    pub fn dismiss_success(&mut self, token: u64) {
        if self.phase == FormPhase::Success && self.success_token == token {
            self.phase = FormPhase::Idle;
        }
    }
}
