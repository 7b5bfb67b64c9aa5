//! Review domain model, form draft, and validation.
//!
//! This module defines the `Review` record as served by the backend, the
//! [`ReviewDraft`] accumulated by the add-review form, and the validated
//! [`NewReview`] payload sent to the creation endpoint. Reviews are immutable
//! once created; the client only ever reads them back.

use serde::{Deserialize, Serialize};

use crate::domain::error::{MarqueeError, Result};

/// Display name used when a review was submitted without an author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Maximum length of the author name, matching the form's input cap.
pub const MAX_AUTHOR_LEN: usize = 50;

/// Maximum length of the review comment, in characters.
pub const MAX_COMMENT_LEN: usize = 500;

/// A review record as served by the backend.
///
/// `created_at` is the backend's timestamp string, passed through untouched;
/// the UI layer parses it best-effort for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier assigned by the backend.
    pub id: i64,

    /// Identifier of the movie this review belongs to.
    pub movie_id: i64,

    /// Author display name; may be blank for older records.
    #[serde(default)]
    pub author_name: String,

    /// Star rating, 1 through 5.
    pub rating: u8,

    /// Review text, 1 through 500 characters.
    pub comment: String,

    /// Backend creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl Review {
    /// Returns the author name, falling back to [`ANONYMOUS_AUTHOR`] when blank.
    #[must_use]
    pub fn display_author(&self) -> &str {
        if self.author_name.trim().is_empty() {
            ANONYMOUS_AUTHOR
        } else {
            &self.author_name
        }
    }
}

/// Validated payload for the review creation endpoint.
///
/// Constructed only through [`ReviewDraft::validate`], so a value of this type
/// always satisfies the backend contract: rating in 1–5, comment 1–500
/// characters, author name non-empty (defaulted to "Anonymous").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// Author display name.
    pub author_name: String,

    /// Star rating, 1 through 5.
    pub rating: u8,

    /// Trimmed review text.
    pub comment: String,
}

/// In-progress form state for the add-review screen.
///
/// Fields accumulate raw user input; nothing is validated until
/// [`validate`](Self::validate) runs on submit. A rating of `0` means the user
/// has not picked one yet.
///
/// # Examples
///
/// ```
/// use marquee::domain::ReviewDraft;
///
/// let mut draft = ReviewDraft::default();
/// draft.rating = 4;
/// draft.comment = "  Tight, relentless pacing.  ".to_string();
///
/// let review = draft.validate().unwrap();
/// assert_eq!(review.author_name, "Anonymous");
/// assert_eq!(review.comment, "Tight, relentless pacing.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Raw author input; blank means anonymous.
    pub author: String,

    /// Selected rating; 0 until the user picks one.
    pub rating: u8,

    /// Raw comment input.
    pub comment: String,
}

impl ReviewDraft {
    /// Validates the draft and produces a submission payload.
    ///
    /// Rules, checked in order:
    /// - rating must be 1–5 (0 means "not selected");
    /// - trimmed comment must be non-empty and at most 500 characters;
    /// - trimmed author must be at most 50 characters; blank becomes "Anonymous".
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Validation`] with the user-facing message for the
    /// first rule that fails.
    pub fn validate(&self) -> Result<NewReview> {
        if !(1..=5).contains(&self.rating) {
            return Err(MarqueeError::Validation(
                "Please select a rating".to_string(),
            ));
        }

        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(MarqueeError::Validation(
                "Please write a comment".to_string(),
            ));
        }
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(MarqueeError::Validation(format!(
                "Comment must be at most {MAX_COMMENT_LEN} characters"
            )));
        }

        let author = self.author.trim();
        if author.chars().count() > MAX_AUTHOR_LEN {
            return Err(MarqueeError::Validation(format!(
                "Name must be at most {MAX_AUTHOR_LEN} characters"
            )));
        }

        Ok(NewReview {
            author_name: if author.is_empty() {
                ANONYMOUS_AUTHOR.to_string()
            } else {
                author.to_string()
            },
            rating: self.rating,
            comment: comment.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(author: &str, rating: u8, comment: &str) -> ReviewDraft {
        ReviewDraft {
            author: author.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn unset_rating_is_rejected_first() {
        let err = draft("", 0, "").validate().unwrap_err();
        assert!(err.to_string().contains("Please select a rating"));
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        assert!(draft("", 6, "fine").validate().is_err());
    }

    #[test]
    fn blank_comment_is_rejected() {
        let err = draft("Ana", 3, "   ").validate().unwrap_err();
        assert!(err.to_string().contains("Please write a comment"));
    }

    #[test]
    fn overlong_comment_is_rejected() {
        let long = "x".repeat(MAX_COMMENT_LEN + 1);
        assert!(draft("Ana", 3, &long).validate().is_err());
    }

    #[test]
    fn comment_at_limit_passes() {
        let exact = "x".repeat(MAX_COMMENT_LEN);
        assert!(draft("Ana", 3, &exact).validate().is_ok());
    }

    #[test]
    fn blank_author_defaults_to_anonymous() {
        let review = draft("   ", 5, "Great").validate().unwrap();
        assert_eq!(review.author_name, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn author_is_trimmed() {
        let review = draft("  Ana  ", 5, "Great").validate().unwrap();
        assert_eq!(review.author_name, "Ana");
    }

    #[test]
    fn overlong_author_is_rejected() {
        let long = "a".repeat(MAX_AUTHOR_LEN + 1);
        assert!(draft(&long, 5, "Great").validate().is_err());
    }

    #[test]
    fn blank_author_on_stored_review_displays_anonymous() {
        let review = Review {
            id: 1,
            movie_id: 2,
            author_name: "  ".to_string(),
            rating: 4,
            comment: "Solid".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        assert_eq!(review.display_author(), ANONYMOUS_AUTHOR);
    }
}
