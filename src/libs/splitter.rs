//! Retroactive tagging of closed periods, including percentage splits
//! between two concurrent activities.
//!
//! Tagging never touches a period's bounds or kind; it only replaces the
//! assignment. Validation happens before any mutation, so a rejected request
//! leaves the period exactly as it was.

use crate::libs::period::{Assignment, Period, Share};
use thiserror::Error;

/// Why a tag request was rejected. No partial mutation is committed in any
/// of these cases; the caller re-prompts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("primary tag name must not be empty")]
    EmptyPrimary,
    #[error("secondary tag name must not be empty")]
    EmptySecondary,
    #[error("split percentage must be between 1 and 99, got {0}")]
    PercentageOutOfRange(u8),
    #[error("a split percentage was given without a secondary tag")]
    PercentageWithoutSecondary,
    #[error("a secondary tag was given without a split percentage")]
    SecondaryWithoutPercentage,
}

/// A completed tagging form for one period.
///
/// The secondary fields are all-or-nothing: a name requires a percentage and
/// vice versa. Percentages 0 and 100 degenerate to the single-activity form
/// and are rejected rather than normalized.
#[derive(Debug, Clone, Default)]
pub struct TagRequest {
    pub primary_tag: String,
    pub primary_comment: String,
    pub secondary_tag: Option<String>,
    pub secondary_comment: String,
    pub secondary_percentage: Option<u8>,
}

impl TagRequest {
    /// A single-activity request.
    pub fn single(tag: impl Into<String>, comment: impl Into<String>) -> Self {
        TagRequest {
            primary_tag: tag.into(),
            primary_comment: comment.into(),
            ..Default::default()
        }
    }

    /// A dual-activity request splitting `percentage` percent off to the
    /// secondary tag.
    pub fn split(tag: impl Into<String>, secondary_tag: impl Into<String>, percentage: u8) -> Self {
        TagRequest {
            primary_tag: tag.into(),
            secondary_tag: Some(secondary_tag.into()),
            secondary_percentage: Some(percentage),
            ..Default::default()
        }
    }
}

/// Applies a tag request to a closed period.
///
/// The single form replaces whatever assignment was there, so switching from
/// a split back to a single tag leaves no stale secondary data. The split
/// form computes the secondary sub-duration as
/// `floor(duration * percentage / 100)` and gives the remainder to the
/// primary, which guarantees the two always sum exactly to the period's
/// duration regardless of rounding.
pub fn apply_tag(period: &mut Period, request: TagRequest) -> Result<(), TagError> {
    if request.primary_tag.is_empty() {
        return Err(TagError::EmptyPrimary);
    }

    match (&request.secondary_tag, request.secondary_percentage) {
        (None, None) => {
            period.assignment = Assignment::Single {
                name: request.primary_tag,
                comment: request.primary_comment,
            };
            Ok(())
        }
        (None, Some(_)) => Err(TagError::PercentageWithoutSecondary),
        (Some(_), None) => Err(TagError::SecondaryWithoutPercentage),
        (Some(secondary_tag), Some(percentage)) => {
            if secondary_tag.is_empty() {
                return Err(TagError::EmptySecondary);
            }
            if !(1..=99).contains(&percentage) {
                return Err(TagError::PercentageOutOfRange(percentage));
            }

            let duration = period.duration();
            let secondary_duration = (duration * percentage as f64 / 100.0).floor();
            let primary_duration = duration - secondary_duration;

            period.assignment = Assignment::Split {
                primary: Share {
                    name: request.primary_tag,
                    percentage: 100 - percentage,
                    duration: primary_duration,
                    comment: request.primary_comment,
                },
                secondary: Share {
                    name: secondary_tag.clone(),
                    percentage,
                    duration: secondary_duration,
                    comment: request.secondary_comment,
                },
            };
            Ok(())
        }
    }
}
