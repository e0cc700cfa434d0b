//! Row types for the four tables and their derived read shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Fixed classification tag for reviews. Seeded, never mutated by the API.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

/// Read-only via this API.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// Full reviews row. Returned by the vote-adjustment endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Listing row: every review column except `review_body`, plus the comment
/// count aggregated at read time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewSummary {
    pub owner: String,
    pub title: String,
    pub review_id: i32,
    pub category: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub designer: String,
    pub comment_count: i32,
}

/// Single-review read: full row plus the aggregated comment count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewDetail {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub comment_count: i32,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
    pub review_id: i32,
}
