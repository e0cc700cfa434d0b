//! Named JSON envelopes: each success value is wrapped in a field named for
//! its resource.

use crate::model::{Category, Comment, Review, ReviewDetail, ReviewSummary, User};
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoriesBody {
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct ReviewsBody {
    pub reviews: Vec<ReviewSummary>,
}

#[derive(Serialize)]
pub struct ReviewBody {
    pub review: ReviewDetail,
}

/// PATCH result: the updated row, without the aggregated comment count.
#[derive(Serialize)]
pub struct UpdatedReviewBody {
    pub review: Review,
}

#[derive(Serialize)]
pub struct CommentsBody {
    pub comments: Vec<Comment>,
}

#[derive(Serialize)]
pub struct CommentBody {
    pub comment: Comment,
}

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}
