//! Route manifest served at GET /api.

use axum::Json;
use serde_json::{json, Value};

/// Every supported route mapped to a description object.
pub async fn manifest() -> Json<Value> {
    Json(manifest_body())
}

pub(crate) fn manifest_body() -> Value {
    json!({
        "GET /api": {
            "description": "serves a json representation of all the available endpoints of the api"
        },
        "GET /api/categories": {
            "description": "serves an array of all categories",
            "queries": [],
            "exampleResponse": {
                "categories": [
                    {
                        "slug": "dexterity",
                        "description": "Games involving physical skill"
                    }
                ]
            }
        },
        "GET /api/reviews": {
            "description": "serves an array of all reviews",
            "queries": ["category", "sort_by", "order"],
            "exampleResponse": {
                "reviews": [
                    {
                        "review_id": 2,
                        "title": "Jenga",
                        "category": "dexterity",
                        "designer": "Leslie Scott",
                        "owner": "philippaclaire9",
                        "review_img_url": "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
                        "created_at": "2021-01-18T10:01:41.251Z",
                        "votes": 5,
                        "comment_count": 3
                    }
                ]
            }
        },
        "GET /api/reviews/:review_id": {
            "description": "serves a single review with its comment count",
            "queries": [],
            "exampleResponse": {
                "review": {
                    "review_id": 2,
                    "title": "Jenga",
                    "review_body": "Fiddly fun for all the family",
                    "votes": 5,
                    "comment_count": 3
                }
            }
        },
        "GET /api/reviews/:review_id/comments": {
            "description": "serves the comments for a review, newest first",
            "queries": [],
            "exampleResponse": {
                "comments": [
                    {
                        "comment_id": 1,
                        "author": "bainesface",
                        "body": "I loved this game too!",
                        "votes": 16,
                        "review_id": 2,
                        "created_at": "2017-11-22T12:43:33.389Z"
                    }
                ]
            }
        },
        "POST /api/reviews/:review_id/comments": {
            "description": "creates a comment on a review and serves it back",
            "queries": [],
            "exampleRequest": { "username": "mallionaire", "body": "Very good game!" },
            "exampleResponse": {
                "comment": {
                    "comment_id": 7,
                    "author": "mallionaire",
                    "body": "Very good game!",
                    "votes": 0,
                    "review_id": 1
                }
            }
        },
        "PATCH /api/reviews/:review_id": {
            "description": "adjusts a review's vote count by inc_votes and serves the updated review",
            "queries": [],
            "exampleRequest": { "inc_votes": -10 },
            "exampleResponse": {
                "review": {
                    "review_id": 2,
                    "title": "Jenga",
                    "votes": -5
                }
            }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "deletes a comment; responds with no body",
            "queries": []
        },
        "GET /api/users": {
            "description": "serves an array of all users",
            "queries": [],
            "exampleResponse": {
                "users": [
                    {
                        "username": "mallionaire",
                        "name": "haz",
                        "avatar_url": "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"
                    }
                ]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::manifest_body;

    #[test]
    fn every_supported_route_is_listed() {
        let body = manifest_body();
        let routes = [
            "GET /api",
            "GET /api/categories",
            "GET /api/reviews",
            "GET /api/reviews/:review_id",
            "GET /api/reviews/:review_id/comments",
            "POST /api/reviews/:review_id/comments",
            "PATCH /api/reviews/:review_id",
            "DELETE /api/comments/:comment_id",
            "GET /api/users",
        ];
        for route in routes {
            assert!(body.get(route).is_some_and(|v| v.is_object()), "{}", route);
        }
        assert_eq!(body.as_object().unwrap().len(), routes.len());
    }
}
