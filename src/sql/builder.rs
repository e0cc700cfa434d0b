//! Builds the parameterized review listing query: sort-column allow-list,
//! order normalization, optional category filter.

/// Columns of the reviews table permitted as a sort key. Anything else falls
/// back to `created_at`; an unknown sort column is not a client error.
const REVIEW_SORT_COLUMNS: &[&str] = &[
    "review_id",
    "title",
    "category",
    "designer",
    "owner",
    "review_body",
    "review_img_url",
    "votes",
    "created_at",
];

pub const DEFAULT_SORT_COLUMN: &str = "created_at";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive; anything other than `asc` normalizes to descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Resolve a requested sort column against the allow-list, falling back to
/// `created_at` for unknown or absent input.
pub fn resolve_sort_column(raw: Option<&str>) -> &'static str {
    raw.and_then(|s| REVIEW_SORT_COLUMNS.iter().find(|c| **c == s))
        .copied()
        .unwrap_or(DEFAULT_SORT_COLUMN)
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

/// Review listing: reviews left-joined against comments, grouped by the
/// review primary key (so any reviews column is a valid sort target), with
/// the comment count cast to an integer. The category value is bound as a
/// parameter; the sort column and direction are interpolated only after
/// resolving against the allow-list above.
pub fn select_reviews(
    sort_by: Option<&str>,
    order: Option<&str>,
    category: Option<&str>,
) -> QueryBuf {
    let sort_column = resolve_sort_column(sort_by);
    let direction = SortOrder::parse(order);

    let mut params = Vec::new();
    let where_clause = match category {
        Some(slug) => {
            params.push(slug.to_string());
            " WHERE category = $1"
        }
        None => "",
    };

    let sql = format!(
        "SELECT owner, reviews.review_id, title, category, designer, review_img_url, \
         reviews.votes, reviews.created_at, \
         CAST(COUNT(comments.comment_id) AS INT) AS comment_count \
         FROM reviews \
         LEFT JOIN comments ON reviews.review_id = comments.review_id\
         {} \
         GROUP BY reviews.review_id \
         ORDER BY reviews.{} {}",
        where_clause,
        sort_column,
        direction.as_sql()
    );

    QueryBuf { sql, params }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, SortOrder::Desc)]
    #[case(Some("asc"), SortOrder::Asc)]
    #[case(Some("ASC"), SortOrder::Asc)]
    #[case(Some("desc"), SortOrder::Desc)]
    #[case(Some("not_there"), SortOrder::Desc)]
    fn order_normalizes_to_desc_unless_asc(
        #[case] raw: Option<&str>,
        #[case] expected: SortOrder,
    ) {
        assert_eq!(SortOrder::parse(raw), expected);
    }

    #[rstest]
    #[case(None, "created_at")]
    #[case(Some("votes"), "votes")]
    #[case(Some("title"), "title")]
    #[case(Some("not_there"), "created_at")]
    #[case(Some("comment_count"), "created_at")]
    fn sort_column_falls_back_to_created_at(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(resolve_sort_column(raw), expected);
    }

    #[test]
    fn default_query_sorts_by_created_at_desc() {
        let q = select_reviews(None, None, None);
        assert!(q.sql.ends_with("ORDER BY reviews.created_at DESC"));
        assert!(q.sql.contains("LEFT JOIN comments"));
        assert!(q.sql.contains("GROUP BY reviews.review_id"));
        assert!(q.sql.contains("CAST(COUNT(comments.comment_id) AS INT) AS comment_count"));
        assert!(q.params.is_empty());
    }

    #[test]
    fn category_filter_is_parameterized() {
        let q = select_reviews(None, None, Some("dexterity"));
        assert!(q.sql.contains("WHERE category = $1"));
        assert_eq!(q.params, vec!["dexterity".to_string()]);
    }

    #[test]
    fn explicit_sort_and_order_are_applied() {
        let q = select_reviews(Some("votes"), Some("asc"), None);
        assert!(q.sql.ends_with("ORDER BY reviews.votes ASC"));
    }

    #[test]
    fn unknown_sort_is_not_interpolated() {
        let q = select_reviews(Some("; DROP TABLE reviews"), None, None);
        assert!(!q.sql.contains("DROP TABLE"));
        assert!(q.sql.ends_with("ORDER BY reviews.created_at DESC"));
    }
}
