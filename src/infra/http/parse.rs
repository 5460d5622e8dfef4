//! Validation of response bodies returned by the posts API.

use postdesk_api_types::Post;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response body has no `posts` field")]
    MissingPosts,
    #[error("`posts` field is not an array")]
    PostsNotArray,
    #[error("post at index {index} is invalid: {source}")]
    InvalidPost {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a list envelope `{ "posts": [...] }`, reporting the first structural problem.
pub fn parse_post_list(body: &[u8]) -> Result<Vec<Post>, ParseError> {
    let value: Value = serde_json::from_slice(body).map_err(ParseError::InvalidJson)?;
    let Value::Object(mut envelope) = value else {
        return Err(ParseError::NotAnObject);
    };
    let posts = envelope.remove("posts").ok_or(ParseError::MissingPosts)?;
    let Value::Array(entries) = posts else {
        return Err(ParseError::PostsNotArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| ParseError::InvalidPost { index, source })
        })
        .collect()
}

pub fn parse_post(body: &[u8]) -> Result<Post, ParseError> {
    serde_json::from_slice(body).map_err(ParseError::InvalidJson)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_list() {
        let body = br#"{"posts":[{"id":"1","title":"Hello","content":"World","published":true,"created_at":"2024-05-01T10:00:00Z"}]}"#;
        let posts = parse_post_list(body).expect("posts");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert!(posts[0].published);
    }

    #[test]
    fn empty_array_is_not_an_error() {
        let posts = parse_post_list(br#"{"posts":[],"count":0}"#).expect("posts");
        assert!(posts.is_empty());
    }

    #[test]
    fn missing_posts_field_is_reported() {
        let err = parse_post_list(br#"{"items":[]}"#).expect_err("missing");
        assert!(matches!(err, ParseError::MissingPosts));
    }

    #[test]
    fn non_array_posts_field_is_reported() {
        for body in [
            &br#"{"posts":null}"#[..],
            br#"{"posts":{}}"#,
            br#"{"posts":"nope"}"#,
            br#"{"posts":3}"#,
        ] {
            let err = parse_post_list(body).expect_err("not an array");
            assert!(matches!(err, ParseError::PostsNotArray));
        }
    }

    #[test]
    fn top_level_array_is_not_an_envelope() {
        let err = parse_post_list(br#"[]"#).expect_err("array body");
        assert!(matches!(err, ParseError::NotAnObject));
    }

    #[test]
    fn garbage_body_is_invalid_json() {
        let err = parse_post_list(b"<html>bad gateway</html>").expect_err("html");
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn bad_entry_reports_its_index() {
        let body = br#"{"posts":[{"id":"1","title":"A","content":"B","created_at":"x"},{"id":2}]}"#;
        let err = parse_post_list(body).expect_err("bad entry");
        assert!(matches!(err, ParseError::InvalidPost { index: 1, .. }));
    }
}
