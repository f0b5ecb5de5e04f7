// SPDX-License-Identifier: MPL-2.0
//! Wire types for the testimonials endpoint.
//!
//! The endpoint answers with a JSON array. Only `id`, `name` and `content`
//! are mandatory; everything else may be missing or `null`. Unknown fields
//! are ignored so that server-side additions never break the client.

use serde::Deserialize;

/// One testimonial as delivered by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestimonialRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    /// Raw rating as sent by the server. Not clamped here.
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub image: Option<MediaObject>,
    #[serde(default)]
    pub video: Option<MediaObject>,
}

/// Media embedded in a record: a declared content type plus base64 text.
///
/// The server sends an empty `content` together with `error` when the
/// file behind the record could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaObject {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_deserializes_with_defaults() {
        let json = r#"{"id": 3, "name": "Ada", "content": "Great work"}"#;
        let record: TestimonialRecord = serde_json::from_str(json).expect("parse");

        assert_eq!(record.id, 3);
        assert_eq!(record.rating, None);
        assert!(!record.is_featured);
        assert!(record.image.is_none());
        assert!(record.video.is_none());
    }

    #[test]
    fn full_record_with_media_and_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "Sarah Lee",
            "role": "CEO",
            "company": "CloudWave",
            "content": "Quick delivery.",
            "rating": 4,
            "is_featured": true,
            "image": {"filename": "1.png", "content_type": "image/png", "content": "Zm9v"},
            "video": null,
            "created_at": "2025-01-04T10:00:00",
            "updated_at": "2025-01-04T10:00:00"
        }"#;
        let record: TestimonialRecord = serde_json::from_str(json).expect("parse");

        assert_eq!(record.rating, Some(4));
        assert_eq!(record.company.as_deref(), Some("CloudWave"));
        let image = record.image.expect("image present");
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
        assert_eq!(image.content.as_deref(), Some("Zm9v"));
        assert!(record.video.is_none());
    }

    #[test]
    fn media_with_server_error_parses() {
        let json = r#"{"filename": "v.mp4", "content_type": "application/octet-stream",
                       "content": "", "error": "File not found", "path": "/x"}"#;
        let media: MediaObject = serde_json::from_str(json).expect("parse");
        assert_eq!(media.content.as_deref(), Some(""));
        assert_eq!(media.error.as_deref(), Some("File not found"));
    }

    #[test]
    fn out_of_range_rating_is_kept_raw() {
        let json = r#"{"id": 9, "name": "X", "content": "Y", "rating": 11}"#;
        let record: TestimonialRecord = serde_json::from_str(json).expect("parse");
        assert_eq!(record.rating, Some(11));
    }
}
