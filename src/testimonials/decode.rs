// SPDX-License-Identifier: MPL-2.0
//! Record to display transform.
//!
//! Pure and synchronous. Payloads are not inspected: a garbage payload yields
//! a well-formed URI that fails later, at render time.

use super::record::{MediaObject, TestimonialRecord};

/// A record with its media resolved to directly renderable URIs.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayableTestimonial {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: Option<i64>,
    pub is_featured: bool,
    /// `None` when the record carries no usable image.
    pub image_uri: Option<String>,
    /// `None` when the record carries no usable video.
    pub video_uri: Option<String>,
}

impl DisplayableTestimonial {
    /// "Role, Company" with whichever parts are present.
    #[must_use]
    pub fn byline(&self) -> Option<String> {
        let parts: Vec<&str> = [self.role.as_deref(), self.company.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Builds `data:{content_type};base64,{payload}` when both halves are present
/// and non-empty.
#[must_use]
pub fn resolve_media_uri(media: &MediaObject) -> Option<String> {
    let content_type = media.content_type.as_deref().map(str::trim)?;
    let payload = media.content.as_deref()?;
    if content_type.is_empty() || payload.is_empty() {
        return None;
    }
    Some(format!("data:{content_type};base64,{payload}"))
}

#[must_use]
pub fn decode(record: TestimonialRecord) -> DisplayableTestimonial {
    let image_uri = record.image.as_ref().and_then(resolve_media_uri);
    let video_uri = record.video.as_ref().and_then(resolve_media_uri);

    DisplayableTestimonial {
        id: record.id,
        name: record.name,
        role: record.role,
        company: record.company,
        content: record.content,
        rating: record.rating,
        is_featured: record.is_featured,
        image_uri,
        video_uri,
    }
}

/// Decodes a fetched batch, keeping server order.
#[must_use]
pub fn decode_all(records: Vec<TestimonialRecord>) -> Vec<DisplayableTestimonial> {
    records.into_iter().map(decode).collect()
}
