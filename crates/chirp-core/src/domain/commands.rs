//! Typed, validated inputs for every mutation.
//!
//! Each constructor is the only place its preconditions are checked; the
//! services downstream never re-probe optional fields.

use crate::error::DomainError;
use crate::ports::MediaUpload;

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Input for creating a tweet.
#[derive(Debug, Clone)]
pub struct NewTweet {
    pub(crate) content: String,
}

impl NewTweet {
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = present(Some(content.into()))
            .ok_or_else(|| DomainError::Validation("Content is required".to_string()))?;
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The mutable fields of a tweet.
#[derive(Debug, Clone)]
pub struct TweetChanges {
    pub(crate) content: String,
}

impl TweetChanges {
    pub fn new(content: Option<String>) -> Result<Self, DomainError> {
        let content = present(content)
            .ok_or_else(|| DomainError::Validation("Content is required".to_string()))?;
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Input for creating a video. The thumbnail is mandatory, the body media is not.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) thumbnail: MediaUpload,
    pub(crate) video_file: Option<MediaUpload>,
}

impl NewVideo {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        thumbnail: Option<MediaUpload>,
        video_file: Option<MediaUpload>,
    ) -> Result<Self, DomainError> {
        let title = present(title);
        let description = present(description);
        if title.is_none() && description.is_none() {
            return Err(DomainError::Validation(
                "A title or a description is required".to_string(),
            ));
        }
        let thumbnail = thumbnail
            .ok_or_else(|| DomainError::Validation("Thumbnail is required".to_string()))?;

        Ok(Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            thumbnail,
            video_file,
        })
    }
}

/// The mutable fields of a video, before media is materialized.
#[derive(Debug, Clone)]
pub struct VideoChanges {
    pub(crate) description: Option<String>,
    pub(crate) thumbnail: Option<MediaUpload>,
}

impl VideoChanges {
    pub fn new(
        description: Option<String>,
        thumbnail: Option<MediaUpload>,
    ) -> Result<Self, DomainError> {
        let description = present(description);
        if description.is_none() && thumbnail.is_none() {
            return Err(DomainError::Validation(
                "A description or a thumbnail is required".to_string(),
            ));
        }
        Ok(Self {
            description,
            thumbnail,
        })
    }
}

/// Store-level video update, with the thumbnail already uploaded.
#[derive(Debug, Clone, Default)]
pub struct VideoPatch {
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumb() -> MediaUpload {
        MediaUpload::new("thumb.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn test_new_tweet_requires_content() {
        assert!(matches!(NewTweet::new(""), Err(DomainError::Validation(_))));
        assert!(matches!(NewTweet::new("   "), Err(DomainError::Validation(_))));
        assert_eq!(NewTweet::new("hello").unwrap().content(), "hello");
    }

    #[test]
    fn test_new_video_requires_title_or_description() {
        let err = NewVideo::new(None, Some(" ".into()), Some(thumb()), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let video = NewVideo::new(None, Some("about cats".into()), Some(thumb()), None).unwrap();
        assert_eq!(video.title, "");
        assert_eq!(video.description, "about cats");
    }

    #[test]
    fn test_new_video_requires_thumbnail() {
        let err = NewVideo::new(Some("Cats".into()), None, None, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_video_changes_need_one_field() {
        assert!(VideoChanges::new(None, None).is_err());
        assert!(VideoChanges::new(Some(String::new()), None).is_err());
        assert!(VideoChanges::new(None, Some(thumb())).is_ok());
    }
}
