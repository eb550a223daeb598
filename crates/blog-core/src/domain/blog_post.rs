use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// BlogPost entity - a single published article.
///
/// `id` and `publish_date` are assigned by [`BlogPost::new`] and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub publish_date: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID and the current time as publish date.
    pub fn new(input: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: input.author,
            title: input.title,
            content: input.content,
            publish_date: Utc::now(),
        }
    }
}

/// Validated input for creating a post. All three fields are present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    author: String,
    title: String,
    content: String,
}

impl NewBlogPost {
    /// Validate raw create fields.
    ///
    /// Every absent or blank field is reported in a single error.
    pub fn new(
        author: Option<String>,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Self, DomainError> {
        let missing: Vec<&str> = [("author", &author), ("title", &title), ("content", &content)]
            .into_iter()
            .filter(|(_, value)| !is_present(value.as_deref()))
            .map(|(name, _)| name)
            .collect();

        match (author, title, content) {
            (Some(author), Some(title), Some(content)) if missing.is_empty() => Ok(Self {
                author,
                title,
                content,
            }),
            _ => Err(DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Validated partial update. Only supplied fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    /// Validate raw update fields. A supplied field must not be blank.
    pub fn new(
        author: Option<String>,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Self, DomainError> {
        let blank: Vec<&str> = [("author", &author), ("title", &title), ("content", &content)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect();

        if !blank.is_empty() {
            return Err(DomainError::Validation(format!(
                "Fields must not be empty: {}",
                blank.join(", ")
            )));
        }

        Ok(Self {
            author,
            title,
            content,
        })
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }

    /// Write the supplied fields onto `post`, leaving the rest untouched.
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
