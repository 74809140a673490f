//! Blog post CRUD over the blogs collection.
//!
//! Every operation reads the whole collection and every mutation writes it back. Callers
//! serialize access (see `AppState`) so a load/save pair is never interleaved with another
//! request in this process.

use crate::app::error::AppError;
use crate::domain::model::{timestamp, BlogPost, BlogPostPatch, NewBlogPost};
use crate::domain::validate::{validate_blog_patch, validate_new_blog};
use crate::storage::JsonFileStore;
use tracing::{debug, info};

pub struct BlogService {
    store: JsonFileStore<BlogPost>,
}

impl BlogService {
    pub fn new(store: JsonFileStore<BlogPost>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonFileStore<BlogPost> {
        &self.store
    }

    pub async fn create(&self, post: NewBlogPost) -> Result<BlogPost, AppError> {
        validate_new_blog(&post)?;

        let mut blogs = self.store.load().await?;
        let id = match BlogPost::next_id(&blogs) {
            Some(id) => id,
            None => {
                let last = blogs.last().map_or(0, |b| b.id);
                return Err(AppError::BlogIdsExhausted(last));
            }
        };
        let blog = BlogPost::new(id, post, timestamp::now());
        blogs.push(blog.clone());
        self.store.save(&blogs).await?;

        info!(id = blog.id, "blog post created");
        Ok(blog)
    }

    /// All posts in storage order.
    pub async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.store.load().await?)
    }

    /// `id` of `None` (an unparseable path segment) never matches a post.
    pub async fn get(&self, id: Option<u64>) -> Result<BlogPost, AppError> {
        let blogs = self.store.load().await?;
        match blogs.into_iter().find(|b| Some(b.id) == id) {
            Some(blog) => Ok(blog),
            None => {
                debug!(?id, "blog post not found");
                Err(AppError::BlogNotFound)
            }
        }
    }

    /// Applies `patch` to the post in place, keeping its position in the collection.
    pub async fn update(
        &self,
        id: Option<u64>,
        patch: BlogPostPatch,
    ) -> Result<BlogPost, AppError> {
        validate_blog_patch(&patch)?;

        let mut blogs = self.store.load().await?;
        let idx = Self::position(&blogs, id)?;

        let blog = &mut blogs[idx];
        blog.apply_patch(&patch, timestamp::now());
        let updated = blog.clone();
        self.store.save(&blogs).await?;

        info!(id = updated.id, "blog post updated");
        Ok(updated)
    }

    /// Removes exactly one post; the remaining posts keep their relative order.
    pub async fn delete(&self, id: Option<u64>) -> Result<(), AppError> {
        let mut blogs = self.store.load().await?;
        let idx = Self::position(&blogs, id)?;

        let removed = blogs.remove(idx);
        self.store.save(&blogs).await?;

        info!(id = removed.id, "blog post deleted");
        Ok(())
    }

    fn position(blogs: &[BlogPost], id: Option<u64>) -> Result<usize, AppError> {
        blogs.iter().position(|b| Some(b.id) == id).ok_or_else(|| {
            debug!(?id, "blog post not found");
            AppError::BlogNotFound
        })
    }
}
