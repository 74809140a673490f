use super::ValidationError;
use crate::domain::model::{provided, BlogPostPatch, NewBlogPost};

pub fn validate_new_blog(post: &NewBlogPost) -> Result<(), ValidationError> {
    let complete = provided(&post.title).is_some()
        && provided(&post.content).is_some()
        && provided(&post.author).is_some();
    if complete {
        Ok(())
    } else {
        Err(ValidationError::BlogFieldsRequired)
    }
}

pub fn validate_blog_patch(patch: &BlogPostPatch) -> Result<(), ValidationError> {
    let any = provided(&patch.title).is_some()
        || provided(&patch.content).is_some()
        || provided(&patch.author).is_some();
    if any {
        Ok(())
    } else {
        Err(ValidationError::EmptyBlogPatch)
    }
}
