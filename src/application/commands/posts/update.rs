// src/application/commands/posts/update.rs
use super::service::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        post::{Post, PostContent, PostId, PostStatus, PostTitle, PostUpdate},
    },
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<PostStatus>,
    /// `Some(None)` clears the category, `Some(Some(id))` reassigns it.
    pub category_id: Option<Option<i64>>,
    pub tags: Option<Vec<String>>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        _actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let UpdatePostCommand {
            id: _,
            title,
            slug,
            content,
            status,
            category_id,
            tags,
        } = command;

        let mut update = PostUpdate::new(id, post.updated_at);

        let title_opt = title.map(PostTitle::new).transpose()?;
        let content_opt = content.map(PostContent::new).transpose()?;
        update = self
            .apply_content_updates(&mut post, title_opt, content_opt, slug.as_deref(), update)
            .await?;

        if let Some(status) = status {
            let now = self.clock.now();
            post.set_status(status, now);
            update = update.with_status(status);
            update.set_updated_at(post.updated_at);
        }

        if let Some(raw) = category_id {
            let category = match raw {
                Some(raw_id) => {
                    let cid = CategoryId::new(raw_id)?;
                    self.category_repo
                        .find_by_id(cid)
                        .await?
                        .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                    Some(cid)
                }
                None => None,
            };
            update = update.with_category(category);
            update.set_updated_at(self.clock.now());
        }

        if let Some(tags) = tags {
            update = update.with_tags(tags);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    async fn apply_content_updates(
        &self,
        post: &mut Post,
        title_opt: Option<PostTitle>,
        content_opt: Option<PostContent>,
        explicit_slug: Option<&str>,
        mut update: PostUpdate,
    ) -> ApplicationResult<PostUpdate> {
        let explicit_slug = explicit_slug.map(str::trim).filter(|s| !s.is_empty());
        let title_changed = title_opt
            .as_ref()
            .is_some_and(|t| t.as_str() != post.title.as_str());

        if title_opt.is_none() && content_opt.is_none() && explicit_slug.is_none() {
            return Ok(update);
        }

        let now = self.clock.now();
        if title_opt.is_some() || content_opt.is_some() {
            let new_title = title_opt.clone().unwrap_or_else(|| post.title.clone());
            let new_content = content_opt.unwrap_or_else(|| post.content.clone());
            post.set_content(new_title.clone(), new_content.clone(), now);
            update = update.with_title(new_title).with_content(new_content);
            update.set_updated_at(post.updated_at);
        }

        // An explicit slug wins; otherwise the slug follows the title,
        // and an unchanged title keeps the slug it already has.
        if explicit_slug.is_some() || title_changed {
            let slug = self
                .slug_resolver
                .resolve(post.title.as_str(), explicit_slug, Some(post.id.into()))
                .await?;
            post.set_slug(slug.clone(), now);
            update = update.with_slug(slug);
            update.set_updated_at(post.updated_at);
        }

        Ok(update)
    }
}
