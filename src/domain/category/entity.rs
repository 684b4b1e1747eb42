// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub title: CategoryTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn rename(&mut self, title: CategoryTitle, slug: Slug, now: DateTime<Utc>) {
        self.title = title;
        self.slug = slug;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: CategoryTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub title: Option<CategoryTitle>,
    pub slug: Option<Slug>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_replaces_title_and_slug() {
        let created = Utc::now();
        let mut category = Category {
            id: CategoryId::new(1).unwrap(),
            title: CategoryTitle::new("Rust").unwrap(),
            slug: Slug::new("rust").unwrap(),
            created_at: created,
            updated_at: created,
        };
        let later = created + chrono::Duration::seconds(30);
        category.rename(
            CategoryTitle::new("Rust Lang").unwrap(),
            Slug::new("rust-lang").unwrap(),
            later,
        );
        assert_eq!(category.title.as_str(), "Rust Lang");
        assert_eq!(category.slug.as_str(), "rust-lang");
        assert_eq!(category.updated_at, later);
        assert_eq!(category.created_at, created);
    }
}
