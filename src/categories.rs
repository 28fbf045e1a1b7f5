use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CategoryConfig;
use crate::error::CategoryError;
use crate::text::slugify;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }
}

impl From<&CategoryConfig> for Category {
    fn from(config: &CategoryConfig) -> Self {
        let slug = config
            .slug
            .as_deref()
            .map(slugify)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| slugify(&config.name));
        Self {
            name: config.name.clone(),
            slug,
        }
    }
}

/// Read access to the blog's categories, owned by the persistence layer.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;
}

/// Categories fixed at start-up, typically from the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticCategories {
    categories: Vec<Category>,
}

impl StaticCategories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn from_config(configs: &[CategoryConfig]) -> Self {
        Self::new(configs.iter().map(Category::from).collect())
    }

    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }
}

#[async_trait]
impl CategoryRepository for StaticCategories {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.categories.clone())
    }
}
