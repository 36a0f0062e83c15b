use async_trait::async_trait;

use crate::modules::catalog::application::domain::entities::Category;

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Image cannot be empty")]
    EmptyImage,
}

impl CreateCategoryCommand {
    pub fn new(name: String, image: String) -> Result<Self, CreateCategoryCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreateCategoryCommandError::EmptyName);
        }
        if name.chars().count() > 100 {
            return Err(CreateCategoryCommandError::NameTooLong);
        }

        let image = image.trim();
        if image.is_empty() {
            return Err(CreateCategoryCommandError::EmptyImage);
        }

        Ok(Self {
            name: name.to_string(),
            image: image.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Category already exists")]
    AlreadyExists,

    #[error("Could not derive a free slug: {0}")]
    SlugUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCategoryCommand) -> Result<Category, CreateCategoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let command =
            CreateCategoryCommand::new("  Lighting ".to_string(), "img.png".to_string()).unwrap();
        assert_eq!(command.name(), "Lighting");
    }

    #[test]
    fn blank_image_is_rejected() {
        let err = CreateCategoryCommand::new("Lighting".to_string(), " ".to_string()).unwrap_err();
        assert_eq!(err, CreateCategoryCommandError::EmptyImage);
    }
}
