use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::entities::section::{
    ActiveModel as SectionActiveModel, Column, Entity as Section, Model as SectionModel,
};
use crate::errors::AppError;
use crate::repositories::{BaseRepository, Repository};

/// Input for creating or renaming a section.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewSection {
    #[validate(length(
        min = 1,
        max = 70,
        message = "Section title must be between 1 and 70 characters"
    ))]
    pub title: String,
}

/// Repository for catalog sections.
#[derive(Debug)]
pub struct SectionRepository {
    base: BaseRepository,
}

impl SectionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Creates a section. A duplicate title surfaces as
    /// [`AppError::UniqueViolation`].
    pub async fn create(&self, input: NewSection) -> Result<SectionModel, AppError> {
        input.validate()?;

        let section = SectionActiveModel {
            title: Set(input.title),
            ..Default::default()
        };

        section
            .insert(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SectionModel>, AppError> {
        Section::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// All sections in creation order.
    pub async fn list(&self) -> Result<Vec<SectionModel>, AppError> {
        Section::find()
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn rename(&self, id: i32, input: NewSection) -> Result<SectionModel, AppError> {
        input.validate()?;

        let section = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Section", id))?;

        let mut active: SectionActiveModel = section.into();
        active.title = Set(input.title);

        active
            .update(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    /// Deletes a section. Products referencing it keep existing with a
    /// nulled `section_id`.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Section::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Section", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NewSection;
    use validator::Validate;

    #[test]
    fn title_length_is_bounded() {
        let too_long = NewSection {
            title: "x".repeat(71),
        };
        assert!(too_long.validate().is_err());

        let empty = NewSection {
            title: String::new(),
        };
        assert!(empty.validate().is_err());

        let ok = NewSection {
            title: "Action".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
