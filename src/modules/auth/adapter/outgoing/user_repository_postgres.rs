use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    AccountTypeDb, ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::{AccountType, User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PatchProfileData, UserRepository, UserRepositoryError,
};
use crate::shared::{db_error::is_unique_violation, patch::PatchField, soft_delete::DeletionStatus};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_active(
        &self,
        user_id: UserId,
        changes: UserActiveModel,
    ) -> Result<User, UserRepositoryError> {
        let mut rows = UserEntity::update_many()
            .set(changes)
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::IsDeleted.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        rows.pop()
            .map(|m| m.to_domain())
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            avatar: Set(None),
            is_staff: Set(false),
            is_active: Set(true),
            account_type: Set(AccountTypeDb::Buyer),
            is_deleted: Set(false),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_domain())
    }

    async fn patch_profile(
        &self,
        user_id: UserId,
        patch: PatchProfileData,
    ) -> Result<User, UserRepositoryError> {
        let mut changes = UserActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let PatchField::Value(first_name) = patch.first_name {
            changes.first_name = Set(first_name);
        }
        if let PatchField::Value(last_name) = patch.last_name {
            changes.last_name = Set(last_name);
        }
        match patch.avatar {
            PatchField::Unset => {}
            PatchField::Null => changes.avatar = Set(None),
            PatchField::Value(avatar) => changes.avatar = Set(Some(avatar)),
        }

        self.update_active(user_id, changes).await
    }

    async fn set_account_type(
        &self,
        user_id: UserId,
        account_type: AccountType,
    ) -> Result<User, UserRepositoryError> {
        let changes = UserActiveModel {
            account_type: Set(account_type.into()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.update_active(user_id, changes).await
    }

    async fn deactivate_user(
        &self,
        user_id: UserId,
        deletion: DeletionStatus,
    ) -> Result<(), UserRepositoryError> {
        let (is_deleted, deleted_at) = deletion.to_columns();

        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsActive, Expr::value(false))
            .col_expr(UserColumn::IsDeleted, Expr::value(is_deleted))
            .col_expr(UserColumn::DeletedAt, Expr::value(deleted_at))
            .col_expr(UserColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
