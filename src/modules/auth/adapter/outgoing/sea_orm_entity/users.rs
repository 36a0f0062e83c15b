use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountType, User, UserId};
use crate::shared::soft_delete::DeletionStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub is_staff: bool,
    pub is_active: bool,
    pub account_type: AccountTypeDb,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_type")]
pub enum AccountTypeDb {
    #[sea_orm(string_value = "BUYER")]
    Buyer,

    #[sea_orm(string_value = "SELLER")]
    Seller,
}

impl From<AccountType> for AccountTypeDb {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Buyer => AccountTypeDb::Buyer,
            AccountType::Seller => AccountTypeDb::Seller,
        }
    }
}

impl From<AccountTypeDb> for AccountType {
    fn from(value: AccountTypeDb) -> Self {
        match value {
            AccountTypeDb::Buyer => AccountType::Buyer,
            AccountTypeDb::Seller => AccountType::Seller,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> User {
        User {
            id: UserId::from(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password_hash: self.password_hash,
            avatar: self.avatar,
            is_staff: self.is_staff,
            is_active: self.is_active,
            account_type: self.account_type.into(),
            deletion: DeletionStatus::from_columns(self.is_deleted, self.deleted_at),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(id: Uuid, email: &str) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "hashed_password".to_string(),
        avatar: None,
        is_staff: false,
        is_active: true,
        account_type: AccountTypeDb::Buyer,
        is_deleted: false,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    }
}
