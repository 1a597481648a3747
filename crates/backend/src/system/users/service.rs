use std::sync::Arc;

use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserId};

use super::repository::{EmailTaken, UserRepository};
use crate::shared::error::{ServiceError, ServiceResult};

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create a new user
    pub async fn create(&self, dto: CreateUserDto) -> ServiceResult<User> {
        validate_user_fields(&dto.name, &dto.email)?;

        // Быстрый отказ; окончательно уникальность проверяет repository при записи
        if self.repo.get_by_email(&dto.email).await?.is_some() {
            return Err(email_taken());
        }

        let user = self.repo.create(&dto).await.map_err(map_write_error)?;
        tracing::info!("User {} created: {}", user.id, user.email);
        Ok(user)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: UserId) -> ServiceResult<User> {
        self.repo.get_by_id(id).await?.ok_or_else(user_not_found)
    }

    /// List all users
    pub async fn list_all(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.list_all().await?)
    }

    /// Update user
    pub async fn update(&self, id: UserId, dto: UpdateUserDto) -> ServiceResult<User> {
        let existing = self.get_by_id(id).await?;

        validate_user_fields(&dto.name, &dto.email)?;

        // Email сменился — он не должен принадлежать другому пользователю
        if !dto.email.eq_ignore_ascii_case(&existing.email) {
            if let Some(other) = self.repo.get_by_email(&dto.email).await? {
                if other.id != id {
                    return Err(email_taken());
                }
            }
        }

        self.repo
            .update(id, &dto)
            .await
            .map_err(map_write_error)?
            .ok_or_else(user_not_found)
    }

    /// Delete user
    pub async fn delete(&self, id: UserId) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(user_not_found());
        }
        tracing::info!("User {} deleted", id);
        Ok(())
    }
}

fn user_not_found() -> ServiceError {
    ServiceError::NotFound("user not found".into())
}

fn email_taken() -> ServiceError {
    ServiceError::Conflict("user with this email already exists".into())
}

fn map_write_error(e: anyhow::Error) -> ServiceError {
    if e.downcast_ref::<EmailTaken>().is_some() {
        email_taken()
    } else {
        ServiceError::Internal(e)
    }
}

fn validate_user_fields(name: &str, email: &str) -> ServiceResult<()> {
    let name_len = name.trim().chars().count();
    if name_len == 0 {
        return Err(ServiceError::Validation("name is required".into()));
    }
    if name_len < NAME_MIN_LEN {
        return Err(ServiceError::Validation(format!(
            "name must be at least {} characters long",
            NAME_MIN_LEN
        )));
    }
    if name_len > NAME_MAX_LEN {
        return Err(ServiceError::Validation(format!(
            "name must be no more than {} characters long",
            NAME_MAX_LEN
        )));
    }

    if email.trim().is_empty() {
        return Err(ServiceError::Validation("email is required".into()));
    }
    if !is_valid_email(email) {
        return Err(ServiceError::Validation("invalid email format".into()));
    }

    Ok(())
}

/// Минимальная проверка: один '@' не по краям и точка в доменной части
fn is_valid_email(email: &str) -> bool {
    if email.len() < 5 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
}
