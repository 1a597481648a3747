use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserId};
use thiserror::Error;
use tokio::sync::RwLock;

/// Email уже принадлежит другому пользователю.
/// Репозиторий возвращает её через `anyhow::Error`, сервис делает downcast.
#[derive(Debug, Error)]
#[error("email already exists: {0}")]
pub struct EmailTaken(pub String);

/// Уникальность email проверяется самим хранилищем в момент записи:
/// create/update с занятым email возвращают [`EmailTaken`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, dto: &CreateUserDto) -> Result<User>;

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Все пользователи, новые первыми
    async fn list_all(&self) -> Result<Vec<User>>;

    /// None, если пользователя нет
    async fn update(&self, id: UserId, dto: &UpdateUserDto) -> Result<Option<User>>;

    /// false, если пользователя нет
    async fn delete(&self, id: UserId) -> Result<bool>;
}

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: Vec<User>,
}

impl Store {
    /// Занят ли email кем-то, кроме `except`
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.rows
            .iter()
            .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, dto: &CreateUserDto) -> Result<User> {
        let mut store = self.store.write().await;
        if store.email_taken(&dto.email, None) {
            return Err(EmailTaken(dto.email.clone()).into());
        }
        store.last_id += 1;
        let now = Utc::now();

        let user = User {
            id: UserId(store.last_id),
            name: dto.name.clone(),
            email: dto.email.clone(),
            created_at: now,
            updated_at: now,
        };
        store.rows.push(user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let store = self.store.read().await;
        // Вставка идёт по возрастанию id, created_at может совпадать
        Ok(store.rows.iter().rev().cloned().collect())
    }

    async fn update(&self, id: UserId, dto: &UpdateUserDto) -> Result<Option<User>> {
        let mut store = self.store.write().await;
        if store.email_taken(&dto.email, Some(id)) {
            return Err(EmailTaken(dto.email.clone()).into());
        }
        let Some(user) = store.rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.name = dto.name.clone();
        user.email = dto.email.clone();
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        let mut store = self.store.write().await;
        let before = store.rows.len();
        store.rows.retain(|u| u.id != id);
        Ok(store.rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(name: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let repo = InMemoryUserRepository::default();
        let anna = repo.create(&create_dto("Анна", "anna@example.com")).await.unwrap();
        assert_eq!(anna.id, UserId(1));

        let by_email = repo.get_by_email("ANNA@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, anna.id);
        assert!(repo.get_by_id(UserId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_rejects_taken_email() {
        let repo = InMemoryUserRepository::default();
        let anna = repo.create(&create_dto("Анна", "anna@example.com")).await.unwrap();
        let boris = repo.create(&create_dto("Борис", "boris@example.com")).await.unwrap();

        let err = repo
            .create(&create_dto("Анна 2", "Anna@Example.com"))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<EmailTaken>().is_some());

        let err = repo
            .update(
                boris.id,
                &UpdateUserDto {
                    name: "Борис".into(),
                    email: "anna@example.com".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<EmailTaken>().is_some());

        // свой email при обновлении не конфликтует
        let same = repo
            .update(
                anna.id,
                &UpdateUserDto {
                    name: "Анна К.".into(),
                    email: "anna@example.com".into(),
                },
            )
            .await
            .unwrap();
        assert!(same.is_some());
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryUserRepository::default();
        repo.create(&create_dto("Анна", "anna@example.com")).await.unwrap();
        repo.create(&create_dto("Борис", "boris@example.com")).await.unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Борис", "Анна"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemoryUserRepository::default();
        let user = repo.create(&create_dto("Анна", "anna@example.com")).await.unwrap();

        let updated = repo
            .update(
                user.id,
                &UpdateUserDto {
                    name: "Анна К.".into(),
                    email: "anna.k@example.com".into(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Анна К.");
        assert!(updated.updated_at >= user.updated_at);

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
    }
}
