use std::sync::Arc;

use crate::domain::a001_transaction::repository::InMemoryTransactionRepository;
use crate::domain::a001_transaction::service::TransactionService;
use crate::system::users::repository::InMemoryUserRepository;
use crate::system::users::service::UserService;

/// Состояние роутера: сервисы, разделяемые всеми обработчиками
#[derive(Clone)]
pub struct AppState {
    pub transactions: Arc<TransactionService>,
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(transactions: TransactionService, users: UserService) -> Self {
        Self {
            transactions: Arc::new(transactions),
            users: Arc::new(users),
        }
    }

    /// Сервисы поверх хранилищ в памяти
    pub fn in_memory() -> Self {
        Self::new(
            TransactionService::new(Arc::new(InMemoryTransactionRepository::default())),
            UserService::new(Arc::new(InMemoryUserRepository::default())),
        )
    }
}
