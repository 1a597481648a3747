use anyhow::Result;
use async_trait::async_trait;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionId};
use contracts::system::users::UserId;
use tokio::sync::RwLock;

/// Хранилище транзакций
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Сохранить транзакцию, вернуть назначенный ID
    async fn insert(&self, tx: &Transaction) -> Result<TransactionId>;

    async fn get_by_id(&self, id: TransactionId) -> Result<Option<Transaction>>;

    /// Все транзакции, где пользователь создатель или участник
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>>;
}

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: Vec<Transaction>,
}

/// Реализация в памяти процесса. Данные живут до остановки сервера.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    store: RwLock<Store>,
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn insert(&self, tx: &Transaction) -> Result<TransactionId> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = TransactionId(store.last_id);

        let mut row = tx.clone();
        row.id = id;
        store.rows.push(row);

        Ok(id)
    }

    async fn get_by_id(&self, id: TransactionId) -> Result<Option<Transaction>> {
        let store = self.store.read().await;
        Ok(store.rows.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>> {
        let store = self.store.read().await;
        // rows уже упорядочены по id
        Ok(store
            .rows
            .iter()
            .filter(|t| t.involves(user_id))
            .cloned()
            .collect())
    }
}
