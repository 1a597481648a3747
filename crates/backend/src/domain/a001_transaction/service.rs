use std::sync::Arc;

use contracts::domain::a001_transaction::aggregate::{
    CreateTransactionDto, Transaction, TransactionId,
};
use contracts::system::users::UserId;

use super::repository::TransactionRepository;
use crate::shared::error::{ServiceError, ServiceResult};

pub struct TransactionService {
    repo: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repo: Arc<dyn TransactionRepository>) -> Self {
        Self { repo }
    }

    /// Создание транзакции с равным разделением суммы между участниками
    pub async fn create(
        &self,
        creator_id: UserId,
        dto: CreateTransactionDto,
    ) -> ServiceResult<Transaction> {
        dto.validate().map_err(ServiceError::Validation)?;

        let mut tx = Transaction::new_for_insert(creator_id, dto);
        tx.id = self.repo.insert(&tx).await?;

        tracing::info!(
            "Transaction {} created by user {}: amount={}, participants={}",
            tx.id,
            tx.creator_id,
            tx.amount,
            tx.participants.len()
        );

        Ok(tx)
    }

    pub async fn get_by_id(&self, id: TransactionId) -> ServiceResult<Transaction> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("transaction not found".into()))
    }

    pub async fn list_by_user(&self, user_id: UserId) -> ServiceResult<Vec<Transaction>> {
        Ok(self.repo.list_by_user(user_id).await?)
    }
}
