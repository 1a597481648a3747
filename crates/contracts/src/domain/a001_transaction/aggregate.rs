use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::system::users::UserId;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор транзакции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Транзакция: общая трата, разделённая между участниками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub creator_id: UserId,
    /// Сумма в минимальных единицах (копейках)
    pub amount: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub participants: Vec<TransactionParticipant>,
}

/// Участник транзакции и его доля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParticipant {
    pub user_id: UserId,
    pub amount: i64,
}

impl Transaction {
    /// Создать транзакцию для вставки в хранилище.
    /// ID назначает репозиторий.
    pub fn new_for_insert(creator_id: UserId, dto: CreateTransactionDto) -> Self {
        let participants = split_equally(dto.amount, &dto.participants);
        Self {
            id: TransactionId(0),
            creator_id,
            amount: dto.amount,
            description: dto.description,
            created_at: Utc::now(),
            participants,
        }
    }

    /// Пользователь создал транзакцию или участвует в ней
    pub fn involves(&self, user_id: UserId) -> bool {
        self.creator_id == user_id || self.participants.iter().any(|p| p.user_id == user_id)
    }

    pub fn participant_ids(&self) -> Vec<UserId> {
        self.participants.iter().map(|p| p.user_id).collect()
    }
}

/// Делит сумму поровну. Остаток от деления раздаётся по одной единице
/// первым участникам, поэтому сумма долей всегда равна `amount`.
/// Для неположительной суммы или пустого списка долей нет.
pub fn split_equally(amount: i64, participants: &[UserId]) -> Vec<TransactionParticipant> {
    if amount <= 0 || participants.is_empty() {
        return Vec::new();
    }
    let count = participants.len() as i64;
    let share = amount / count;
    let remainder = (amount % count) as usize;

    participants
        .iter()
        .enumerate()
        .map(|(i, &user_id)| TransactionParticipant {
            user_id,
            amount: if i < remainder { share + 1 } else { share },
        })
        .collect()
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса POST /api/v1/transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreateTransactionDto {
    pub amount: i64,
    pub participants: Vec<UserId>,
    #[serde(default)]
    pub description: String,
}

impl CreateTransactionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.amount <= 0 {
            return Err("amount must be positive".into());
        }
        if self.participants.is_empty() {
            return Err("participants required".into());
        }
        Ok(())
    }
}
