use serde::{Deserialize, Serialize};

use super::aggregate::CreateTransactionDto;
use crate::system::users::UserId;

/// Состояние формы создания транзакции.
///
/// Все три поля хранятся как введённый текст, без разбора и проверок:
/// форма показывает ровно то, что напечатал пользователь.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub amount: String,
    pub participants: String,
    pub description: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: "100".into(),
            participants: "1, 2".into(),
            description: "Ужин на двоих".into(),
        }
    }
}

/// Поле формы, в которое пришёл ввод
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Participants,
    Description,
}

impl FormField {
    /// Пустое обязательное поле браузер не даст отправить (атрибут `required`)
    pub fn is_required(self) -> bool {
        match self {
            FormField::Amount | FormField::Participants => true,
            FormField::Description => false,
        }
    }

    /// Значение атрибута `type` у input
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Amount => "number",
            FormField::Participants | FormField::Description => "text",
        }
    }
}

impl TransactionForm {
    /// Записать введённый текст в поле как есть
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Amount => self.amount = value,
            FormField::Participants => self.participants = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::Participants => &self.participants,
            FormField::Description => &self.description,
        }
    }

    /// Текст подтверждения, который показывается после отправки формы
    pub fn confirmation_message(&self) -> String {
        format!(
            "Создана транзакция:\nСумма: {}\nУчастники: {}\nОписание: {}",
            self.amount, self.participants, self.description
        )
    }

    /// Разобрать текстовые поля в DTO для API
    pub fn to_create_dto(&self) -> Result<CreateTransactionDto, String> {
        let amount = self
            .amount
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Некорректная сумма: '{}'", self.amount))?;

        Ok(CreateTransactionDto {
            amount,
            participants: parse_participants(&self.participants)?,
            description: self.description.clone(),
        })
    }
}

/// "1, 2,3" -> [1, 2, 3]. Пустые элементы пропускаются.
pub fn parse_participants(raw: &str) -> Result<Vec<UserId>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map(UserId)
                .map_err(|_| format!("Некорректный ID участника: '{}'", s))
        })
        .collect()
}
