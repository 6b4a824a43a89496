use serde::{Deserialize, Serialize};

/// Контекст сессии: токен и пользователь.
///
/// Передаётся явно в те слои, которым он нужен (сохранение в хранилище,
/// команды API). Глобального хранилища сессии нет.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    /// Токен авторизации REST-бэкенда.
    pub token: Option<String>,
    /// Username текущего пользователя.
    pub username: Option<String>,
}

impl SessionContext {
    /// Гость: читать можно, писать нельзя.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            username: Some(username.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Выход: токен забываем, пользователя тоже.
    pub fn logout(&mut self) {
        self.token = None;
        self.username = None;
    }
}
