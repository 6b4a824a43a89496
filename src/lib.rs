//! Турнирные сетки на выбывание поверх Linera.
//!
//! Здесь описан ABI приложения: операция контракта оборачивает
//! `api::Command`, запрос сервиса — `api::Query`. Исполняет их
//! `tournament::TournamentRuntime`. Сам движок сетки (`bracket`)
//! от Linera не зависит.

pub mod api;
pub mod bracket;
pub mod domain;
pub mod infra;
pub mod tournament;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BracketOperation {
    Command(Command),
}

impl BracketOperation {
    pub fn into_command(self) -> Command {
        match self {
            BracketOperation::Command(command) => command,
        }
    }
}

impl From<Command> for BracketOperation {
    fn from(command: Command) -> Self {
        BracketOperation::Command(command)
    }
}

/// Запросы к сервису (read-only).
pub type BracketQuery = Query;

/// Ответы на запросы.
pub type BracketResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct BracketAbi;

impl ContractAbi for BracketAbi {
    type Operation = BracketOperation;
    type Response = ();
}

impl ServiceAbi for BracketAbi {
    type Query = BracketQuery;
    type QueryResponse = BracketResponse;
}
