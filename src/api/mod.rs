//! Внешний API турнирной сетки.
//!
//! `Command` меняет турнир (регистрация, сетка, счёт), `Query` только читает.
//! Ответы идут через DTO: фронту не нужны внутренние типы движка.
//! Ошибки любого слоя сводятся к `ApiError`.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
