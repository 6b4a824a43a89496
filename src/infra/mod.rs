//! Инфраструктурный слой вокруг движка сетки:
//! - генерация ID;
//! - RNG-реализации для жеребьёвки;
//! - абстракция хранения (off-chain / тесты);
//! - контекст сессии;
//! - маппинги между форматом бэкенда и domain.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod session;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
pub use session::*;
