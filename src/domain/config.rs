use serde::{Deserialize, Serialize};

/// В каком порядке `build_rounds` отдаёт раунды.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOrder {
    /// Сначала самый глубокий раунд (round = 1), финал последним.
    #[default]
    LeavesFirst,
    /// Сначала финал.
    RootFirst,
}

/// Настройки отображения сетки.
///
/// Всё, что меняется между клиентами, но не влияет на саму структуру дерева.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BracketConfig {
    /// Порядок раундов в результате `build_rounds`.
    pub round_order: RoundOrder,

    /// Имя заглушки для слота, который уже никогда не заполнится.
    pub none_label: String,

    /// Имя заглушки для слота, ждущего победителя дочернего матча.
    pub tbd_label: String,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            round_order: RoundOrder::LeavesFirst,
            none_label: "none".to_string(),
            tbd_label: "tbd".to_string(),
        }
    }
}

impl BracketConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.none_label.trim().is_empty() {
            return Err("BracketConfig: none_label is empty".into());
        }
        if self.tbd_label.trim().is_empty() {
            return Err("BracketConfig: tbd_label is empty".into());
        }
        if self.none_label == self.tbd_label {
            return Err("BracketConfig: none_label == tbd_label".into());
        }
        Ok(())
    }

    /// Удобный пресет: финал первым.
    pub fn root_first() -> Self {
        Self {
            round_order: RoundOrder::RootFirst,
            ..Self::default()
        }
    }
}
