use crate::domain::match_record::Match;
use crate::domain::referee::Referee;

/// Сериализация списка матчей в JSON в том виде, в каком его ждёт REST-бэкенд
/// (`idInTournament`, `idParent`, `roundNb`, ...).
pub fn matches_to_json(matches: &[Match]) -> Result<String, serde_json::Error> {
    serde_json::to_string(matches)
}

/// Разбор ответа бэкенда со списком матчей.
///
/// Поле `roundNb` необязательно: у старых записей его нет.
pub fn matches_from_json(json: &str) -> Result<Vec<Match>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Судьи турнира хранятся как username'ы; для `build_rounds` нужны `Referee`.
pub fn referees_from_usernames(usernames: &[String]) -> Vec<Referee> {
    usernames.iter().map(Referee::new).collect()
}

/// Обратное преобразование для DTO.
pub fn referee_usernames(referees: &[Referee]) -> Vec<String> {
    referees.iter().map(|r| r.username.clone()).collect()
}
