//! Motivation message composer
//!
//! Pure, deterministic assembly of the daily running message from mood text,
//! current weather, season and the weekend flag. The output uses `*...*` as
//! its only markup (the target distance is bold).

use chrono::Weekday;
use domain::{MoodTone, Season, WeatherReading};

use crate::services::mood_classifier::classify_mood;

/// Description fragment that selects the rain line
pub const RAIN_MARKER: &str = "дождь";
/// Description fragment that selects the frost line
pub const SNOW_MARKER: &str = "снег";
/// Below this temperature (strictly) the frost line is used
pub const COLD_THRESHOLD_C: f64 = -3.0;
/// Above this temperature (strictly) the heat line is used
pub const HEAT_THRESHOLD_C: f64 = 25.0;

/// Target distance on the weekend day
pub const WEEKEND_DISTANCE_KM: u32 = 15;
/// Target distance on every other day
pub const WEEKDAY_DISTANCE_KM: u32 = 10;

const CLOSING_LINE: &str = "Обувь завязана? Вперёд!";

/// Compose the motivation message
///
/// Never fails; unrecognised mood text gets the enthusiastic opener.
pub fn compose_message(
    mood: &str,
    weather: &WeatherReading,
    season: Season,
    is_weekend: bool,
) -> String {
    [
        opener(classify_mood(mood)).to_string(),
        day_line(is_weekend),
        weather_line(weather),
        season_aphorism(season).to_string(),
        CLOSING_LINE.to_string(),
    ]
    .join("\n\n")
}

/// Opening line for a mood tone
pub const fn opener(tone: MoodTone) -> &'static str {
    match tone {
        MoodTone::Fatigued => {
            "Ты проснулся не потому, что будильник зазвонил. Ты проснулся — потому что внутри тебя ещё жив огонь."
        },
        MoodTone::Steady => "Привычка сильнее настроения. Ты уже прошёл этот путь сотни раз.",
        MoodTone::Eager => "Сегодня твой день! Мир ждёт твоих километров.",
    }
}

/// Day label and bold target distance
pub fn day_line(is_weekend: bool) -> String {
    let (label, distance) = if is_weekend {
        ("воскресенье", WEEKEND_DISTANCE_KM)
    } else {
        ("будний день", WEEKDAY_DISTANCE_KM)
    };
    format!("Сегодня — {label}. Цель: *{distance} км*.")
}

/// Weather line, first matching rule wins
pub fn weather_line(weather: &WeatherReading) -> String {
    let t = weather.temperature;
    if weather.description.contains(RAIN_MARKER) {
        format!("Дождь — не помеха, а союзник. А {t:.1}° — идеально для бега.")
    } else if weather.description.contains(SNOW_MARKER) || t < COLD_THRESHOLD_C {
        "Мороз и снег — твоя стихия. Зима закаляет дух.".to_string()
    } else if t > HEAT_THRESHOLD_C {
        "Жара? Это шанс проверить, насколько ты стоек.".to_string()
    } else {
        format!("Погода идеальна: {}, {t:.1}°.", weather.description)
    }
}

/// Aphorism for a season
pub const fn season_aphorism(season: Season) -> &'static str {
    match season {
        Season::Winter => "Твои следы на снегу — символ стойкости.",
        Season::Spring => "Каждый шаг — часть возрождения.",
        Season::Summer => "Используй энергию лета — выжми максимум!",
        Season::Autumn => "Осень — время сбора урожая усилий.",
    }
}

/// Sunday is the long-run day
pub fn is_weekend(weekday: Weekday) -> bool {
    weekday == Weekday::Sun
}

/// Strip emphasis markers, e.g. before speech synthesis
pub fn plain_text(message: &str) -> String {
    message.replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(t: f64) -> WeatherReading {
        WeatherReading::new(t, "ясно")
    }

    #[test]
    fn fatigued_summer_weekday() {
        let msg = compose_message("плохо", &clear(5.0), Season::Summer, false);
        assert!(msg.starts_with("Ты проснулся не потому"));
        assert!(msg.contains("Сегодня — будний день. Цель: *10 км*."));
        assert!(msg.contains("Погода идеальна: ясно, 5.0°."));
        assert!(msg.contains("Используй энергию лета — выжми максимум!"));
        assert!(msg.ends_with("Обувь завязана? Вперёд!"));
    }

    #[test]
    fn eager_winter_sunday() {
        let msg = compose_message("отлично", &clear(5.0), Season::Winter, true);
        assert!(msg.starts_with("Сегодня твой день! Мир ждёт твоих километров."));
        assert!(msg.contains("Сегодня — воскресенье. Цель: *15 км*."));
        assert!(msg.contains("Твои следы на снегу — символ стойкости."));
    }

    #[test]
    fn steady_opener() {
        let msg = compose_message("нормально", &clear(10.0), Season::Autumn, false);
        assert!(msg.starts_with("Привычка сильнее настроения."));
    }

    #[test]
    fn sections_separated_by_blank_lines() {
        let msg = compose_message("", &clear(10.0), Season::Spring, false);
        assert_eq!(msg.split("\n\n").count(), 5);
    }

    #[test]
    fn rain_line_wins_over_cold_and_heat() {
        let line = weather_line(&WeatherReading::new(-10.0, "сильный дождь"));
        assert_eq!(line, "Дождь — не помеха, а союзник. А -10.0° — идеально для бега.");

        let line = weather_line(&WeatherReading::new(30.0, "дождь"));
        assert!(line.starts_with("Дождь — не помеха"));
    }

    #[test]
    fn snow_selects_frost_line() {
        let line = weather_line(&WeatherReading::new(1.0, "слабый снег"));
        assert_eq!(line, "Мороз и снег — твоя стихия. Зима закаляет дух.");
    }

    #[test]
    fn cold_threshold_is_strict() {
        assert!(weather_line(&clear(-3.1)).starts_with("Мороз и снег"));
        assert_eq!(weather_line(&clear(-3.0)), "Погода идеальна: ясно, -3.0°.");
    }

    #[test]
    fn heat_threshold_is_strict() {
        assert!(weather_line(&clear(25.1)).starts_with("Жара?"));
        assert_eq!(weather_line(&clear(25.0)), "Погода идеальна: ясно, 25.0°.");
    }

    #[test]
    fn unavailable_weather_reads_naturally() {
        let line = weather_line(&WeatherReading::unavailable());
        assert_eq!(line, "Погода идеальна: погода недоступна, 0.0°.");
    }

    #[test]
    fn only_sunday_is_weekend() {
        assert!(is_weekend(Weekday::Sun));
        assert!(!is_weekend(Weekday::Sat));
        assert!(!is_weekend(Weekday::Mon));
    }

    #[test]
    fn plain_text_strips_bold() {
        assert_eq!(plain_text("Цель: *10 км*."), "Цель: 10 км.");
    }

    #[test]
    fn deterministic() {
        let a = compose_message("устал", &clear(12.5), Season::Spring, true);
        let b = compose_message("устал", &clear(12.5), Season::Spring, true);
        assert_eq!(a, b);
    }
}
