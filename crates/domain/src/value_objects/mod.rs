//! Value Objects - Immutable, identity-less domain primitives

mod chat_id;
mod daily_time;
mod geo_location;
mod mood_tone;
mod season;
mod timezone;
mod weather_reading;

pub use chat_id::ChatId;
pub use daily_time::DailyTime;
pub use geo_location::GeoLocation;
pub use mood_tone::MoodTone;
pub use season::Season;
pub use timezone::Timezone;
pub use weather_reading::WeatherReading;
