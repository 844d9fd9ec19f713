//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, Timezone, WeatherReading};
use integration_weather::{
    CurrentConditions, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Unreadable weather response: {e}"))
            },
            WeatherError::InvalidCoordinates => {
                ApplicationError::Configuration("Invalid coordinates".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert provider conditions to the reading the composer consumes
    fn map_current(current: &CurrentConditions) -> WeatherReading {
        WeatherReading::new(current.temperature, current.description())
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather(
        &self,
        location: &GeoLocation,
        timezone: &Timezone,
    ) -> Result<WeatherReading, ApplicationError> {
        let result = self
            .client
            .get_current(location.latitude(), location.longitude(), timezone.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    weather_code = current.weather_code,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(|c| Self::map_current(&c))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_creates_adapter() {
        assert!(WeatherAdapter::with_config(WeatherConfig::default()).is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::default()).unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("WeatherAdapter"));
    }

    #[test]
    fn map_current_uses_condition_description() {
        let current = CurrentConditions::new(7.5, 61);
        let reading = WeatherAdapter::map_current(&current);
        assert!((reading.temperature - 7.5).abs() < f64::EPSILON);
        assert!(reading.description.contains("дождь"));
    }

    #[test]
    fn map_error_connection_failed() {
        let err = WeatherError::ConnectionFailed("refused".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_parse_error_is_external() {
        let err = WeatherError::ParseError("missing field".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_rate_limited() {
        let err = WeatherError::RateLimitExceeded;
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_invalid_coords() {
        let err = WeatherError::InvalidCoordinates;
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
