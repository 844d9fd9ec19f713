//! Weather service port
//!
//! Defines the interface for current-conditions retrieval.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, Timezone, WeatherReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current temperature and condition description for a location
    ///
    /// # Arguments
    /// * `location` - Geographic location
    /// * `timezone` - Zone the provider should report local time in
    async fn current_weather(
        &self,
        location: &GeoLocation,
        timezone: &Timezone,
    ) -> Result<WeatherReading, ApplicationError>;

    /// Check if the weather service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
