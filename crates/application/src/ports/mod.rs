//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod clock_port;
mod messenger_port;
mod scheduler_port;
mod speech_port;
mod weather_port;

#[cfg(test)]
pub use clock_port::MockClockPort;
pub use clock_port::ClockPort;
#[cfg(test)]
pub use messenger_port::MockMessengerPort;
pub use messenger_port::MessengerPort;
#[cfg(test)]
pub use scheduler_port::MockSchedulerPort;
pub use scheduler_port::SchedulerPort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
pub use speech_port::{SpeechPort, SynthesizedSpeech};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
