use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub booking: BookingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let booking = BookingConfig::from_env()?;
        Ok(Self { database, booking })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Booking knobs. Windows align on a finer grid than the slots cut
/// from them, so the two granularities are separate settings.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Length of one bookable slot, in minutes.
    pub slot_minutes: u32,
    /// Schedule window durations must be a multiple of this.
    pub window_align_minutes: u32,
    /// Minimum schedule window duration, in minutes.
    pub min_window_minutes: u32,
    /// Fixed length of the extra-time addon, in minutes.
    pub extra_time_minutes: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 60,
            window_align_minutes: 30,
            min_window_minutes: 60,
            extra_time_minutes: 30,
        }
    }
}

impl BookingConfig {
    fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            slot_minutes: env_or("BOOKING_SLOT_MINUTES", defaults.slot_minutes)?,
            window_align_minutes: env_or(
                "BOOKING_WINDOW_ALIGN_MINUTES",
                defaults.window_align_minutes,
            )?,
            min_window_minutes: env_or("BOOKING_MIN_WINDOW_MINUTES", defaults.min_window_minutes)?,
            extra_time_minutes: env_or("BOOKING_EXTRA_TIME_MINUTES", defaults.extra_time_minutes)?,
        })
    }
}

fn env_or(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(raw) => Ok(raw.parse()?),
        Err(_) => Ok(default),
    }
}
