use rand::Rng;

/// Weather condition over the haunted town
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Foggy,
    Stormy,
    Cloudy,
    Moonlit,
    Haunted,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Foggy,
        WeatherCondition::Stormy,
        WeatherCondition::Cloudy,
        WeatherCondition::Moonlit,
        WeatherCondition::Haunted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Stormy => "Stormy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Moonlit => "Moonlit",
            WeatherCondition::Haunted => "Haunted",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeatherCondition::Foggy => "Dense fog rolls through the streets...",
            WeatherCondition::Stormy => "Thunder echoes from the beyond...",
            WeatherCondition::Cloudy => "Dark clouds gather ominously...",
            WeatherCondition::Moonlit => "The pale moon watches over all...",
            WeatherCondition::Haunted => "Spirits stir in the air...",
        }
    }
}

/// Phase of the moon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    Waxing,
    Full,
    Waning,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::New,
        MoonPhase::Waxing,
        MoonPhase::Full,
        MoonPhase::Waning,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::Waxing => "Waxing",
            MoonPhase::Full => "Full Moon",
            MoonPhase::Waning => "Waning",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MoonPhase::New => "●",
            MoonPhase::Waxing => "◑",
            MoonPhase::Full => "○",
            MoonPhase::Waning => "◐",
        }
    }
}

/// Temperature range in °C, half-open
pub const TEMPERATURE_RANGE: std::ops::Range<i32> = 5..20;
/// Humidity range in percent, half-open
pub const HUMIDITY_RANGE: std::ops::Range<u8> = 60..100;
/// Wind speed range in km/h, half-open
pub const WIND_SPEED_RANGE: std::ops::Range<u8> = 5..35;

/// A weather reading. Always replaced wholesale, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherData {
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub moon_phase: MoonPhase,
    pub humidity: u8,
    pub wind_speed: u8,
}

impl WeatherData {
    /// Draw every field independently and uniformly
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature: rng.gen_range(TEMPERATURE_RANGE),
            condition: WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())],
            moon_phase: MoonPhase::ALL[rng.gen_range(0..MoonPhase::ALL.len())],
            humidity: rng.gen_range(HUMIDITY_RANGE),
            wind_speed: rng.gen_range(WIND_SPEED_RANGE),
        }
    }
}
