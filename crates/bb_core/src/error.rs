use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("plate appearances must be positive")]
    NoPlateAppearances,

    #[error("outcome counts sum to {sum}, expected {plate_appearances} plate appearances")]
    FrequencySumMismatch { sum: u32, plate_appearances: u32 },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },

    #[error("double-play and productive-out ratios sum to {sum}, exceeding 1")]
    RatioBandsOverlap { sum: f64 },

    #[error("lineup must contain at least one batter")]
    EmptyLineup,

    #[error("draw {draw} of {plate_appearances} escaped the outcome table; counts are corrupted")]
    OutcomeTableExhausted { draw: u32, plate_appearances: u32 },

    #[error("game still tied after {max_innings} innings")]
    InningLimitReached { max_innings: u32 },

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("unsupported schema version {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("request parse error: {0}")]
    Request(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
