use serde::{Deserialize, Serialize};

/// Configuration for a [`FrameScheduler`](crate::FrameScheduler) and the drivers it hands out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Speed used by interpolations that don't call `with_speed` (default: 1.0).
    pub default_speed: f32,
    /// Multiplier applied to every frame delta before tasks see it (default: 1.0).
    pub time_scale: f32,
    /// Upper bound for a single frame delta in seconds, applied before `time_scale`.
    /// `None` (default) passes host deltas through unchanged.
    pub max_delta: Option<f32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            time_scale: 1.0,
            max_delta: None,
        }
    }
}

impl DriverConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_default_speed(mut self, speed: f32) -> Self {
        self.default_speed = speed;
        self
    }

    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = Some(max_delta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let json = r#"{ "time_scale": 0.5, "max_delta": 0.25 }"#;
        let config = DriverConfig::from_json(json).unwrap();
        assert_eq!(config.time_scale, 0.5);
        assert_eq!(config.max_delta, Some(0.25));
        assert_eq!(config.default_speed, 1.0);
    }

    #[test]
    fn parse_empty_config() {
        let config = DriverConfig::from_json("{}").unwrap();
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn reject_malformed_config() {
        assert!(DriverConfig::from_json(r#"{ "time_scale": "fast" }"#).is_err());
    }
}
