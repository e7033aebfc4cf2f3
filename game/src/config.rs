use std::sync::LazyLock;

use serde::Deserialize;

const TUNING_JSON: &str = include_str!("../../assets/tuning.json");

macro_rules! warn_err {
    ($expr:expr, $($arg:tt)+) => {
        $expr.map_err(|e| log::warn!($($arg)+, e)).ok()
    };
}

/// Gameplay constants. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Tuning {
    pub(crate) radius: f32,
    pub(crate) line_width: f32,
    /// Start and end angle in degrees of the open-mouth arc.
    pub(crate) open_mouth: [f32; 2],
    /// Start and end angle in degrees of the closed-mouth arc.
    pub(crate) closed_mouth: [f32; 2],
    /// Seconds between mouth toggles.
    pub(crate) chomp_interval: f64,
    /// Distance covered per movement step.
    pub(crate) step_distance: f32,
    /// Seconds per movement step.
    pub(crate) step_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            radius: 15.0,
            line_width: 2.0,
            open_mouth: [35.0, 315.0],
            closed_mouth: [1.0, 359.0],
            chomp_interval: 0.25,
            step_distance: 25.0,
            step_duration: 0.1,
        }
    }
}

static TUNING: LazyLock<Tuning> = LazyLock::new(|| Tuning::parse(TUNING_JSON));

impl Tuning {
    /// The tuning embedded in the binary.
    pub(crate) fn load() -> &'static Tuning {
        &TUNING
    }

    pub(crate) fn parse(json: &str) -> Self {
        warn_err!(
            serde_json::from_str::<Tuning>(json),
            "Failed to parse tuning: {}"
        )
        .unwrap_or_default()
    }

    /// Movement speed in distance units per second.
    pub(crate) fn speed(&self) -> f32 {
        self.step_distance / self.step_duration
    }
}
