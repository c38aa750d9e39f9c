use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Decelerating curves available to the scroll animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    SineOut,
    QuadOut,
    #[default]
    CubicOut,
    QuartOut,
    ExpoOut,
}

impl Easing {
    pub const ALL: [Easing; 5] = [
        Easing::SineOut,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::QuartOut,
        Easing::ExpoOut,
    ];

    /// Map normalized time `t` in [0, 1] to progress in [0, 1].
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::SineOut => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::QuadOut => 1.0 - (1.0 - t).powi(2),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::QuartOut => 1.0 - (1.0 - t).powi(4),
            // Normalized so t = 1 lands exactly on 1 without a final jump
            Self::ExpoOut => (1.0 - (2.0_f64).powf(-10.0 * t)) / (1.0 - (2.0_f64).powi(-10)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SineOut => "sine-out",
            Self::QuadOut => "quad-out",
            Self::CubicOut => "cubic-out",
            Self::QuartOut => "quart-out",
            Self::ExpoOut => "expo-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an easing name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown easing `{0}`")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    /// Accepts our kebab names plus the `powerN.out` spellings page authors
    /// copy from animation-library docs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        if let Some(e) = Self::ALL.into_iter().find(|e| e.name() == norm) {
            return Ok(e);
        }
        match norm.as_str() {
            "sine.out" | "ease-out-sine" => Ok(Self::SineOut),
            "quad.out" | "power1.out" | "ease-out-quad" | "ease-out" => Ok(Self::QuadOut),
            "cubic.out" | "power2.out" | "ease-out-cubic" => Ok(Self::CubicOut),
            "quart.out" | "power3.out" | "ease-out-quart" => Ok(Self::QuartOut),
            "expo.out" | "ease-out-expo" => Ok(Self::ExpoOut),
            _ => Err(UnknownEasing(s.to_string())),
        }
    }
}
