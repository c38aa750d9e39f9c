use thiserror::Error;

/// Configuration problems detected while building a navigator.
///
/// Out-of-range navigation requests and scroll positions that miss every
/// panel are not errors; they are clamped or ignored where they occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("panel set is empty")]
    EmptyPanelSet,
    #[error("panel {index} has non-finite geometry (offset {offset}, width {width})")]
    NonFiniteGeometry { index: usize, offset: f64, width: f64 },
    #[error("panel {index} has non-positive width {width}")]
    NonPositiveWidth { index: usize, width: f64 },
    #[error("panel {index} starts at {offset}, before the previous panel at {previous}")]
    OffsetOutOfOrder {
        index: usize,
        offset: f64,
        previous: f64,
    },
    #[error("unknown config key `{0}`")]
    UnknownConfigKey(String),
    #[error("invalid value `{value}` for config key `{key}`")]
    InvalidConfigValue { key: String, value: String },
}
