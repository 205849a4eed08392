//! Views fed by the exploration engine
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod heatmap_view;
pub mod history_log;

pub use self::heatmap_view::{
    rasterize, ramp_color, HeatmapDataSource, HeatmapTexture, HeatmapView, HeatmapViewConfig,
};
pub use self::history_log::{HistoryLog, LogEntry, DEFAULT_LOG_CAPACITY};
