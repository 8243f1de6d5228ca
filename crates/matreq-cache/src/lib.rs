//! # Material Requirement Cache
//!
//! 需求計算結果緩存與髒標記失效

pub mod dirty_tracking;
pub mod memo;

// Re-export 主要類型
pub use dirty_tracking::DirtyTracker;
pub use memo::{CacheStats, RequirementCache};
