//! Client-side video upload lifecycle vocabulary.
//!
//! The queue manager that drives these records lives outside this
//! crate; here are the shapes it speaks plus the two classification
//! predicates, with no transition logic.

mod config;
mod types;

pub use config::{
    AnalyticsConfig, CleanupPolicy, PriorityWeights, ProgressTracking, RetryPolicy,
    VideoQueueConfig,
};
pub use types::{
    ChunkProgress, ErrorCategory, ErrorDetails, ProgressDetails, ProgressPhase, QueueAnalytics,
    QueuePriority, TrimMetadata, UploadState, VideoUploadItem,
};
