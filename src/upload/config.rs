//! Upload queue tunables.
//!
//! These are parameters for the external queue implementation; this
//! crate only fixes their shape and defaults.

use serde::{Deserialize, Serialize};

/// Exponential backoff policy for failed uploads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    pub jitter_enabled: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
            backoff_multiplier: 2.0,
            jitter_enabled: true,
        }
    }
}

/// How many finished items to keep around, and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupPolicy {
    pub max_completed_items: u32,
    pub max_failed_items: u32,
    pub auto_cleanup_after_ms: u64,
}

impl Default for CleanupPolicy {
    fn default() -> Self {
        Self {
            max_completed_items: 5,
            max_failed_items: 3,
            auto_cleanup_after_ms: 5 * 60 * 1000,
        }
    }
}

/// Scheduling weight per priority class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub urgent: u32,
    pub high: u32,
    pub normal: u32,
    pub low: u32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            urgent: 1_000,
            high: 100,
            normal: 10,
            low: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    pub enabled: bool,
    /// Fraction of operations to track, 0..=1.
    pub sample_rate: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_rate: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressTracking {
    pub enable_speed_calculation: bool,
    pub speed_sample_window_ms: u64,
    pub enable_time_estimation: bool,
}

impl Default for ProgressTracking {
    fn default() -> Self {
        Self {
            enable_speed_calculation: true,
            speed_sample_window_ms: 5_000,
            enable_time_estimation: true,
        }
    }
}

/// Full queue configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoQueueConfig {
    pub max_concurrent: u32,
    pub capture_thumbnail: bool,
    pub auto_start: bool,
    pub max_queue_size: u32,
    pub cleanup_policy: CleanupPolicy,
    pub priority_weights: PriorityWeights,
    pub analytics: AnalyticsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_policy: Option<RetryPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_tracking: Option<ProgressTracking>,
}

impl Default for VideoQueueConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 2,
            capture_thumbnail: true,
            auto_start: false,
            max_queue_size: 20,
            cleanup_policy: CleanupPolicy::default(),
            priority_weights: PriorityWeights::default(),
            analytics: AnalyticsConfig::default(),
            retry_policy: Some(RetryPolicy::default()),
            progress_tracking: Some(ProgressTracking::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay_ms, 1_000);
        assert_eq!(policy.max_delay_ms, 30_000);
        assert_eq!(policy.backoff_multiplier, 2.0);
        assert!(policy.jitter_enabled);
    }

    #[test]
    fn test_default_queue_config() {
        let config = VideoQueueConfig::default();
        assert_eq!(config.max_concurrent, 2);
        assert!(config.capture_thumbnail);
        assert!(!config.auto_start);
        assert_eq!(config.max_queue_size, 20);
        assert_eq!(config.cleanup_policy.auto_cleanup_after_ms, 300_000);
        assert_eq!(config.priority_weights.urgent, 1_000);
        assert_eq!(config.analytics.sample_rate, 0.1);
        assert_eq!(config.retry_policy, Some(RetryPolicy::default()));
    }

    #[test]
    fn test_config_wire_shape() {
        let rendered = serde_json::to_value(VideoQueueConfig::default()).unwrap();
        assert_eq!(rendered["maxConcurrent"], 2);
        assert_eq!(rendered["cleanupPolicy"]["maxCompletedItems"], 5);
        assert_eq!(rendered["priorityWeights"]["normal"], 10);
        assert_eq!(rendered["retryPolicy"]["jitterEnabled"], true);
        assert_eq!(rendered["progressTracking"]["speedSampleWindowMs"], 5000);
    }
}
