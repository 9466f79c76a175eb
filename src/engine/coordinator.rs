//! Request Evaluator - orchestrates the endpoint pipelines.
//!
//! Each request runs through its stages in order and stops at the first
//! failing stage. No state is shared between requests.

use rand::Rng;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{ProfileScore, RiskFlag, SecurityScan, MAX_TRACE_LEVEL, MIN_TRACE_LEVEL};
use crate::engine::{obfuscate, score_profile, AccessPolicy, LatencySimulator, RegionInfoClient};
use crate::error::{GatewayError, GatewayResult};

/// Uid reported by profile evaluation when none is supplied.
pub const UNKNOWN_UID: &str = "unknown";

/// Result of a successful player lookup.
#[derive(Debug, Clone)]
pub struct PlayerInfo {
    /// Upstream payload, untouched.
    pub data: Value,
    /// Locally computed scan.
    pub security: SecurityScan,
}

/// Result of a profile evaluation.
#[derive(Debug, Clone)]
pub struct ProfileEvaluation {
    pub uid: String,
    pub score: ProfileScore,
}

/// Snapshot reported by the status endpoint.
#[derive(Debug, Clone)]
pub struct SystemStatus {
    pub status: &'static str,
    /// Percentage formatted as `"<n>%"`.
    pub load: String,
    pub timestamp: String,
}

/// Orchestrates lookups, evaluations and status reports.
pub struct RequestEvaluator {
    policy: Box<dyn AccessPolicy>,
    latency: LatencySimulator,
    upstream: RegionInfoClient,
    load_max_percent: u8,
}

impl RequestEvaluator {
    /// Create a new evaluator with the given components.
    pub fn new(
        policy: Box<dyn AccessPolicy>,
        latency: LatencySimulator,
        upstream: RegionInfoClient,
        load_max_percent: u8,
    ) -> Self {
        Self {
            policy,
            latency,
            upstream,
            load_max_percent: load_max_percent.clamp(1, 100),
        }
    }

    /// Look up a player through the full pipeline.
    ///
    /// Pipeline order:
    /// 1. Presence of uid and region (empty counts as missing)
    /// 2. Uid denylist
    /// 3. Region allowlist
    /// 4. Metrics record and short delay
    /// 5. Local scan
    /// 6. Upstream region info call
    pub async fn lookup_player(
        &self,
        uid: Option<&str>,
        region: Option<&str>,
    ) -> GatewayResult<PlayerInfo> {
        let request_id = Uuid::new_v4();
        let uid = uid.filter(|s| !s.is_empty());
        let region = region.filter(|s| !s.is_empty());

        tracing::info!(
            request_id = %request_id,
            uid = ?uid,
            region = ?region,
            "Incoming player lookup"
        );
        self.latency.simulate_load().await;

        let (Some(uid), Some(region)) = (uid, region) else {
            tracing::debug!(request_id = %request_id, "Lookup rejected: missing parameters");
            return Err(GatewayError::MissingParameters);
        };

        if self.policy.is_blocked(uid) {
            tracing::warn!(request_id = %request_id, uid = %uid, "UID is blocked");
            return Err(GatewayError::UidBlocked);
        }

        if !self.policy.region_allowed(region) {
            tracing::warn!(request_id = %request_id, region = %region, "Invalid region detected");
            return Err(GatewayError::RegionNotSupported);
        }

        tracing::info!(request_id = %request_id, uid = %uid, region = %region, "Tracking request");
        self.latency.metrics_delay().await;

        let security = Self::scan(uid);
        let data = self.upstream.fetch_region_info(uid).await.map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                uid = %uid,
                error = %e,
                "Critical error while fetching player info"
            );
            GatewayError::from(e)
        })?;

        tracing::info!(
            request_id = %request_id,
            uid = %uid,
            trace_level = security.trace_level,
            "Player lookup complete"
        );

        Ok(PlayerInfo { data, security })
    }

    /// Score a profile; a missing uid is evaluated as [`UNKNOWN_UID`].
    pub async fn evaluate_profile(&self, uid: Option<&str>) -> ProfileEvaluation {
        let uid = uid.unwrap_or(UNKNOWN_UID).to_string();
        self.latency.simulate_load().await;

        let score = score_profile(&uid);
        tracing::info!(
            uid = %uid,
            integrity_score = score.integrity_score,
            status = %score.status,
            "Profile evaluated"
        );

        ProfileEvaluation { uid, score }
    }

    /// Report service status with a simulated load figure.
    pub fn system_status(&self) -> SystemStatus {
        let load = rand::thread_rng().gen_range(1..=self.load_max_percent);

        SystemStatus {
            status: "online",
            load: format!("{load}%"),
            timestamp: chrono::Local::now()
                .format("%a %b %e %H:%M:%S %Y")
                .to_string(),
        }
    }

    fn scan(uid: &str) -> SecurityScan {
        SecurityScan {
            obfuscated_uid: obfuscate(uid),
            risk_flag: RiskFlag::None,
            trace_level: rand::thread_rng().gen_range(MIN_TRACE_LEVEL..=MAX_TRACE_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use crate::domain::ProfileStatus;
    use crate::engine::{deobfuscate, ListAccessPolicy};
    use crate::logging;
    use crate::test_support::{spawn_upstream, unreachable_base_url, upstream_config, GARBLED_UID};

    fn make_evaluator(base_url: &str) -> RequestEvaluator {
        make_evaluator_with_load(base_url, 10)
    }

    fn make_evaluator_with_load(base_url: &str, load_max_percent: u8) -> RequestEvaluator {
        logging::init_test();
        RequestEvaluator::new(
            Box::new(ListAccessPolicy::new(&PolicyConfig::default())),
            LatencySimulator::disabled(),
            RegionInfoClient::new(&upstream_config(base_url)).unwrap(),
            load_max_percent,
        )
    }

    #[tokio::test]
    async fn test_missing_parameters() {
        let evaluator = make_evaluator(&unreachable_base_url().await);

        for (uid, region) in [
            (None, None),
            (Some("abc"), None),
            (None, Some("IND")),
            (Some(""), Some("IND")),
            (Some("abc"), Some("")),
        ] {
            let result = evaluator.lookup_player(uid, region).await;
            assert!(
                matches!(result, Err(GatewayError::MissingParameters)),
                "uid={uid:?} region={region:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_presence_checked_before_blocklist() {
        let evaluator = make_evaluator(&unreachable_base_url().await);
        let result = evaluator.lookup_player(Some("123456"), None).await;
        assert!(matches!(result, Err(GatewayError::MissingParameters)));
    }

    #[tokio::test]
    async fn test_blocklist_checked_before_region() {
        let evaluator = make_evaluator(&unreachable_base_url().await);

        let result = evaluator.lookup_player(Some("123456"), Some("IND")).await;
        assert!(matches!(result, Err(GatewayError::UidBlocked)));

        let result = evaluator.lookup_player(Some("000000"), Some("US")).await;
        assert!(matches!(result, Err(GatewayError::UidBlocked)));
    }

    #[tokio::test]
    async fn test_region_not_supported() {
        let evaluator = make_evaluator(&unreachable_base_url().await);
        let result = evaluator.lookup_player(Some("abc"), Some("US")).await;
        assert!(matches!(result, Err(GatewayError::RegionNotSupported)));
    }

    #[tokio::test]
    async fn test_successful_lookup() {
        let evaluator = make_evaluator(&spawn_upstream().await);

        let info = evaluator
            .lookup_player(Some("abc"), Some("ind"))
            .await
            .unwrap();

        assert_eq!(info.data["uid"], "abc");
        assert_eq!(info.data["nickname"], "TestPlayer");
        assert_eq!(info.security.obfuscated_uid, "AES256::jJWY");
        assert_eq!(deobfuscate(&info.security.obfuscated_uid).unwrap(), "abc");
        assert_eq!(info.security.risk_flag, RiskFlag::None);
        assert!((1..=5).contains(&info.security.trace_level));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let evaluator = make_evaluator(&unreachable_base_url().await);
        let result = evaluator.lookup_player(Some("abc"), Some("IND")).await;
        assert!(matches!(result, Err(GatewayError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_non_json_upstream_failure() {
        let evaluator = make_evaluator(&spawn_upstream().await);
        let result = evaluator.lookup_player(Some(GARBLED_UID), Some("PRINCE")).await;
        assert!(matches!(result, Err(GatewayError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_evaluate_profile_defaults_to_unknown() {
        let evaluator = make_evaluator(&unreachable_base_url().await);

        let evaluation = evaluator.evaluate_profile(None).await;
        assert_eq!(evaluation.uid, "unknown");
        assert_eq!(evaluation.score.integrity_score, 84);
        assert_eq!(evaluation.score.status, ProfileStatus::Verified);
    }

    #[tokio::test]
    async fn test_evaluate_profile_with_uid() {
        let evaluator = make_evaluator(&unreachable_base_url().await);

        let evaluation = evaluator.evaluate_profile(Some("123456")).await;
        assert_eq!(evaluation.uid, "123456");
        assert_eq!(evaluation.score, score_profile("123456"));
    }

    #[tokio::test]
    async fn test_system_status_load_range() {
        let evaluator = make_evaluator(&unreachable_base_url().await);

        for _ in 0..100 {
            let status = evaluator.system_status();
            assert_eq!(status.status, "online");
            let percent: u8 = status.load.trim_end_matches('%').parse().unwrap();
            assert!(status.load.ends_with('%'));
            assert!((1..=10).contains(&percent));
            assert!(!status.timestamp.is_empty());
        }
    }

    #[tokio::test]
    async fn test_system_status_load_is_clamped() {
        let base_url = unreachable_base_url().await;

        let evaluator = make_evaluator_with_load(&base_url, 250);
        for _ in 0..500 {
            let status = evaluator.system_status();
            let percent: u8 = status.load.trim_end_matches('%').parse().unwrap();
            assert!((1..=100).contains(&percent), "load {}", status.load);
        }

        let evaluator = make_evaluator_with_load(&base_url, 0);
        assert_eq!(evaluator.system_status().load, "1%");
    }
}
