use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use std::{sync::LazyLock, time::Instant};

pub const COUNT_UP_DELAY: Duration = Duration::from_millis(500);
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(2000);
pub const COUNT_UP_STEPS: u32 = 60;

#[cfg(feature = "ssr")]
pub const STATS_ENDPOINT: &str = "https://leetcode-stats-api.herokuapp.com";
#[cfg(feature = "ssr")]
const STATS_TTL: Duration = Duration::from_secs(600);
#[cfg(feature = "ssr")]
const STATS_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(feature = "ssr")]
static LIVE_STATS_CACHE: LazyLock<DashMap<String, (Instant, LeetCodeStats)>> =
    LazyLock::new(DashMap::new);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeetCodeStats {
    pub total_solved: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub ranking: u32,
    pub acceptance_rate: f64,
}

impl LeetCodeStats {
    /// Shown whenever the live numbers can't be fetched.
    pub const FALLBACK: Self = Self {
        total_solved: 150,
        easy: 75,
        medium: 60,
        hard: 15,
        ranking: 245_832,
        acceptance_rate: 65.4,
    };

    /// Every figure floored to `progress` of its value; acceptance keeps one decimal.
    pub fn scaled(&self, progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let scale = |v: u32| (v as f64 * p).floor() as u32;
        Self {
            total_solved: scale(self.total_solved),
            easy: scale(self.easy),
            medium: scale(self.medium),
            hard: scale(self.hard),
            ranking: scale(self.ranking),
            acceptance_rate: (self.acceptance_rate * p * 10.0).floor() / 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub stats: LeetCodeStats,
    pub source: StatsSource,
}

impl StatsReport {
    pub fn live(stats: LeetCodeStats) -> Self {
        Self {
            stats,
            source: StatsSource::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            stats: LeetCodeStats::FALLBACK,
            source: StatsSource::Fallback,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Couldn't reach the stats service: {0}")]
    Request(String),
    #[error("Stats service answered with status {0}")]
    Status(u16),
    #[error("Couldn't parse stats response: {0}")]
    Body(String),
    #[error("Stats service error: {0}")]
    Upstream(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Approximate size of the problem set at this difficulty.
    pub fn total(self) -> u32 {
        match self {
            Self::Easy => 800,
            Self::Medium => 1600,
            Self::Hard => 700,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Easy => "bg-green-500",
            Self::Medium => "bg-yellow-500",
            Self::Hard => "bg-red-500",
        }
    }

    pub fn solved(self, stats: &LeetCodeStats) -> u32 {
        match self {
            Self::Easy => stats.easy,
            Self::Medium => stats.medium,
            Self::Hard => stats.hard,
        }
    }

    /// Bar width in percent, capped at 100.
    pub fn bar_width(self, stats: &LeetCodeStats) -> f64 {
        (self.solved(stats) as f64 / self.total() as f64 * 100.0).min(100.0)
    }

    pub fn percent_completed(self, stats: &LeetCodeStats) -> u32 {
        (self.solved(stats) as f64 / self.total() as f64 * 100.0).round() as u32
    }
}

/// `245832` -> `245,832`
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Step-wise count-up from zero to a target over [`COUNT_UP_STEPS`] frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: LeetCodeStats,
    step: u32,
}

impl CountUp {
    pub fn new(target: LeetCodeStats) -> Self {
        Self { target, step: 0 }
    }

    pub fn interval() -> Duration {
        COUNT_UP_DURATION / COUNT_UP_STEPS
    }

    pub fn is_done(&self) -> bool {
        self.step >= COUNT_UP_STEPS
    }

    pub fn advance(&mut self) -> LeetCodeStats {
        self.step = (self.step + 1).min(COUNT_UP_STEPS);
        if self.is_done() {
            self.target
        } else {
            self.target
                .scaled(self.step as f64 / COUNT_UP_STEPS as f64)
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Rate {
    Number(f64),
    Text(String),
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct UpstreamStats {
    status: Option<String>,
    message: Option<String>,
    total_solved: Option<u32>,
    easy_solved: Option<u32>,
    medium_solved: Option<u32>,
    hard_solved: Option<u32>,
    ranking: Option<u32>,
    acceptance_rate: Option<Rate>,
}

/// Parse the stats service body; missing figures count as zero.
pub fn parse_upstream(body: &str) -> Result<LeetCodeStats, StatsError> {
    let raw: UpstreamStats =
        serde_json::from_str(body).map_err(|e| StatsError::Body(e.to_string()))?;
    if raw.status.as_deref() == Some("error") {
        return Err(StatsError::Upstream(
            raw.message.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }
    let acceptance_rate = match raw.acceptance_rate {
        Some(Rate::Number(n)) => n,
        Some(Rate::Text(s)) => s.trim().trim_end_matches('%').parse().unwrap_or(0.0),
        None => 0.0,
    };
    Ok(LeetCodeStats {
        total_solved: raw.total_solved.unwrap_or_default(),
        easy: raw.easy_solved.unwrap_or_default(),
        medium: raw.medium_solved.unwrap_or_default(),
        hard: raw.hard_solved.unwrap_or_default(),
        ranking: raw.ranking.unwrap_or_default(),
        acceptance_rate,
    })
}

#[cfg(feature = "ssr")]
pub async fn fetch_stats(
    client: &reqwest::Client,
    username: &str,
) -> Result<LeetCodeStats, StatsError> {
    let url = format!("{STATS_ENDPOINT}/{username}");
    let res = client
        .get(&url)
        .timeout(STATS_TIMEOUT)
        .send()
        .await
        .map_err(|e| StatsError::Request(e.to_string()))?;
    if !res.status().is_success() {
        return Err(StatsError::Status(res.status().as_u16()));
    }
    let body = res
        .text()
        .await
        .map_err(|e| StatsError::Body(e.to_string()))?;
    parse_upstream(&body)
}

/// Live stats when the service answers, the fallback snapshot otherwise.
#[cfg(feature = "ssr")]
pub async fn stats_report(username: &str) -> StatsReport {
    let cache = &*LIVE_STATS_CACHE;
    if let Some(entry) = cache.get(username) {
        let (fetched_at, stats) = *entry;
        if fetched_at.elapsed() < STATS_TTL {
            return StatsReport::live(stats);
        }
    }

    match fetch_stats(&crate::HTTP_CLIENT, username).await {
        Ok(stats) => {
            tracing::debug!(username, total = stats.total_solved, "fetched LeetCode stats");
            cache.insert(username.to_string(), (Instant::now(), stats));
            StatsReport::live(stats)
        }
        Err(e) => {
            tracing::warn!(username, error = %e, "using fallback LeetCode stats");
            StatsReport::fallback()
        }
    }
}
