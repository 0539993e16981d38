//! Core data types for the admin dashboard

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Login form input
///
/// Created per attempt and dropped after submission.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials from form input
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Whether both fields carry something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Current authentication state
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    authenticated: bool,
}

impl Session {
    /// A session with no credential attached
    pub const fn anonymous() -> Self {
        Self {
            token: None,
            authenticated: false,
        }
    }

    /// A session holding a server-issued token
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            authenticated: true,
        }
    }

    /// The bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a login has succeeded and not been invalidated since
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

/// Aggregate user counts returned by `GET /users/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    /// Every registered user
    pub total_users: u64,
    /// Users with the CLIENT role
    pub client_count: u64,
    /// Users with the USER role
    pub user_count: u64,
    /// Users whose account is active
    pub active_users: u64,
    /// Users whose account is inactive
    pub inactive_users: u64,
}

/// Pie chart slice category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartCategory {
    /// `totalUsers`
    #[serde(rename = "total")]
    Total,
    /// `clientCount`
    #[serde(rename = "client")]
    Client,
    /// `userCount`
    #[serde(rename = "userCount")]
    UserCount,
    /// `activeUsers`
    #[serde(rename = "active")]
    Active,
    /// `inactiveUsers`
    #[serde(rename = "inactive")]
    Inactive,
}

impl ChartCategory {
    /// Every category in chart order
    pub const ALL: [Self; 5] = [
        Self::Total,
        Self::Client,
        Self::UserCount,
        Self::Active,
        Self::Inactive,
    ];

    /// Stable key used as the series name
    pub const fn key(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Client => "client",
            Self::UserCount => "userCount",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Legend label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Client => "Client",
            Self::UserCount => "UserCount",
            Self::Active => "Active",
            Self::Inactive => "InActive",
        }
    }

    /// Fill color
    pub const fn color(self) -> &'static str {
        match self {
            Self::Total => "#9c3bf6",
            Self::Client => "#10B981",
            Self::UserCount => "#F59E0B",
            Self::Active => "#3B82F6",
            Self::Inactive => "#EF4444",
        }
    }

    /// The statistics field this category reads
    pub const fn value_in(self, stats: &UserStatistics) -> u64 {
        match self {
            Self::Total => stats.total_users,
            Self::Client => stats.client_count,
            Self::UserCount => stats.user_count,
            Self::Active => stats.active_users,
            Self::Inactive => stats.inactive_users,
        }
    }
}

impl fmt::Display for ChartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One chart-ready data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    /// Slice category
    pub category: ChartCategory,
    /// Count for the category
    pub value: u64,
    /// Fill color
    pub color_token: &'static str,
}

/// Derive the fixed five-slice chart data from a statistics payload
pub fn chart_records(stats: &UserStatistics) -> [ChartRecord; 5] {
    ChartCategory::ALL.map(|category| ChartRecord {
        category,
        value: category.value_in(stats),
        color_token: category.color(),
    })
}

/// Angular extent of one slice, in radians clockwise from twelve o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    /// Source record
    pub record: ChartRecord,
    /// Start angle
    pub start: f64,
    /// End angle
    pub end: f64,
}

impl PieSlice {
    /// Fraction of the full circle covered by this slice
    pub fn fraction(&self) -> f64 {
        (self.end - self.start) / TAU
    }

    /// SVG path for this slice of a circle centred at (`cx`, `cy`)
    pub fn svg_path(&self, cx: f64, cy: f64, radius: f64) -> String {
        let point = |angle: f64| (cx + radius * angle.sin(), cy - radius * angle.cos());

        // A lone slice is a full circle, which a single arc cannot draw.
        if self.fraction() >= 1.0 - f64::EPSILON {
            let top = cy - radius;
            let bottom = cy + radius;
            return format!(
                "M {cx:.3} {top:.3} A {radius:.3} {radius:.3} 0 1 1 {cx:.3} {bottom:.3} \
                 A {radius:.3} {radius:.3} 0 1 1 {cx:.3} {top:.3} Z"
            );
        }

        let (x0, y0) = point(self.start);
        let (x1, y1) = point(self.end);
        let large_arc = u8::from(self.end - self.start > std::f64::consts::PI);
        format!(
            "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {radius:.3} {radius:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
        )
    }
}

/// Lay records out around a circle proportionally to their values
///
/// Zero-valued records get no slice. An all-zero input yields no slices.
#[allow(clippy::cast_precision_loss)]
pub fn pie_slices(records: &[ChartRecord]) -> Vec<PieSlice> {
    let total: u128 = records.iter().map(|r| u128::from(r.value)).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    records
        .iter()
        .filter(|r| r.value > 0)
        .map(|record| {
            let end = start + TAU * (record.value as f64 / total as f64);
            let slice = PieSlice {
                record: *record,
                start,
                end,
            };
            start = end;
            slice
        })
        .collect()
}

/// The `{ "data": ... }` wrapper the remote API puts around every payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Wrapped payload
    pub data: T,
}
