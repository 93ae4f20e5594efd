//! Record types shown by the admin browser.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Date of last activity (YYYY-MM-DD)
    pub last_active: String,
    /// Number of queries issued
    pub queries: u32,
    pub status: UserStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Indexed,
    Processing,
    Failed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Indexed => "indexed",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: u32,
    pub name: String,
    /// Human readable size ("2.4 MB")
    pub size: String,
    pub uploaded: String,
    pub status: DocumentStatus,
    /// Number of chunks in the vector store
    pub chunks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Success,
    Error,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Success => "success",
            QueryStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub id: u32,
    /// Email of the user who asked
    pub user: String,
    pub query: String,
    pub timestamp: String,
    pub status: QueryStatus,
}

/// Headline numbers for the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_queries: u64,
    pub documents_indexed: u64,
    pub average_response_time: String,
    /// Month-over-month trends in percent, in card order
    pub trends: [Option<i32>; 4],
}

impl DashboardStats {
    /// Cards in display order
    pub fn cards(&self) -> Vec<StatCard> {
        let [users, queries, documents, response] = self.trends;
        vec![
            StatCard {
                title: "Total Users",
                value: format_count(self.total_users),
                trend: users,
            },
            StatCard {
                title: "Total Queries",
                value: format_count(self.total_queries),
                trend: queries,
            },
            StatCard {
                title: "Documents Indexed",
                value: self.documents_indexed.to_string(),
                trend: documents,
            },
            StatCard {
                title: "Avg Response Time",
                value: self.average_response_time.clone(),
                trend: response,
            },
        ]
    }
}

/// One stat card: title, formatted value and month-over-month trend in percent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub trend: Option<i32>,
}

impl StatCard {
    /// Trend formatted as "+12% from last month"
    pub fn trend_label(&self) -> Option<String> {
        self.trend.map(|t| {
            let sign = if t > 0 { "+" } else { "" };
            format!("{}{}% from last month", sign, t)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Operational,
    Degraded,
    Down,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Health::Operational => "Operational",
            Health::Degraded => "Degraded",
            Health::Down => "Down",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: String,
    pub health: Health,
}

/// Format a count with thousands separators ("15634" -> "15,634")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
