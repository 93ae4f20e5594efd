//! Data access for the admin browser.
//!
//! `ResourceSource` is the seam where a real backend would plug in.
//! `MockDataset` serves the fixed in-memory rows the console ships with.

use crate::admin::records::{
    DashboardStats, DocumentRecord, DocumentStatus, Health, QueryRecord, QueryStatus,
    ServiceStatus, UserRecord, UserRole, UserStatus,
};

/// Provides the rows each section renders
pub trait ResourceSource: Send + Sync {
    fn users(&self) -> &[UserRecord];
    fn documents(&self) -> &[DocumentRecord];
    fn queries(&self) -> &[QueryRecord];
    fn dashboard_stats(&self) -> &DashboardStats;
    fn service_status(&self) -> &[ServiceStatus];
}

/// Static in-memory dataset
#[derive(Debug, Clone)]
pub struct MockDataset {
    users: Vec<UserRecord>,
    documents: Vec<DocumentRecord>,
    queries: Vec<QueryRecord>,
    stats: DashboardStats,
    services: Vec<ServiceStatus>,
}

impl MockDataset {
    pub fn new() -> Self {
        Self {
            users: vec![
                user(1, "John Doe", "john@example.com", UserRole::User, "2025-01-27", 45, UserStatus::Active),
                user(2, "Sarah Smith", "sarah@example.com", UserRole::Admin, "2025-01-27", 128, UserStatus::Active),
                user(3, "Mike Johnson", "mike@example.com", UserRole::User, "2025-01-26", 23, UserStatus::Inactive),
                user(4, "Lisa Wilson", "lisa@example.com", UserRole::User, "2025-01-27", 67, UserStatus::Active),
            ],
            documents: vec![
                document(1, "Machine Learning Guide.pdf", "2.4 MB", "2025-01-25", DocumentStatus::Indexed, 145),
                document(2, "API Documentation.md", "856 KB", "2025-01-26", DocumentStatus::Processing, 89),
                document(3, "Database Schema.sql", "124 KB", "2025-01-27", DocumentStatus::Indexed, 12),
                document(4, "User Manual.docx", "1.8 MB", "2025-01-27", DocumentStatus::Failed, 0),
            ],
            queries: vec![
                query(1, "john@example.com", "What is machine learning?", "2025-01-27 14:30", QueryStatus::Success),
                query(2, "sarah@example.com", "How to implement RAG?", "2025-01-27 14:25", QueryStatus::Success),
                query(3, "mike@example.com", "Database optimization techniques", "2025-01-27 14:20", QueryStatus::Error),
                query(4, "lisa@example.com", "Python best practices", "2025-01-27 14:15", QueryStatus::Success),
            ],
            stats: DashboardStats {
                total_users: 1247,
                total_queries: 15634,
                documents_indexed: 892,
                average_response_time: "1.2s".to_string(),
                trends: [Some(12), Some(8), Some(-3), Some(-15)],
            },
            services: vec![
                service("Vector Database", Health::Operational),
                service("Search Engine", Health::Operational),
                service("Document Processor", Health::Degraded),
                service("API Gateway", Health::Operational),
            ],
        }
    }

    /// Replace the user rows (useful for tests and alternative fixtures)
    pub fn with_users(mut self, users: Vec<UserRecord>) -> Self {
        self.users = users;
        self
    }

    pub fn with_documents(mut self, documents: Vec<DocumentRecord>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_queries(mut self, queries: Vec<QueryRecord>) -> Self {
        self.queries = queries;
        self
    }
}

impl Default for MockDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSource for MockDataset {
    fn users(&self) -> &[UserRecord] {
        &self.users
    }

    fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    fn queries(&self) -> &[QueryRecord] {
        &self.queries
    }

    fn dashboard_stats(&self) -> &DashboardStats {
        &self.stats
    }

    fn service_status(&self) -> &[ServiceStatus] {
        &self.services
    }
}

pub fn user(
    id: u32,
    name: &str,
    email: &str,
    role: UserRole,
    last_active: &str,
    queries: u32,
    status: UserStatus,
) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        last_active: last_active.to_string(),
        queries,
        status,
    }
}

pub fn document(
    id: u32,
    name: &str,
    size: &str,
    uploaded: &str,
    status: DocumentStatus,
    chunks: u32,
) -> DocumentRecord {
    DocumentRecord {
        id,
        name: name.to_string(),
        size: size.to_string(),
        uploaded: uploaded.to_string(),
        status,
        chunks,
    }
}

pub fn query(id: u32, user: &str, text: &str, timestamp: &str, status: QueryStatus) -> QueryRecord {
    QueryRecord {
        id,
        user: user.to_string(),
        query: text.to_string(),
        timestamp: timestamp.to_string(),
        status,
    }
}

fn service(name: &str, health: Health) -> ServiceStatus {
    ServiceStatus {
        name: name.to_string(),
        health,
    }
}
