//! Shared fixtures for integration tests.

#![allow(dead_code)]

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use futuro_conecta::adapters::sqlite;
use futuro_conecta::domain::profile::{Education, Experience, LanguageSkill, NewProfile, Project};

/// A migrated in-memory database.
///
/// A single long-lived connection holds the database; each new
/// connection to `sqlite::memory:` would open an empty one.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlite::migrate(&pool).await.expect("migrations");
    pool
}

pub fn new_profile(name: &str, area: &str, skills: &[&str]) -> NewProfile {
    NewProfile {
        name: name.to_string(),
        photo: String::new(),
        role: "Software Engineer".to_string(),
        summary: "Builds reliable backend services".to_string(),
        location: "Recife".to_string(),
        area: area.to_string(),
        technical_skills: skills.iter().map(|s| s.to_string()).collect(),
        soft_skills: vec!["Communication".to_string()],
        experiences: vec![Experience {
            company: "Acme".to_string(),
            role: "Developer".to_string(),
            start: "2020-01".to_string(),
            end: "2022-06".to_string(),
            description: "Payments platform".to_string(),
        }],
        education: vec![Education {
            course: "Computer Science".to_string(),
            institution: "UFPE".to_string(),
            year: 2019,
        }],
        projects: vec![Project {
            title: "Queue".to_string(),
            link: "https://example.com/queue".to_string(),
            description: String::new(),
        }],
        certifications: vec![],
        languages: vec![LanguageSkill {
            language: "English".to_string(),
            level: "Advanced".to_string(),
        }],
        areas_of_interest: vec!["Distributed systems".to_string()],
    }
}
