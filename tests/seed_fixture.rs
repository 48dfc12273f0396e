//! Seeding the SQLite store from fixture files.

mod common;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use common::memory_pool;
use futuro_conecta::adapters::fixture::{load_fixture, FixtureError};
use futuro_conecta::adapters::sqlite::{SqliteProfileReader, SqliteProfileRepository};
use futuro_conecta::application::handlers::{SeedProfilesCommand, SeedProfilesHandler};
use futuro_conecta::domain::profile::NewProfile;
use futuro_conecta::ports::ProfileReader;

fn seed_records(path: &Path) -> Vec<Result<NewProfile, String>> {
    load_fixture(path)
        .unwrap()
        .into_iter()
        .map(|record| record.map_err(|e| e.to_string()))
        .collect()
}

fn handler_for(pool: sqlx::SqlitePool) -> SeedProfilesHandler {
    SeedProfilesHandler::new(
        Arc::new(SqliteProfileRepository::new(pool.clone())),
        Arc::new(SqliteProfileReader::new(pool)),
    )
}

#[tokio::test]
async fn bundled_fixture_seeds_cleanly() {
    let records = seed_records(Path::new("fixtures/profiles.json"));
    let expected = records.len();

    let pool = memory_pool().await;
    let reader = Arc::new(SqliteProfileReader::new(pool.clone()));
    let handler = SeedProfilesHandler::new(
        Arc::new(SqliteProfileRepository::new(pool)),
        reader.clone(),
    );

    let report = handler
        .handle(SeedProfilesCommand {
            records,
            keep_existing: false,
        })
        .await
        .unwrap();

    assert_eq!(report.inserted, expected);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.total_stored, expected as u64);
    assert_eq!(reader.count().await.unwrap(), expected as u64);

    let stored = reader.list_all().await.unwrap();
    assert_eq!(stored[0].name, "Ana Beatriz Souza");
    assert_eq!(stored[0].technical_skills[0], "Python");
    assert_eq!(stored[0].areas_of_interest.len(), 2);
}

#[tokio::test]
async fn reseeding_replaces_previous_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "nome": "Lucas Prado",
                "cargo": "Desenvolvedor Mobile",
                "resumo": "Apps nativos para Android e iOS",
                "localizacao": "Natal",
                "area": "Tecnologia",
                "habilidadesTecnicas": ["Kotlin", "Swift"],
                "softSkills": ["Autonomia"],
                "experiencias": [{{"empresa": "Potiguar Apps", "cargo": "Dev", "inicio": "2019-01", "fim": "Atual"}}],
                "formacao": [{{"curso": "ADS", "instituicao": "IFRN", "ano": 2018}}],
                "idiomas": [{{"idioma": "Inglês", "nivel": "Básico"}}]
            }},
            {{ "nome": "Incompleto" }}
        ]"#
    )
    .unwrap();

    let handler = handler_for(memory_pool().await);

    for _ in 0..2 {
        let report = handler
            .handle(SeedProfilesCommand {
                records: seed_records(file.path()),
                keep_existing: false,
            })
            .await
            .unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.total_stored, 1);
        assert_eq!(report.by_area.get("Tecnologia"), Some(&1));
    }
}

#[tokio::test]
async fn malformed_record_is_rejected_and_the_rest_seeded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "nome": "Lucas Prado",
                "cargo": "Desenvolvedor Mobile",
                "resumo": "Apps nativos para Android e iOS",
                "localizacao": "Natal",
                "area": "Tecnologia",
                "habilidadesTecnicas": ["Kotlin"],
                "softSkills": ["Autonomia"],
                "experiencias": [{{"empresa": "Potiguar Apps", "cargo": "Dev", "inicio": "2019-01", "fim": "Atual"}}],
                "formacao": [{{"curso": "ADS", "instituicao": "IFRN", "ano": 2018}}],
                "idiomas": [{{"idioma": "Inglês", "nivel": "Básico"}}]
            }},
            {{
                "nome": "Registro Quebrado",
                "experiencias": [{{"empresa": "X"}}]
            }}
        ]"#
    )
    .unwrap();

    let report = handler_for(memory_pool().await)
        .handle(SeedProfilesCommand {
            records: seed_records(file.path()),
            keep_existing: false,
        })
        .await
        .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.total_stored, 1);
    assert_eq!(report.sample[0].name, "Lucas Prado");
}

#[test]
fn missing_fixture_is_reported() {
    let err = load_fixture(Path::new("fixtures/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, FixtureError::NotFound { .. }));
}
