//! Bootstrap seeding - fills empty collections from the seed document.
//!
//! Runs once per process start, after the schema exists and before the HTTP
//! server accepts requests. Every collection is gated on its own live row count:
//! a collection that already has rows is never touched, so repeated boots never
//! duplicate data. The hardware-profile singleton is created from the seed
//! document or the built-in default when it is missing.
//!
//! All inserts of one run share a single transaction. If any insert fails the
//! whole run is rolled back and the error is returned to the caller, which
//! aborts startup.

use crate::{
    config::seed::SeedDocument,
    core::{
        backlog::{self, BacklogItemInput, BacklogKind},
        hardware::{self, ProfileSource},
        journal, recommendation,
    },
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What a bootstrap run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Journal entries inserted from the seed document
    pub journal_entries: u64,
    /// Recommendations inserted from the seed document
    pub recommendations: u64,
    /// Games backlog items inserted from the seed document
    pub games: u64,
    /// Media backlog items inserted from the seed document
    pub media: u64,
    /// Source of the hardware profile, when one was inserted during this run
    pub hardware_profile: Option<ProfileSource>,
}

impl SeedReport {
    /// Whether any row from the seed document was inserted during this run.
    ///
    /// Inserting the built-in default profile does not count as seeding.
    #[must_use]
    pub const fn seeded(&self) -> bool {
        self.journal_entries > 0
            || self.recommendations > 0
            || self.games > 0
            || self.media > 0
            || matches!(self.hardware_profile, Some(ProfileSource::SeedDocument))
    }

    /// Total number of rows inserted, default profile included.
    #[must_use]
    pub const fn total_inserted(&self) -> u64 {
        let profile = if self.hardware_profile.is_some() { 1 } else { 0 };
        self.journal_entries + self.recommendations + self.games + self.media + profile
    }
}

/// Seed status reported by `/api/seed-status` for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedStatus {
    /// True when this process inserted rows from the seed document
    pub seeded: bool,
}

impl From<&SeedReport> for SeedStatus {
    fn from(report: &SeedReport) -> Self {
        Self {
            seeded: report.seeded(),
        }
    }
}

/// Seeds every empty collection and makes sure the hardware profile exists.
///
/// `today` is used for seed journal entries without a date.
///
/// # Errors
/// Returns an error if counting or any insert fails. Nothing from this run is
/// kept in that case.
#[instrument(skip(db, seed))]
pub async fn run_bootstrap(
    db: &DatabaseConnection,
    seed: Option<&SeedDocument>,
    today: NaiveDate,
) -> Result<SeedReport> {
    let txn = db.begin().await?;
    let report = seed_collections(&txn, seed, today).await?;
    txn.commit().await?;

    if report.total_inserted() == 0 {
        info!("Seed skipped");
    } else {
        info!(
            journal_entries = report.journal_entries,
            recommendations = report.recommendations,
            games = report.games,
            media = report.media,
            hardware_profile = ?report.hardware_profile,
            "Seed complete"
        );
    }
    Ok(report)
}

async fn seed_collections<C>(
    db: &C,
    seed: Option<&SeedDocument>,
    today: NaiveDate,
) -> Result<SeedReport>
where
    C: ConnectionTrait,
{
    let mut report = SeedReport::default();

    let journal_before = journal::count_entries(db).await?;
    info!(journal_before, seed_available = seed.is_some(), "Checking journal");

    if let Some(seed) = seed {
        if journal_before == 0 {
            for entry in &seed.weed_entries {
                journal::create_entry(db, entry.clone(), today).await?;
                report.journal_entries += 1;
            }
            let journal_after = journal::count_entries(db).await?;
            info!(
                journal_after,
                inserted = report.journal_entries,
                "Journal seeded"
            );
        } else {
            debug!("Journal already has entries, not seeding it");
        }

        if recommendation::count_recommendations(db).await? == 0 {
            for item in &seed.recommendations {
                recommendation::create_recommendation(db, item.clone().into()).await?;
                report.recommendations += 1;
            }
        } else {
            debug!("Recommendations already present, not seeding them");
        }

        report.games = seed_backlog(db, BacklogKind::Games, &seed.games).await?;
        report.media = seed_backlog(db, BacklogKind::Media, &seed.media).await?;
    }

    let seed_profile = seed.and_then(|s| s.pc_setup.clone());
    report.hardware_profile = hardware::ensure_profile(db, seed_profile).await?;

    Ok(report)
}

async fn seed_backlog<C>(db: &C, kind: BacklogKind, items: &[BacklogItemInput]) -> Result<u64>
where
    C: ConnectionTrait,
{
    if backlog::count_items(db, kind).await? > 0 {
        debug!(%kind, "Backlog already present, not seeding it");
        return Ok(0);
    }

    let mut inserted = 0;
    for item in items {
        backlog::create_item(db, kind, item.clone()).await?;
        inserted += 1;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        config::{database, seed::parse_seed_document},
        core::hardware::get_profile,
        entities::HardwareProfile,
        test_utils::*,
    };
    use sea_orm::{EntityTrait, PaginatorTrait};

    const SAMPLE_SEED: &str = r#"{
        "weed_entries": [
            {"date": "2024-01-01", "strain_name": "  Blue Dream  ", "thc_percent": 18.0},
            {"date": "2024-01-03", "strain_name": "Gelato", "rating": 5},
            {"strain_name": "OG Kush", "notes": " mellow "}
        ],
        "recommendations": ["Try Jack Herer", {"content": " Watch Dune "}],
        "games": [{"title": "Hades"}],
        "media": []
    }"#;

    fn sample_seed() -> SeedDocument {
        parse_seed_document(SAMPLE_SEED).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_seeding() -> Result<()> {
        let db = setup_test_db().await?;
        let today = test_date("2024-02-10");

        let report = run_bootstrap(&db, Some(&sample_seed()), today).await?;

        assert_eq!(journal::count_entries(&db).await?, 3);
        assert_eq!(recommendation::count_recommendations(&db).await?, 2);
        assert_eq!(backlog::count_items(&db, BacklogKind::Games).await?, 1);
        assert_eq!(backlog::count_items(&db, BacklogKind::Media).await?, 0);
        assert_eq!(report.hardware_profile, Some(ProfileSource::BuiltInDefault));
        assert!(report.seeded());

        let profile = get_profile(&db).await?.unwrap();
        assert_eq!(profile.cpu, "Ryzen 7800X3D");
        assert_eq!(profile.storage, "2× NVMe M.2, 2× SATA SSD");

        let entries = journal::list_entries(&db).await?;
        let names: Vec<&str> = entries.iter().map(|e| e.strain_name.as_str()).collect();
        assert_eq!(names, vec!["OG Kush", "Gelato", "Blue Dream"]);
        assert_eq!(entries[0].date, today);
        assert_eq!(entries[0].notes, "mellow");

        let recommendations = recommendation::list_recommendations(&db).await?;
        assert_eq!(recommendations[0].content, "Watch Dune");
        Ok(())
    }

    #[tokio::test]
    async fn test_journal_gate_is_count_based() -> Result<()> {
        let db = setup_test_db().await?;
        let today = test_date("2024-02-10");
        journal::create_entry(&db, journal_input("Existing", None), today).await?;

        let report = run_bootstrap(&db, Some(&sample_seed()), today).await?;

        assert_eq!(report.journal_entries, 0);
        assert_eq!(journal::count_entries(&db).await?, 1);
        // Other collections are gated on their own counts
        assert_eq!(report.recommendations, 2);
        assert_eq!(report.games, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_second_boot_inserts_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let today = test_date("2024-02-10");
        let seed = sample_seed();

        let first = run_bootstrap(&db, Some(&seed), today).await?;
        assert!(first.seeded());

        let second = run_bootstrap(&db, Some(&seed), today).await?;
        assert_eq!(second, SeedReport::default());
        assert!(!second.seeded());
        assert_eq!(journal::count_entries(&db).await?, 3);
        assert_eq!(recommendation::count_recommendations(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_seed_document_inserts_default_profile_only() -> Result<()> {
        let db = setup_test_db().await?;

        let report = run_bootstrap(&db, None, test_date("2024-02-10")).await?;

        assert_eq!(report.hardware_profile, Some(ProfileSource::BuiltInDefault));
        assert_eq!(report.total_inserted(), 1);
        assert!(!report.seeded());
        assert_eq!(journal::count_entries(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_profile_is_used() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = parse_seed_document(r#"{"pc_setup": {"cpu": " i5-12400 "}}"#).unwrap();

        let report = run_bootstrap(&db, Some(&seed), test_date("2024-02-10")).await?;

        assert_eq!(report.hardware_profile, Some(ProfileSource::SeedDocument));
        assert!(report.seeded());
        assert_eq!(get_profile(&db).await?.unwrap().cpu, "i5-12400");
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_singleton_across_boots() -> Result<()> {
        let db = setup_test_db().await?;
        let with_profile = parse_seed_document(r#"{"pc_setup": {"cpu": "Other"}}"#).unwrap();

        run_bootstrap(&db, None, test_date("2024-02-10")).await?;
        run_bootstrap(&db, Some(&with_profile), test_date("2024-02-11")).await?;
        run_bootstrap(&db, None, test_date("2024-02-12")).await?;

        let rows = HardwareProfile::find().all(&db).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].cpu, "Ryzen 7800X3D");
        Ok(())
    }

    #[tokio::test]
    async fn test_emptied_journal_is_reseeded() -> Result<()> {
        let db = setup_test_db().await?;
        let today = test_date("2024-02-10");
        let seed = sample_seed();

        run_bootstrap(&db, Some(&seed), today).await?;
        for entry in journal::list_entries(&db).await? {
            journal::delete_entry(&db, entry.id).await?;
        }

        let report = run_bootstrap(&db, Some(&seed), today).await?;
        assert_eq!(report.journal_entries, 3);
        assert_eq!(report.recommendations, 0);
        assert_eq!(journal::count_entries(&db).await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_insert_rolls_back_whole_run() -> Result<()> {
        let db = setup_test_db().await?;
        db.execute_unprepared("DROP TABLE media").await?;
        let seed = parse_seed_document(
            r#"{"weed_entries": [{"strain_name": "A"}], "games": [{"title": "Hades"}], "media": [{"title": "x"}]}"#,
        )
        .unwrap();

        let result = run_bootstrap(&db, Some(&seed), test_date("2024-02-10")).await;

        assert!(result.is_err());
        assert_eq!(journal::count_entries(&db).await?, 0);
        assert_eq!(backlog::count_items(&db, BacklogKind::Games).await?, 0);
        assert!(get_profile(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_restart_against_file_store() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("data").join("app.db").display()
        );
        let seed = sample_seed();
        let today = test_date("2024-02-10");

        for boot in 0..3 {
            let db = database::create_connection(&url).await?;
            database::create_tables(&db).await?;
            let report = run_bootstrap(&db, Some(&seed), today).await?;
            assert_eq!(SeedStatus::from(&report).seeded, boot == 0);

            assert_eq!(journal::count_entries(&db).await?, 3);
            assert_eq!(HardwareProfile::find().count(&db).await?, 1);
            db.close().await?;
        }
        Ok(())
    }
}
