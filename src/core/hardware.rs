//! Hardware profile business logic - the singleton PC setup record.
//!
//! The profile row is created exactly once by [`ensure_profile`] and afterwards
//! only ever updated. Reads of a missing profile return `None` rather than an
//! error.

use crate::{
    core::trimmed,
    entities::{HardwareProfile, hardware_profile, hardware_profile::PROFILE_ID},
    errors::Result,
};
use sea_orm::{Set, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument};

/// Partial hardware profile from the API or the seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HardwareProfileInput {
    /// Processor
    pub cpu: Option<String>,
    /// Graphics card
    pub gpu: Option<String>,
    /// Monitor list
    pub monitors: Option<String>,
    /// Power supply
    pub psu: Option<String>,
    /// Drives
    pub storage: Option<String>,
}

impl HardwareProfileInput {
    /// The profile stored when neither the store nor the seed document has one.
    #[must_use]
    pub fn built_in_default() -> Self {
        Self {
            cpu: Some("Ryzen 7800X3D".to_string()),
            gpu: Some("RTX 3070".to_string()),
            monitors: Some("1080p 140Hz; 1080p 240Hz; 1440p 165Hz (main)".to_string()),
            psu: Some("Corsair ~1000W (E-series, TBC) — Case: Corsair (TBC)".to_string()),
            storage: Some("2× NVMe M.2, 2× SATA SSD".to_string()),
        }
    }

    fn into_active_model(self) -> hardware_profile::ActiveModel {
        hardware_profile::ActiveModel {
            id: Set(PROFILE_ID),
            cpu: Set(trimmed(self.cpu)),
            gpu: Set(trimmed(self.gpu)),
            monitors: Set(trimmed(self.monitors)),
            psu: Set(trimmed(self.psu)),
            storage: Set(trimmed(self.storage)),
        }
    }
}

/// Where a freshly inserted profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// The seed document's `pc_setup` object
    SeedDocument,
    /// [`HardwareProfileInput::built_in_default`]
    BuiltInDefault,
}

/// Reads the singleton profile, if it exists.
pub async fn get_profile<C>(db: &C) -> Result<Option<hardware_profile::Model>>
where
    C: ConnectionTrait,
{
    HardwareProfile::find_by_id(PROFILE_ID)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Overwrites every field of the singleton and returns the stored row.
///
/// When the profile does not exist nothing is inserted and `None` is returned.
#[instrument(skip(db))]
pub async fn update_profile<C>(
    db: &C,
    input: HardwareProfileInput,
) -> Result<Option<hardware_profile::Model>>
where
    C: ConnectionTrait,
{
    let mut changes = input.into_active_model();
    changes.id = sea_orm::ActiveValue::NotSet;

    HardwareProfile::update_many()
        .set(changes)
        .filter(hardware_profile::Column::Id.eq(PROFILE_ID))
        .exec(db)
        .await?;

    get_profile(db).await
}

/// Inserts the singleton if it is missing.
///
/// Uses `seed` when given, otherwise the built-in default. Returns the source of
/// the inserted row, or `None` when a profile already existed.
#[instrument(skip(db))]
pub async fn ensure_profile<C>(
    db: &C,
    seed: Option<HardwareProfileInput>,
) -> Result<Option<ProfileSource>>
where
    C: ConnectionTrait,
{
    if get_profile(db).await?.is_some() {
        return Ok(None);
    }

    let (input, source) = match seed {
        Some(input) => (input, ProfileSource::SeedDocument),
        None => (
            HardwareProfileInput::built_in_default(),
            ProfileSource::BuiltInDefault,
        ),
    };

    HardwareProfile::insert(input.into_active_model())
        .exec(db)
        .await?;
    info!(?source, "Inserted hardware profile");
    Ok(Some(source))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_missing_profile_reads_as_none() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_profile(&db).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_profile_uses_default_once() -> Result<()> {
        let db = setup_test_db().await?;

        assert_eq!(
            ensure_profile(&db, None).await?,
            Some(ProfileSource::BuiltInDefault)
        );
        assert_eq!(ensure_profile(&db, None).await?, None);
        assert_eq!(
            ensure_profile(&db, Some(HardwareProfileInput::default())).await?,
            None
        );

        let profile = get_profile(&db).await?.unwrap();
        assert_eq!(profile.id, PROFILE_ID);
        assert_eq!(profile.cpu, "Ryzen 7800X3D");
        assert_eq!(profile.gpu, "RTX 3070");
        assert_eq!(HardwareProfile::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_profile_prefers_seed() -> Result<()> {
        let db = setup_test_db().await?;
        let seed = HardwareProfileInput {
            cpu: Some(" Ryzen 5600 ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            ensure_profile(&db, Some(seed)).await?,
            Some(ProfileSource::SeedDocument)
        );
        let profile = get_profile(&db).await?.unwrap();
        assert_eq!(profile.cpu, "Ryzen 5600");
        assert_eq!(profile.gpu, "");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_profile() -> Result<()> {
        let db = setup_test_db().await?;
        ensure_profile(&db, None).await?;

        let updated = update_profile(
            &db,
            HardwareProfileInput {
                gpu: Some("  RTX 4080 ".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

        assert_eq!(updated.id, PROFILE_ID);
        assert_eq!(updated.gpu, "RTX 4080");
        assert_eq!(updated.cpu, "");
        assert_eq!(HardwareProfile::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_profile_does_not_insert() -> Result<()> {
        let db = setup_test_db().await?;
        let result = update_profile(&db, HardwareProfileInput::built_in_default()).await?;
        assert!(result.is_none());
        assert_eq!(HardwareProfile::find().count(&db).await?, 0);
        Ok(())
    }
}
