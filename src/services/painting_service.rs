use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::database::entities::{paintings, paintings::Entity as Paintings};

/// Candidate record for insertion. No field is required; whatever is absent
/// is persisted as NULL.
#[derive(Debug, Default, Clone)]
pub struct NewPainting {
    pub name: Option<String>,
    pub url: Option<String>,
    pub techniques: Option<Vec<String>>,
}

/// Owned handle on the painting store. Cloning shares the underlying
/// connection pool, so one instance per request surface is cheap.
#[derive(Clone)]
pub struct PaintingService {
    db: DatabaseConnection,
}

impl PaintingService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a candidate record under a freshly assigned id and returns
    /// the stored row, id included.
    pub async fn insert(&self, painting: NewPainting) -> Result<paintings::Model> {
        let techniques = match painting.techniques {
            Some(tags) => Some(serde_json::to_string(&tags)?),
            None => None,
        };

        let painting = paintings::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(painting.name),
            url: Set(painting.url),
            techniques: Set(techniques),
        };

        let painting = painting.insert(&self.db).await?;

        Ok(painting)
    }

    /// Looks up one record by id. An id that was never issued is a miss,
    /// not an error; malformed ids fall out the same way.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<paintings::Model>> {
        let painting = Paintings::find_by_id(id.to_owned()).one(&self.db).await?;

        Ok(painting)
    }

    /// Re-queries the store on every call; ordering is whatever the store
    /// hands back.
    pub async fn find_all(&self) -> Result<Vec<paintings::Model>> {
        let paintings = Paintings::find().all(&self.db).await?;

        Ok(paintings)
    }
}
