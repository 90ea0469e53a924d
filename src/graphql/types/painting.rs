use async_graphql::*;

use crate::database::entities::paintings;

/// GraphQL view of a stored painting; mirrors the storage schema.
#[derive(SimpleObject)]
pub struct Painting {
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub techniques: Vec<String>,
}

impl From<paintings::Model> for Painting {
    fn from(model: paintings::Model) -> Self {
        let techniques = model
            .techniques
            .and_then(|t| serde_json::from_str::<Vec<String>>(&t).ok())
            .unwrap_or_default();

        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            techniques,
        }
    }
}
