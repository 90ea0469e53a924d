use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Painting;

pub struct Query;

#[Object]
impl Query {
    /// Get a specific painting by ID
    async fn painting(&self, ctx: &Context<'_>, id: String) -> Result<Option<Painting>> {
        let context = ctx.data::<GraphQLContext>()?;
        let painting = context.painting_service.find_by_id(&id).await?;

        Ok(painting.map(Painting::from))
    }
}
