use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::graphql::context::GraphQLContext;
use crate::graphql::queries::Query;

pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Creation stays on the REST surface, so the schema mounts a bare query
/// root.
pub fn build_schema(context: GraphQLContext) -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(context)
        .finish()
}
