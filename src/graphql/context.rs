use crate::services::PaintingService;

/// Per-schema context handed to every resolver.
#[derive(Clone)]
pub struct GraphQLContext {
    pub painting_service: PaintingService,
}

impl GraphQLContext {
    pub fn new(painting_service: PaintingService) -> Self {
        Self { painting_service }
    }
}
