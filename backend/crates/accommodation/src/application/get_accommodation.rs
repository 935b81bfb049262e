//! Get Accommodation Use Case

use std::sync::Arc;

use crate::domain::entities::{AccommodationDetail, ReviewSummary};
use crate::domain::gateway::AccommodationGateway;
use crate::domain::value_objects::AccommodationCode;
use crate::error::{AccommodationError, AccommodationResult};

pub struct GetAccommodationUseCase<G>
where
    G: AccommodationGateway,
{
    gateway: Arc<G>,
}

impl<G> GetAccommodationUseCase<G>
where
    G: AccommodationGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Listing detail; absent upstream detail is `NotFound`
    pub async fn detail(&self, code: AccommodationCode) -> AccommodationResult<AccommodationDetail> {
        self.gateway
            .get_detail(code)
            .await
            .ok_or(AccommodationError::NotFound)
    }

    /// Review digest, `None` when the digest service has nothing
    pub async fn review(&self, code: AccommodationCode) -> Option<ReviewSummary> {
        self.gateway.get_review_summary(code).await
    }

    /// Detail and review digest fetched concurrently
    pub async fn detail_with_review(
        &self,
        code: AccommodationCode,
    ) -> AccommodationResult<(AccommodationDetail, Option<ReviewSummary>)> {
        let (detail, review) = tokio::join!(self.detail(code), self.review(code));
        Ok((detail?, review))
    }
}
