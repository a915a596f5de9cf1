use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreDto {
    pub score: u64,
}

/// One approved journalist with their published article count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JournalistScoreDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub score: u64,
}
