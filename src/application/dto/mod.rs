pub mod articles;
pub mod auth;
pub mod comments;
pub mod serde_time;
pub mod stats;
pub mod subscribers;
pub mod users;

pub use articles::{ArticleDto, Removed};
pub use auth::{AuthResponse, AuthTokenDto, AuthenticatedUser, TokenClaims, TokenSubject};
pub use comments::CommentDto;
pub use stats::{JournalistScoreDto, ScoreDto};
pub use subscribers::SubscriptionDto;
pub use users::UserDto;
