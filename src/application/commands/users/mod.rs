mod facebook;
mod login;
mod password;
mod register;
mod review;
mod service;

pub use facebook::{FacebookAccountType, FacebookMockCommand};
pub use login::{LoginAudience, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use review::ReviewJournalistCommand;
pub use service::UserCommandService;
