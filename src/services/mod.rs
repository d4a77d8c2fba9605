pub mod auth_service;
pub mod epass_service;
pub mod event_service;
pub mod payment;
pub mod token_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceError, LoginRequest};
pub use epass_service::{EPassService, EPassServiceError, IssueEPassRequest};
pub use event_service::{CreateEventRequest, EventQuery, EventService, EventServiceError};
pub use payment::{create_payment_verifier, PaymentVerifier};
pub use token_service::{Claims, TokenError, TokenService};
pub use user_service::{SignupRequest, UserService, UserServiceError};
