pub mod epass;
pub mod event;
pub mod user;

pub use epass::EPass;
pub use event::{DateBucket, Event, EventFilter, FeeFilter, NewEvent};
pub use user::{Role, User, UserResponse};
