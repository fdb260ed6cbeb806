mod ids;
mod user;

pub use ids::{next_user_id, UserId};
pub use user::{Address, Company, Geo, NewUser, User};
