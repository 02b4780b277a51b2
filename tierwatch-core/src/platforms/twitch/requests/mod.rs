pub mod users;

pub use users::{UserData, UsersResponse};
