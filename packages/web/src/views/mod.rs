mod login;
pub use login::Login;

mod get_started;
pub use get_started::GetStarted;

mod home;
pub use home::{Fallback, Home};
