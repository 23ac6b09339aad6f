mod session;

pub use session::{login_handler, logout_handler, me_handler};
