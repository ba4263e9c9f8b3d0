pub mod login_admin;
pub mod verify_admin;

pub use login_admin::login_admin_handler;
pub use verify_admin::verify_admin_handler;
