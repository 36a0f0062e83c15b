mod deactivate_account;
mod get_profile;
mod login_user;
mod register_user;
mod update_profile;

pub use deactivate_account::deactivate_account_handler;
pub use get_profile::get_profile_handler;
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
pub use register_user::{register_user_handler, RegisterUserRequestDto};
pub use update_profile::{update_profile_handler, UpdateProfileRequestDto};
pub use deactivate_account::__path_deactivate_account_handler;
pub use get_profile::__path_get_profile_handler;
pub use login_user::__path_login_user_handler;
pub use register_user::__path_register_user_handler;
pub use update_profile::__path_update_profile_handler;
