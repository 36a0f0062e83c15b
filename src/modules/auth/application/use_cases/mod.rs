pub mod deactivate_account;
pub mod fetch_profile;
pub mod login_user;
pub mod register_user;
pub mod update_profile;
