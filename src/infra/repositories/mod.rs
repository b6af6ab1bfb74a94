pub mod json_appliance_repo;
pub mod json_record_repo;
pub mod json_settings_repo;
pub mod json_user_repo;
