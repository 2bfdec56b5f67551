pub mod url_param;
pub mod directory_state;
