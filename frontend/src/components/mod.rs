pub mod error_boundary;
pub mod suspend_boundary;
pub mod directory_header;
pub mod directory_components;
