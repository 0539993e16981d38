//! Page components for the web interface

pub mod home;
pub mod login;
pub mod not_found;
