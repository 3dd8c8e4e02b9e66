//! Routed page components.

pub mod admin;
pub mod dashboard;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod oauth_callback;
pub mod register;
pub mod staff;
pub mod verify_otp;
