pub mod guard;
pub mod navbar;
