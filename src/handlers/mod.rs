pub mod admin_handlers;
pub mod auth_handlers;
pub mod commission_handlers;
pub mod pages;
