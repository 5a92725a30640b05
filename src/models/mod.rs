pub mod carousel;
pub mod catalog;
pub mod category;
pub mod commission;
pub mod gallery;
pub mod label;
