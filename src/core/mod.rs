pub mod add;
pub mod clear;
pub mod login;
pub mod toggle;
