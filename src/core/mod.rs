pub mod add;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
pub mod store;
pub mod timeline;
pub mod validate;
