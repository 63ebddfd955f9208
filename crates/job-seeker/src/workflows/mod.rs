pub mod apply;
pub mod search;
pub mod session;
