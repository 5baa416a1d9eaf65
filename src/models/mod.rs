pub mod event;
pub mod member;
pub mod role;
pub mod viewer;
