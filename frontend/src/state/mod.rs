pub mod attendance;
pub mod crud;
pub mod links;
pub mod navigation;
pub mod portal;
pub mod session;
