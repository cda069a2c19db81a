pub mod geolocation;
pub mod lifetime;
pub mod notify;
pub mod storage;
pub mod time;
