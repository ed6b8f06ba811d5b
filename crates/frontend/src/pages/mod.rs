pub mod home;
pub mod showcase;
