pub mod adventure;
pub mod artifact;
pub mod character;
pub mod personality;
pub mod user;
