pub mod adventure;
pub mod artifacts;
pub mod auth;
pub mod characters;
pub mod health;
pub mod personality;
pub mod users;
