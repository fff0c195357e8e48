pub mod adventure_dto;
pub mod artifact_dto;
pub mod auth_dto;
pub mod character_dto;
pub mod personality_dto;
pub mod user_dto;
