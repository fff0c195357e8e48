pub mod adventure_service;
pub mod artifact_service;
pub mod character_service;
pub mod chat_model;
pub mod image_service;
pub mod llm_generator;
pub mod option_parser;
pub mod question_service;
pub mod scoring;
pub mod simple_generator;
pub mod user_service;
