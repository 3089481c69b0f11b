#![forbid(unsafe_code)]

pub mod app_services;
pub mod assistant_service;
pub mod catalog_service;
pub mod error;
pub mod progress_service;
pub mod quiz_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use assistant_service::{AssistantReply, AssistantService, SAMPLE_QUESTION_LIMIT};
pub use catalog_service::CatalogService;
pub use error::{
    AppServicesError, AssistantError, CatalogServiceError, ProgressServiceError,
    QuizServiceError,
};
pub use progress_service::ProgressService;
pub use quiz_service::QuizService;
