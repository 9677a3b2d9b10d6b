pub mod ai_service;
pub mod quiz_service;
pub mod search_service;
pub mod template_service;
