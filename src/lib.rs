pub mod config;
pub mod dto;
pub mod error;
pub mod knowledge;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::knowledge::KnowledgeBase;
use crate::services::{
    ai_service::AiService, quiz_service::QuizService, search_service::SearchService,
};
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub knowledge: KnowledgeBase,
    pub quiz_service: QuizService,
    pub search_service: SearchService,
    pub ai_service: AiService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let knowledge = KnowledgeBase::builtin();
        let quiz_service = QuizService::new(knowledge.clone());
        let search_service = SearchService::new(knowledge.clone());
        let ai_service = AiService::new(config, http_client);

        Self {
            knowledge,
            quiz_service,
            search_service,
            ai_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
