// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::chatbot::{Intent, QuestionType};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub question_type: QuestionType,
    pub intent: Intent,
    pub confidence: f64,
}
