pub mod chatbot;
pub mod gemini;
