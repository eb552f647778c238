pub mod aggregator;
pub mod chatbot;
pub mod clients;
pub mod narrator;
pub mod sentiment;
pub mod wellness;
