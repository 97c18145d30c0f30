pub mod date_parser;
pub mod validation_engine;
pub mod validation_rules;
