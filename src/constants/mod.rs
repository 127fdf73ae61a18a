pub mod question_bank;
pub mod question_templates;
