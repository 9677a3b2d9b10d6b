pub mod knowledge;
pub mod question;
