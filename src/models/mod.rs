mod personality;
mod question;

pub use personality::{ColorKey, PersonalityBand};
pub use question::{AnswerOption, Question};
