mod question_handler;

pub use question_handler::*;
