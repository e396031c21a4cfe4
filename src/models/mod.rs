pub mod question_type;
pub mod search_request;

pub use question_type::{get_type_int, QuestionType};
pub use search_request::{Answer, SearchRequest};
