pub mod survey;

pub use survey::{
    QaItem, QuestionResponse, ReportResponse, SurveyRequest, question_response_schema,
};
