mod question_dto;

pub use question_dto::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionListResponseDto, QuestionResponseDto, SearchQuestionsDto, SearchQuestionsResponseDto,
};
