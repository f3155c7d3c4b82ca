use log::{debug, info, warn};

use crate::api::ApiError;
use crate::i18n::Text;
use crate::models::{EvaluateAnswerInput, Evaluation, InterviewQuestion};

/// Steps of one simulated interview. Each step carries exactly the data it
/// needs, so a result can never exist without the question it answers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InterviewStep {
    #[default]
    Start,
    Interview {
        question: String,
        answer: String,
    },
    Result {
        question: String,
        answer: String,
        evaluation: Evaluation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Start,
    Interview,
    Result,
}

impl InterviewStep {
    pub fn kind(&self) -> StepKind {
        match self {
            InterviewStep::Start => StepKind::Start,
            InterviewStep::Interview { .. } => StepKind::Interview,
            InterviewStep::Result { .. } => StepKind::Result,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewInputError {
    EmptyAnswer,
}

#[derive(Debug, Default)]
pub struct InterviewState {
    step: InterviewStep,
    loading: bool,
    error: Option<String>,
}

impl InterviewState {
    pub fn step(&self) -> &InterviewStep {
        &self.step
    }

    pub fn kind(&self) -> StepKind {
        self.step.kind()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn question(&self) -> Option<&str> {
        match &self.step {
            InterviewStep::Start => None,
            InterviewStep::Interview { question, .. } | InterviewStep::Result { question, .. } => {
                Some(question)
            }
        }
    }

    /// Editable answer buffer, only while a question is being answered.
    pub fn answer_mut(&mut self) -> Option<&mut String> {
        match &mut self.step {
            InterviewStep::Interview { answer, .. } if !self.loading => Some(answer),
            _ => None,
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.step {
            InterviewStep::Result { evaluation, .. } => Some(evaluation),
            _ => None,
        }
    }

    /// Returns `true` when the caller should request a question.
    pub fn begin_fetch_question(&mut self) -> bool {
        if self.loading || self.kind() != StepKind::Start {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn finish_fetch_question(&mut self, outcome: Result<InterviewQuestion, ApiError>) {
        if self.kind() != StepKind::Start {
            debug!("dropping question that arrived outside the start step");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(InterviewQuestion { question }) => {
                info!("interview question received");
                self.error = None;
                self.step = InterviewStep::Interview {
                    question,
                    answer: String::new(),
                };
            }
            Err(err) => {
                warn!("fetching interview question failed: {err}");
                self.error = Some(err.user_message(Text::InterviewQuestionError));
            }
        }
    }

    /// Builds the evaluation request. Blank answers are refused without
    /// producing a request.
    pub fn begin_submit_answer(&mut self) -> Result<Option<EvaluateAnswerInput>, InterviewInputError> {
        if self.loading {
            return Ok(None);
        }
        let InterviewStep::Interview { question, answer } = &self.step else {
            return Ok(None);
        };
        if answer.trim().is_empty() {
            self.error = Some(Text::InterviewAnswerRequired.tr().to_string());
            return Err(InterviewInputError::EmptyAnswer);
        }
        let input = EvaluateAnswerInput {
            question: question.clone(),
            answer: answer.clone(),
        };
        self.loading = true;
        self.error = None;
        Ok(Some(input))
    }

    pub fn finish_submit_answer(&mut self, outcome: Result<Evaluation, ApiError>) {
        if self.kind() != StepKind::Interview {
            debug!("dropping evaluation that arrived outside the interview step");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(evaluation) => {
                info!("answer evaluated, score: {:?}", evaluation.score);
                self.error = None;
                if let InterviewStep::Interview { question, answer } = std::mem::take(&mut self.step) {
                    self.step = InterviewStep::Result {
                        question,
                        answer,
                        evaluation,
                    };
                }
            }
            Err(err) => {
                warn!("evaluating answer failed: {err}");
                self.error = Some(err.user_message(Text::InterviewEvaluateError));
            }
        }
    }

    /// Only valid from the result step.
    pub fn reset(&mut self) {
        if self.kind() == StepKind::Result {
            self.step = InterviewStep::Start;
            self.error = None;
        }
    }
}
