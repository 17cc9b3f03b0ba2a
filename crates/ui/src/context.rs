use std::sync::Arc;

use services::QuestionBankService;

pub trait UiApp: Send + Sync {
    fn test_title(&self) -> String;
    fn question_bank(&self) -> Arc<QuestionBankService>;
}

#[derive(Clone)]
pub struct AppContext {
    test_title: String,
    question_bank: Arc<QuestionBankService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            test_title: app.test_title(),
            question_bank: app.question_bank(),
        }
    }

    #[must_use]
    pub fn test_title(&self) -> &str {
        &self.test_title
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.question_bank)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
