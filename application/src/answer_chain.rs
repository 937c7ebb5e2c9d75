use domain::ports::Generator;
use domain::prompt::PromptTemplate;
use shared::types::Result;

/// A prompt template bound to the chat model that answers it.
pub struct AnswerChain<G> {
    template: PromptTemplate,
    generator: G,
}

impl<G: Generator> AnswerChain<G> {
    /// `None` when there is no usable model or the template has nothing to send.
    pub fn compose(template: PromptTemplate, generator: Option<G>) -> Option<Self> {
        if template.is_empty() {
            return None;
        }
        generator.map(|generator| Self {
            template,
            generator,
        })
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub async fn invoke(&self, question: &str, context: &str) -> Result<String> {
        let messages = self.template.render(question, context);
        self.generator.complete(&messages).await
    }
}
