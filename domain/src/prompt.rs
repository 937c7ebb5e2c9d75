use serde::{Deserialize, Serialize};

pub const QUESTION_VAR: &str = "question";
pub const CONTEXT_VAR: &str = "retrieved_context";

const SYSTEM_INSTRUCTIONS: &str = "\
Você é um assistente que responde perguntas usando exclusivamente o CONTEXTO fornecido.

REGRAS:
- Responda somente com base no CONTEXTO.
- Se a informação não estiver explicitamente no CONTEXTO, responda:
  \"Não tenho informações necessárias para responder sua pergunta.\"
- Nunca invente ou use conhecimento externo.
- Nunca produza opiniões ou interpretações além do que está escrito.

EXEMPLOS DE PERGUNTAS FORA DO CONTEXTO:
Pergunta: \"Qual é a capital da França?\"
Resposta: \"Não tenho informações necessárias para responder sua pergunta.\"

Pergunta: \"Quantos clientes temos em 2024?\"
Resposta: \"Não tenho informações necessárias para responder sua pergunta.\"

Pergunta: \"Você acha isso bom ou ruim?\"
Resposta: \"Não tenho informações necessárias para responder sua pergunta.\"";

const USER_MESSAGE: &str = "\
CONTEXTO:
{retrieved_context}

PERGUNTA DO USUÁRIO:
{question}

RESPONDA A \"PERGUNTA DO USUÁRIO\"";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Chat messages with `{question}` and `{retrieved_context}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    messages: Vec<ChatMessage>,
}

impl PromptTemplate {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// The grounded question-answering template: answering rules as the system message, the
    /// retrieved context and the question as the user message.
    pub fn question_answering() -> Self {
        Self::new(vec![
            ChatMessage::new(Role::System, SYSTEM_INSTRUCTIONS),
            ChatMessage::new(Role::User, USER_MESSAGE),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Fill both placeholders in every message.
    pub fn render(&self, question: &str, context: &str) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .map(|msg| ChatMessage {
                role: msg.role,
                content: fill(&msg.content, question, context),
            })
            .collect()
    }
}

// Single pass over the template: substituted values are never scanned again, and unknown
// `{...}` sequences are copied through untouched.
fn fill(template: &str, question: &str, context: &str) -> String {
    let mut out = String::with_capacity(template.len() + question.len() + context.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let value = match &after[..close] {
            QUESTION_VAR => Some(question),
            CONTEXT_VAR => Some(context),
            _ => None,
        };
        match value {
            Some(v) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
