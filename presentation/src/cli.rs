use crate::output::{present_abort, present_answer};
use crate::prompt::ask_user_prompt;
use application::answer_chain::AnswerChain;
use application::rag_service::RagService;
use clap::{ArgAction, Parser};
use colored::Colorize;
use domain::models::RagAnswer;
use domain::ports::{Embedder, Generator, Retriever};
use domain::prompt::PromptTemplate;
use infrastructure::chat_model::OpenAiChat;
use infrastructure::config::Config;
use infrastructure::embedder::OpenAiEmbedder;
use infrastructure::pg_vector_store::{PgVectorStore, StoreOptions};
use shared::types::Result;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rag-chat")]
#[command(about = "Answer questions from documents stored in a pgvector collection", long_about = None)]
pub struct Cli {
    /// Print the retrieved context to stderr before the answer
    #[arg(long, action = ArgAction::SetTrue)]
    pub show_context: bool,

    /// Load settings from this env file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Question to ask (if empty, will ask interactively)
    #[arg(value_parser, trailing_var_arg = true)]
    pub question: Vec<String>,
}

impl Cli {
    pub fn inline_question(&self) -> Option<String> {
        if self.question.is_empty() {
            None
        } else {
            Some(self.question.join(" "))
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    Answered(RagAnswer),
    Aborted,
}

pub struct CliApp;

impl CliApp {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        let config = match &cli.env_file {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load()?,
        };
        tracing::info!(?config, "configuration loaded");

        let chain = AnswerChain::compose(
            PromptTemplate::question_answering(),
            OpenAiChat::from_config(&config),
        );

        let inline = cli.inline_question();
        let read_question = move || match inline {
            Some(question) => Ok(question),
            None => ask_user_prompt(),
        };
        let connect = || -> Result<(OpenAiEmbedder, PgVectorStore)> {
            let embedder = OpenAiEmbedder::from_config(&config)?;
            let store = PgVectorStore::connect_lazy(StoreOptions::from_config(&config))?;
            Ok((embedder, store))
        };

        let mut stdout = std::io::stdout();
        run_pipeline(chain, connect, read_question, cli.show_context, &mut stdout).await?;
        Ok(())
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard on the chain, read the question, connect the collaborators, answer and print.
///
/// When the chain is missing the abort message is printed and nothing else runs: no question is
/// read and no collaborator is built.
pub async fn run_pipeline<E, R, G, C, Q, W>(
    chain: Option<AnswerChain<G>>,
    connect: C,
    read_question: Q,
    show_context: bool,
    out: &mut W,
) -> Result<RunOutcome>
where
    E: Embedder,
    R: Retriever,
    G: Generator,
    C: FnOnce() -> Result<(E, R)>,
    Q: FnOnce() -> Result<String>,
    W: Write,
{
    let Some(chain) = chain else {
        present_abort(out)?;
        return Ok(RunOutcome::Aborted);
    };

    let question = read_question()?;
    let (embedder, retriever) = connect()?;
    let service = RagService::new(embedder, retriever, chain);

    let answer = service.query(&question).await?;
    if show_context {
        eprintln!("{}\n{}", "CONTEXTO:".cyan().bold(), answer.context);
    }
    present_answer(out, &answer.question, &answer.answer)?;
    Ok(RunOutcome::Answered(answer))
}
