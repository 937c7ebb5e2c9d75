use application::answer_chain::AnswerChain;
use application::rag_service::RagService;
use domain::models::{ScoredDocument, TOP_K};
use domain::prompt::PromptTemplate;
use presentation::cli::{run_pipeline, RunOutcome};
use presentation::output::ABORT_MESSAGE;
use std::cell::Cell;
use tests::{
    photosynthesis_documents, FailingEmbedder, RecordingEmbedder, RecordingGenerator,
    StaticRetriever,
};

const QUESTION: &str = "O que é fotossíntese?";

fn qa_chain(generator: RecordingGenerator) -> AnswerChain<RecordingGenerator> {
    AnswerChain::compose(PromptTemplate::question_answering(), Some(generator)).unwrap()
}

#[tokio::test]
async fn photosynthesis_question_is_answered_from_retrieved_context() {
    let embedder = RecordingEmbedder::new(vec![0.25, 0.5, 0.75]);
    let retriever = StaticRetriever::new(photosynthesis_documents());
    let generator = RecordingGenerator::new("É o processo pelo qual plantas produzem energia.");
    let (embed_calls, search_calls, generate_calls) = (
        embedder.calls.clone(),
        retriever.calls.clone(),
        generator.calls.clone(),
    );

    let service = RagService::new(embedder, retriever, qa_chain(generator));
    let answer = service.query(QUESTION).await.unwrap();

    let expected_context = "Fotossíntese é o processo...\nPlantas usam luz solar...";
    assert_eq!(answer.context, expected_context);
    assert_eq!(answer.question, QUESTION);
    assert_eq!(answer.answer, "É o processo pelo qual plantas produzem energia.");

    assert_eq!(*embed_calls.lock().unwrap(), vec![QUESTION.to_string()]);
    assert_eq!(
        *search_calls.lock().unwrap(),
        vec![(vec![0.25f32, 0.5, 0.75], 10usize)]
    );

    let generated = generate_calls.lock().unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(
        generated[0],
        PromptTemplate::question_answering().render(QUESTION, expected_context)
    );
    assert!(!generated[0].iter().any(|m| m.content.contains("0.85")));
}

#[tokio::test]
async fn empty_results_still_reach_the_model() {
    let generator = RecordingGenerator::new("Não tenho informações necessárias para responder sua pergunta.");
    let generate_calls = generator.calls.clone();

    let service = RagService::new(
        RecordingEmbedder::new(vec![1.0]),
        StaticRetriever::empty(),
        qa_chain(generator),
    );
    let answer = service.query("Qual é a capital da França?").await.unwrap();

    assert_eq!(answer.context, "");
    let generated = generate_calls.lock().unwrap();
    assert_eq!(generated.len(), 1);
    assert_eq!(
        generated[0],
        PromptTemplate::question_answering().render("Qual é a capital da França?", "")
    );
}

#[tokio::test]
async fn search_always_asks_for_ten_neighbours() {
    let many: Vec<ScoredDocument> = (0..25)
        .map(|i| ScoredDocument::new(format!("doc {i}"), 1.0 - i as f64 / 100.0))
        .collect();
    let retriever = StaticRetriever::new(many);
    let search_calls = retriever.calls.clone();
    let service = RagService::new(
        RecordingEmbedder::new(vec![0.1]),
        retriever,
        qa_chain(RecordingGenerator::new("ok")),
    );

    let long_question = "muito longa ".repeat(200);
    for question in ["", "curta", long_question.as_str()] {
        let answer = service.query(question).await.unwrap();
        assert_eq!(answer.context.lines().count(), TOP_K);
    }

    let calls = search_calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|(_, k)| *k == 10));
}

#[tokio::test]
async fn embedding_failure_stops_before_search_and_generation() {
    let retriever = StaticRetriever::new(photosynthesis_documents());
    let generator = RecordingGenerator::new("unused");
    let (search_calls, generate_calls) = (retriever.calls.clone(), generator.calls.clone());

    let service = RagService::new(FailingEmbedder, retriever, qa_chain(generator));
    let err = service.query(QUESTION).await.unwrap_err();

    assert!(err.to_string().contains("unreachable"));
    assert!(search_calls.lock().unwrap().is_empty());
    assert!(generate_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_chat_model_prints_abort_and_touches_nothing() {
    let embedder = RecordingEmbedder::new(vec![0.5]);
    let retriever = StaticRetriever::new(photosynthesis_documents());
    let (embed_calls, search_calls) = (embedder.calls.clone(), retriever.calls.clone());
    let asked = Cell::new(false);
    let connected = Cell::new(false);

    let chain: Option<AnswerChain<RecordingGenerator>> =
        AnswerChain::compose(PromptTemplate::question_answering(), None);
    let mut out = Vec::new();
    let outcome = run_pipeline(
        chain,
        || {
            connected.set(true);
            Ok((embedder, retriever))
        },
        || {
            asked.set(true);
            Ok(QUESTION.to_string())
        },
        false,
        &mut out,
    )
    .await
    .unwrap();

    assert!(matches!(outcome, RunOutcome::Aborted));
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", ABORT_MESSAGE));
    assert!(!asked.get());
    assert!(!connected.get());
    assert!(embed_calls.lock().unwrap().is_empty());
    assert!(search_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn pipeline_prints_question_and_answer() {
    let generator = RecordingGenerator::new("Luz vira energia química.");
    let mut out = Vec::new();

    let outcome = run_pipeline(
        Some(qa_chain(generator)),
        || {
            Ok((
                RecordingEmbedder::new(vec![0.3]),
                StaticRetriever::new(photosynthesis_documents()),
            ))
        },
        || Ok(QUESTION.to_string()),
        false,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nPERGUNTA: O que é fotossíntese?\nRESPOSTA: Luz vira energia química.\n"
    );
    match outcome {
        RunOutcome::Answered(answer) => {
            assert_eq!(
                answer.context,
                "Fotossíntese é o processo...\nPlantas usam luz solar..."
            )
        }
        RunOutcome::Aborted => panic!("pipeline should not abort"),
    }
}

#[tokio::test]
async fn question_read_failure_propagates() {
    let mut out = Vec::new();
    let result = run_pipeline(
        Some(qa_chain(RecordingGenerator::new("unused"))),
        || Ok((RecordingEmbedder::new(vec![0.3]), StaticRetriever::empty())),
        || Err(anyhow::anyhow!("stdin closed")),
        false,
        &mut out,
    )
    .await;

    assert!(result.is_err());
    assert!(out.is_empty());
}
