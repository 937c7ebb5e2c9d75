use crate::config::Config;
use domain::models::ScoredDocument;
use domain::ports::Retriever;
use pgvector::Vector;
use shared::types::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Read side of a LangChain `PGVector` store: `langchain_pg_collection` holds collection names,
/// `langchain_pg_embedding` holds one row per stored passage.
pub struct PgVectorStore {
    pool: PgPool,
    collection_name: String,
    use_jsonb: bool,
}

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub connection: String,
    pub collection_name: String,
    pub use_jsonb: bool,
}

impl StoreOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            connection: config.database_url.clone(),
            collection_name: config.collection_name.clone(),
            use_jsonb: config.use_jsonb,
        }
    }
}

impl PgVectorStore {
    /// Builds the pool without connecting; the first search opens the connection.
    /// Must be called from within a tokio runtime.
    pub fn connect_lazy(options: StoreOptions) -> Result<Self> {
        let url = normalize_connection_url(&options.connection);
        let pool = PgPoolOptions::new().max_connections(1).connect_lazy(&url)?;
        Ok(Self {
            pool,
            collection_name: options.collection_name,
            use_jsonb: options.use_jsonb,
        })
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub async fn similarity_search_with_score(
        &self,
        embedding: &[f32],
        k: usize,
    ) -> Result<Vec<ScoredDocument>> {
        let sql = similarity_sql(self.use_jsonb);
        let rows: Vec<(Option<String>, f64, Option<serde_json::Value>)> = sqlx::query_as(&sql)
            .bind(Vector::from(embedding.to_vec()))
            .bind(&self.collection_name)
            .bind(k as i64)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            collection = %self.collection_name,
            k,
            returned = rows.len(),
            "similarity search finished"
        );

        Ok(rows
            .into_iter()
            .map(|(document, distance, metadata)| ScoredDocument {
                text: document.unwrap_or_default(),
                score: distance_to_similarity(distance),
                metadata,
            })
            .collect())
    }
}

impl Retriever for PgVectorStore {
    async fn search(&self, embedding: &[f32], k: usize) -> Result<Vec<ScoredDocument>> {
        self.similarity_search_with_score(embedding, k).await
    }
}

/// Cosine distance ordering, closest first. Older stores kept metadata as plain JSON, so it is
/// cast when JSONB storage is not in use.
fn similarity_sql(use_jsonb: bool) -> String {
    let metadata = if use_jsonb {
        "e.cmetadata"
    } else {
        "e.cmetadata::jsonb"
    };
    format!(
        "SELECT e.document, (e.embedding <=> $1) AS distance, {metadata} AS metadata \
         FROM langchain_pg_embedding e \
         JOIN langchain_pg_collection c ON e.collection_id = c.uuid \
         WHERE c.name = $2 \
         ORDER BY distance ASC \
         LIMIT $3"
    )
}

fn distance_to_similarity(distance: f64) -> f64 {
    1.0 - distance
}

/// Accept SQLAlchemy-style URLs such as `postgresql+psycopg://...` by dropping the driver suffix.
pub fn normalize_connection_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let base = scheme.split('+').next().unwrap_or(scheme);
            format!("{base}://{rest}")
        }
        None => url.to_string(),
    }
}
