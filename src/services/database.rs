use crate::error::AppError;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};

const DATA_COLLECTION: &str = "data";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Stores the document verbatim. Repeated inserts of the same body create
    /// duplicate entries.
    pub async fn insert(&self, document: Document) -> Result<(), AppError> {
        self.data()
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert document: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Returns every document in the collection, in store-determined order,
    /// with the store-assigned `_id` projected out.
    pub async fn fetch_all(&self) -> Result<Vec<Document>, AppError> {
        let find_options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();

        let mut cursor = self
            .data()
            .find(doc! {}, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query documents collection: {}", e);
                AppError::from(e)
            })?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(AppError::from)? {
            documents.push(document);
        }

        Ok(documents)
    }

    pub fn data(&self) -> Collection<Document> {
        self.db.collection(DATA_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
