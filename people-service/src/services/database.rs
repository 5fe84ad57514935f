use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

use crate::models::Person;
use crate::services::store::{PersonStore, ReplaceOutcome};

pub const PEOPLE_COLLECTION: &str = "people";

/// MongoDB-backed store. Cloning is cheap: the client shares one connection
/// pool and every operation checks a connection out for its own duration.
#[derive(Clone)]
pub struct MongoPersonStore {
    client: MongoClient,
    db: Database,
}

impl MongoPersonStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::ConfigError(anyhow::anyhow!("invalid MONGO_URL: {}", e))
        })?;
        options.app_name = Some("people-service".to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        // Not unique: duplicate names are allowed.
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name_idx".to_string()).build())
            .build();

        self.people()
            .create_index(name_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create name index: {}", e);
                AppError::from(e)
            })?;

        tracing::info!("People indexes initialized");
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn people(&self) -> Collection<Person> {
        self.db.collection(PEOPLE_COLLECTION)
    }
}

#[async_trait]
impl PersonStore for MongoPersonStore {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let cursor = self.people().find(doc! {}, None).await?;
        let people: Vec<Person> = cursor.try_collect().await?;
        Ok(people)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        let person = self.people().find_one(doc! { "name": name }, None).await?;
        Ok(person)
    }

    async fn insert(&self, person: &Person) -> Result<(), AppError> {
        self.people().insert_one(person, None).await?;
        Ok(())
    }

    async fn replace_by_name(
        &self,
        name: &str,
        person: &Person,
    ) -> Result<ReplaceOutcome, AppError> {
        let result = self
            .people()
            .replace_one(doc! { "name": name }, person, None)
            .await?;

        if result.matched_count == 0 {
            Ok(ReplaceOutcome::NotMatched)
        } else {
            Ok(ReplaceOutcome::Replaced)
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
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
}
