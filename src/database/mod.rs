use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::results::InsertOneResult;
use mongodb::{Client, Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Shared MongoDB handle. Built once at startup and injected into handlers as
/// `web::Data<MongoDB>`; the driver's internal pool is the only pooling.
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Build the client without touching the network; connectivity is probed
    /// separately via [`MongoDB::ping`] so a down database does not keep the
    /// listener from starting.
    pub async fn connect(uri: &str, db_name: &str) -> mongodb::error::Result<Self> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    /// One round-trip connectivity check, `{ ping: 1 }` against `admin`.
    pub async fn ping(&self) -> mongodb::error::Result<Document> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub async fn find_one<T>(
        &self,
        collection: &str,
        filter: Document,
    ) -> mongodb::error::Result<Option<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        self.collection::<T>(collection).find_one(filter).await
    }

    /// Materialize matching records in storage order, optionally restricted
    /// to a (skip, limit) window.
    pub async fn find_all<T>(
        &self,
        collection: &str,
        filter: Option<Document>,
        skip: Option<u64>,
        limit: Option<i64>,
    ) -> mongodb::error::Result<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let options = FindOptions::builder().skip(skip).limit(limit).build();

        let mut cursor = self
            .collection::<T>(collection)
            .find(filter.unwrap_or_default())
            .with_options(options)
            .await?;

        let mut records = Vec::new();
        while let Some(record) = cursor.try_next().await? {
            records.push(record);
        }

        Ok(records)
    }

    pub async fn count(
        &self,
        collection: &str,
        filter: Option<Document>,
    ) -> mongodb::error::Result<u64> {
        self.collection::<Document>(collection)
            .count_documents(filter.unwrap_or_default())
            .await
    }

    pub async fn insert_one<T>(
        &self,
        collection: &str,
        record: &T,
    ) -> mongodb::error::Result<InsertOneResult>
    where
        T: Serialize + Send + Sync,
    {
        self.collection::<T>(collection).insert_one(record).await
    }
}
