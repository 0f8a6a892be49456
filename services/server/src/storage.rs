use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::models::{Bill, CreditHistoryEvent, CreditScore, Emi, HiddenDebtItem, User};

const DATABASE_NAME: &str = "cred_tracker";

/// The document-store handle, acquired once at startup and injected into
/// request handlers via `web::Data`.
pub struct Storage {
    client: Client,
    db: Database,
}

impl Storage {
    pub async fn init(uri: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(DATABASE_NAME);
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }, None).await?;
        info!("MongoDB connection healthy");
        Ok(())
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub fn credit_scores(&self) -> Collection<CreditScore> {
        self.db.collection("credit_scores")
    }

    pub fn credit_history(&self) -> Collection<CreditHistoryEvent> {
        self.db.collection("credit_history")
    }

    pub fn bills(&self) -> Collection<Bill> {
        self.db.collection("bills")
    }

    pub fn emis(&self) -> Collection<Emi> {
        self.db.collection("emis")
    }

    pub fn hidden_debts(&self) -> Collection<HiddenDebtItem> {
        self.db.collection("hidden_debts")
    }
}
