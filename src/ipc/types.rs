use serde::Deserialize;

use crate::config::{Config, IdStrategy};
use crate::session::Session;
use crate::store::{CounterIds, IdGenerator, SchoolStore, UuidIds};

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub store: SchoolStore,
    pub ids: Box<dyn IdGenerator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = SchoolStore::seeded();
        let ids: Box<dyn IdGenerator> = match config.ids {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Counter => Box::new(CounterIds::after(store.uploads.all())),
        };
        Self {
            config,
            session: Session::default(),
            store,
            ids,
        }
    }
}
