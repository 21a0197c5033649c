use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate};

pub const TODAY_VAR: &str = "SCHOOLDESK_TODAY";
pub const IDS_VAR: &str = "SCHOOLDESK_IDS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Uuid,
    Counter,
}

impl IdStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Counter => "counter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub today: NaiveDate,
    pub ids: IdStrategy,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let today = match std::env::var(TODAY_VAR) {
            Ok(raw) if !raw.trim().is_empty() => parse_today(&raw)?,
            _ => Local::now().date_naive(),
        };
        let ids = match std::env::var(IDS_VAR) {
            Ok(raw) => parse_id_strategy(&raw)?,
            Err(_) => IdStrategy::Uuid,
        };
        Ok(Self { today, ids })
    }
}

fn parse_today(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("{TODAY_VAR} must be YYYY-MM-DD, got {raw:?}"))
}

fn parse_id_strategy(raw: &str) -> anyhow::Result<IdStrategy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "uuid" => Ok(IdStrategy::Uuid),
        "counter" => Ok(IdStrategy::Counter),
        other => Err(anyhow!("{IDS_VAR} must be uuid or counter, got {other:?}")),
    }
}
