//! Season description files read by the binary.
//!
//! A file lists the league, its teams and any recorded matches. TOML is the
//! default; files ending in `.json` are read as JSON. Dates are quoted
//! `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::constants::DATE_FORMAT;
use crate::error::AppError;
use crate::models::{League, MatchRecord, Team};
use crate::season::MemoryStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonFile {
    /// Storage id of the league; derived from the name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl SeasonFile {
    /// Reads a season file, picking the format from the file extension
    pub async fn load(path: &str) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(path).await?;
        let is_json = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        debug!(
            "Loaded season file {}: {} teams, {} matches",
            path,
            file.teams.len(),
            file.matches.len()
        );
        Ok(file)
    }

    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// The league record with parsed dates
    pub fn league(&self) -> Result<League, AppError> {
        Ok(League {
            id: self.league_id(),
            name: self.name.clone(),
            start_date: parse_date("start_date", &self.start_date)?,
            end_date: parse_date("end_date", &self.end_date)?,
        })
    }

    fn league_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => self
                .name
                .trim()
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
        }
    }

    /// Loads the league's teams and matches into a fresh in-memory store
    pub async fn into_store(self) -> Result<(League, MemoryStore), AppError> {
        let league = self.league()?;
        let store = MemoryStore::new();
        store.set_teams(&league.id, self.teams).await;
        store.set_records(&league.id, self.matches).await;
        Ok((league, store))
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid {field} '{value}': {e}"))
    })
}
