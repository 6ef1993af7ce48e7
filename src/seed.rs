// src/seed.rs
//
// Static content shipped inside the binary. Parsed once at startup.

use crate::domain::knowledge::KnowledgeCategory;
use crate::domain::lawyer::Lawyer;
use crate::domain::record::Record;
use crate::errors::ServerError;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const COMPLAINTS_JSON: &str = include_str!("../data/complaints.json");
const SUCCESS_STORIES_JSON: &str = include_str!("../data/success_stories.json");
const LAWYERS_JSON: &str = include_str!("../data/lawyers.json");
const KNOWLEDGE_BASE_JSON: &str = include_str!("../data/knowledge_base.json");

#[derive(Debug, Clone)]
pub struct SeedData {
    pub complaints: Vec<Record>,
    pub success_stories: Vec<Record>,
    pub lawyers: Vec<Lawyer>,
    pub knowledge_base: Vec<KnowledgeCategory>,
}

impl SeedData {
    pub fn load() -> Result<Self, ServerError> {
        let complaints: Vec<Record> = parse("complaints.json", COMPLAINTS_JSON)?;
        let success_stories: Vec<Record> = parse("success_stories.json", SUCCESS_STORIES_JSON)?;

        ensure_unique_ids("complaints.json", complaints.iter().map(|r| r.id))?;
        ensure_unique_ids("success_stories.json", success_stories.iter().map(|r| r.id))?;

        if let Some(r) = complaints.iter().find(|r| r.status.is_none()) {
            return Err(ServerError::Seed(format!(
                "complaints.json: record {} has no status",
                r.id
            )));
        }

        let lawyers: Vec<Lawyer> = parse("lawyers.json", LAWYERS_JSON)?;
        ensure_unique_ids("lawyers.json", lawyers.iter().map(|l| l.id))?;

        Ok(Self {
            complaints,
            success_stories,
            lawyers,
            knowledge_base: parse("knowledge_base.json", KNOWLEDGE_BASE_JSON)?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, ServerError> {
    serde_json::from_str(raw).map_err(|e| ServerError::Seed(format!("{name}: {e}")))
}

fn ensure_unique_ids(name: &str, ids: impl Iterator<Item = u32>) -> Result<(), ServerError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ServerError::Seed(format!("{name}: duplicate id {id}")));
        }
    }
    Ok(())
}
