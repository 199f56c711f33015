use anyhow::{Context, Result};
use search_core::{
    paginate, Document, DocumentStatus, NormalizingTokenizer, RequestQueue, SearchConfig, SearchIndex, StopWords,
    Tokenizer, WhitespaceTokenizer,
};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: i32,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub total_hits: usize,
    pub pages: Vec<Vec<Document>>,
}

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub queries: Vec<QueryReport>,
    pub no_result_requests: usize,
}

pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Input files under `input`: the file itself, or every `.json`/`.jsonl` below a directory.
pub fn collect_files(input: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

pub fn load_documents(input: &Path) -> Result<Vec<InputDoc>> {
    let mut docs = Vec::new();
    for file in collect_files(input) {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            load_jsonl(&file, &mut docs)?;
        } else {
            load_json(&file, &mut docs)?;
        }
    }
    tracing::info!(input = %input.display(), documents = docs.len(), "loaded corpus");
    Ok(docs)
}

fn load_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc = serde_json::from_str(&line).with_context(|| format!("{}:{}", file.display(), n + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let reader = BufReader::new(File::open(file).with_context(|| format!("opening {}", file.display()))?);
    let json: serde_json::Value = serde_json::from_reader(reader).with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => anyhow::bail!("{}: expected a document object or an array of them", file.display()),
    }
    Ok(())
}

pub fn build_index(docs: &[InputDoc], stop_words: &str, normalize: bool, config: SearchConfig) -> Result<SearchIndex> {
    let tokenizer: Box<dyn Tokenizer> = if normalize { Box::new(NormalizingTokenizer) } else { Box::new(WhitespaceTokenizer) };
    let mut index = SearchIndex::with_options(StopWords::from_text(stop_words)?, tokenizer, config);
    for doc in docs {
        index
            .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
            .with_context(|| format!("adding document {}", doc.id))?;
    }
    Ok(index)
}

/// Runs every query through one request queue and splits each result list into pages.
pub fn run_queries(index: &SearchIndex, queries: &[String], status: DocumentStatus, page_size: usize) -> Result<SearchReport> {
    let mut queue = RequestQueue::new(index);
    let mut reports = Vec::with_capacity(queries.len());
    for query in queries {
        let hits = queue.add_find_request_by_status(query, status).with_context(|| format!("query {query:?}"))?;
        let pages = paginate(&hits, page_size)?.iter().map(|page| page.items().to_vec()).collect();
        reports.push(QueryReport { query: query.clone(), total_hits: hits.len(), pages });
    }
    Ok(SearchReport { queries: reports, no_result_requests: queue.no_result_requests() })
}
