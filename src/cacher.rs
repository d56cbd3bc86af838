use crate::models::InitialState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::{read, write};
use std::io::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Serialize, Deserialize)]
struct Entry {
	/// Milliseconds since the epoch.
	fetched_at: u64,
	state: Value,
}

/// Initial states keyed by page URL, kept for a fixed time-to-live.
pub struct PageCache {
	ttl: Duration,
	path: Option<PathBuf>,
	entries: HashMap<String, Entry>,
}

fn now_millis() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|d| d.as_millis() as u64)
		.unwrap_or(0)
}

fn read_entries(path: &Path) -> Result<HashMap<String, Entry>> {
	let bytes = read(path)?;
	Ok(serde_json::from_slice(&bytes)?)
}

impl PageCache {
	pub fn in_memory(ttl: Duration) -> Self {
		PageCache {
			ttl,
			path: None,
			entries: HashMap::new(),
		}
	}

	/// Loads a persisted cache. A missing or unreadable file starts empty.
	pub fn load(path: impl Into<PathBuf>, ttl: Duration) -> Self {
		let path = path.into();
		let mut cache = PageCache {
			ttl,
			entries: HashMap::new(),
			path: None,
		};
		match read_entries(&path) {
			Ok(entries) => cache.entries = entries,
			Err(err) => tracing::debug!(path = %path.display(), %err, "starting with an empty page cache"),
		}
		cache.path = Some(path);
		let now = now_millis();
		cache.entries.retain(|_, entry| cache_is_fresh(entry, ttl, now));
		cache
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, url: &str) -> Option<InitialState> {
		self.entries
			.get(url)
			.filter(|entry| cache_is_fresh(entry, self.ttl, now_millis()))
			.map(|entry| InitialState::from(entry.state.clone()))
	}

	pub fn insert(&mut self, url: impl Into<String>, state: &InitialState) {
		let entry = Entry {
			fetched_at: now_millis(),
			state: state.as_value().clone(),
		};
		self.entries.insert(url.into(), entry);
		if let Err(err) = self.persist() {
			tracing::warn!(%err, "could not persist page cache");
		}
	}

	fn persist(&self) -> Result<()> {
		let Some(path) = &self.path else {
			return Ok(());
		};
		let now = now_millis();
		let fresh: HashMap<&String, &Entry> = self
			.entries
			.iter()
			.filter(|(_, entry)| cache_is_fresh(entry, self.ttl, now))
			.collect();
		write(path, serde_json::to_vec(&fresh)?)
	}
}

fn cache_is_fresh(entry: &Entry, ttl: Duration, now: u64) -> bool {
	Duration::from_millis(now.saturating_sub(entry.fetched_at)) < ttl
}
