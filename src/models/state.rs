use super::channel::{Channel, Timeslot};
use super::episode::Episode;
use super::show::{SearchResult, Show};
use crate::error::{OkOrMissing, Result};
use crate::util::extract_between;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

const STATE_START: &str = "<script>window.__INITIAL_STATE__ = ";
const STATE_END: &str = "</script>";

/// The `window.__INITIAL_STATE__` object a page ships with.
#[derive(Debug, Clone)]
pub struct InitialState(Value);

impl From<Value> for InitialState {
	fn from(value: Value) -> Self {
		InitialState(value)
	}
}

impl InitialState {
	pub fn from_html(html: &str) -> Result<Self> {
		let json = extract_between(html, STATE_START, STATE_END)?;
		Ok(InitialState(serde_json::from_str(json)?))
	}

	pub fn as_value(&self) -> &Value {
		&self.0
	}

	fn lookup(&self, path: &[&str]) -> Option<&Value> {
		path.iter().try_fold(&self.0, |value, key| value.get(key))
	}

	fn get(&self, path: &[&str]) -> Result<&Value> {
		self.lookup(path).ok_or_missing(path.join("."))
	}

	fn parse<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
		Ok(T::deserialize(self.get(path)?)?)
	}

	/// Slugs listed under `indexes.<kind>`, in site order.
	pub fn index(&self, kind: &str) -> Result<Vec<String>> {
		self.parse(&["indexes", kind])
	}

	pub fn has_channel(&self, slug: &str) -> bool {
		self.lookup(&["channels", slug]).is_some()
	}

	pub fn channel(&self, slug: &str) -> Result<Channel> {
		self.parse(&["channels", slug])
	}

	pub fn main_timeslot(&self) -> Result<Timeslot> {
		self.parse(&["channels", "main", "currentTimeslot"])
	}

	pub fn has_episode(&self, show: &str, slug: &str) -> bool {
		self.lookup(&["episodes", show, slug]).is_some()
	}

	pub fn episode(&self, show: &str, slug: &str) -> Result<Episode> {
		self.parse(&["episodes", show, slug])
	}

	pub fn show(&self, slug: &str) -> Result<Show> {
		self.parse(&["shows", slug])
	}

	pub fn on_demand_episodes(&self, filter: &str) -> Result<Vec<Episode>> {
		self.parse(&["onDemand", filter, "episodes"])
	}

	pub fn on_demand_genres(&self) -> Result<Vec<String>> {
		let by_genre = self.get(&["onDemand", "byGenre"])?;
		let genres = by_genre
			.as_object()
			.ok_or_missing("onDemand.byGenre")?;
		Ok(genres.keys().cloned().collect())
	}

	pub fn genre_episodes(&self, genre: &str) -> Result<Vec<Episode>> {
		self.parse(&["onDemand", "byGenre", genre, "episodes"])
	}

	/// Every result category with its hits, in site order.
	pub fn search_results(&self) -> Result<Vec<(String, Vec<SearchResult>)>> {
		let results = self.get(&["search", "results"])?;
		let categories = results.as_object().ok_or_missing("search.results")?;
		categories
			.iter()
			.map(|(category, hits)| -> Result<(String, Vec<SearchResult>)> {
				Ok((category.clone(), Vec::deserialize(hits)?))
			})
			.collect()
	}

	pub fn search_category(&self, category: &str) -> Result<Vec<SearchResult>> {
		self.parse(&["search", "results", category])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use serde_json::json;

	#[test]
	fn parses_state_embedded_in_html() {
		let html = r#"<html><head><script>window.__INITIAL_STATE__ = {"indexes":{"show":["a","b"]}}</script></head></html>"#;
		let state = InitialState::from_html(html).unwrap();
		assert_eq!(state.index("show").unwrap(), vec!["a", "b"]);
	}

	#[test]
	fn html_without_state_fails() {
		let err = InitialState::from_html("<html><script>var x = 1</script></html>").unwrap_err();
		assert!(matches!(err, Error::MarkerNotFound(_)));
	}

	#[test]
	fn missing_keys_name_their_path() {
		let state = InitialState::from(json!({ "episodes": { "show": {} } }));
		let err = state.episode("show", "nope").unwrap_err();
		assert!(matches!(err, Error::MissingKey(path) if path == "episodes.show.nope"));
	}

	#[test]
	fn search_categories_keep_site_order() {
		let state = InitialState::from(json!({
			"search": { "results": {
				"shows": [],
				"episodes": [{ "title": "t", "path": "/p" }]
			}}
		}));
		let categories: Vec<_> = state
			.search_results()
			.unwrap()
			.into_iter()
			.map(|(name, hits)| (name, hits.len()))
			.collect();
		assert_eq!(categories, vec![("shows".to_owned(), 0), ("episodes".to_owned(), 1)]);
	}
}
