use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
	pub title: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub featured: bool,
	#[serde(default)]
	pub previous_episodes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
	#[serde(default)]
	pub show_title: Option<String>,
	pub title: String,
	/// Site-relative path, routable as-is.
	pub path: String,
	#[serde(default)]
	pub image: Option<String>,
}
