use std::path::PathBuf;
use std::time::Duration;
use url::form_urlencoded;

pub const DEFAULT_BASE_URL: &str = "https://redbullradio.com";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_USER_AGENT: &str = concat!("rbradio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Config {
	/// Site root every page path is appended to.
	pub base_url: String,
	pub cache_ttl: Duration,
	/// Where fetched pages survive between runs. In-memory only when unset.
	pub cache_file: Option<PathBuf>,
	/// Query string appended to artwork URLs, e.g. `w=500`.
	pub thumb_query: Option<String>,
	pub user_agent: String,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			base_url: DEFAULT_BASE_URL.to_owned(),
			cache_ttl: DEFAULT_CACHE_TTL,
			cache_file: None,
			thumb_query: None,
			user_agent: DEFAULT_USER_AGENT.to_owned(),
		}
	}
}

impl Config {
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
		self.cache_ttl = ttl;
		self
	}

	pub fn with_cache_file(mut self, path: impl Into<PathBuf>) -> Self {
		self.cache_file = Some(path.into());
		self
	}

	pub fn with_thumb_query(mut self, query: impl Into<String>) -> Self {
		self.thumb_query = Some(query.into());
		self
	}

	pub fn page_url(&self, path: &str) -> String {
		format!("{}{}", self.base_url.trim_end_matches('/'), path)
	}

	pub fn search_url(&self, query: &str) -> String {
		let query: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
		self.page_url(&format!("/search?q={}", query))
	}
}
