use crate::cacher::PageCache;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::InitialState;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

/// Downloads pages and pulls out their initial state, going through the page cache.
pub struct Fetcher {
	net: Client,
	cache: Mutex<PageCache>,
}

impl Fetcher {
	pub fn new(config: &Config) -> Result<Fetcher> {
		// The site's certificate chain is not verified.
		let net = Client::builder()
			.danger_accept_invalid_certs(true)
			.user_agent(config.user_agent.as_str())
			.build()?;
		let cache = match &config.cache_file {
			Some(path) => PageCache::load(path, config.cache_ttl),
			None => PageCache::in_memory(config.cache_ttl),
		};
		Ok(Fetcher {
			net,
			cache: Mutex::new(cache),
		})
	}

	async fn get_as_string(&self, url: &str) -> Result<String> {
		let result = self.net.get(url).send().await?;
		let status = result.status();
		if status != StatusCode::OK {
			return Err(Error::Status(status));
		}
		let text = result.text().await?;
		Ok(text)
	}

	pub async fn initial_state(&self, url: &str) -> Result<InitialState> {
		if let Some(state) = self.cache.lock().await.get(url) {
			tracing::debug!(url, "page cache hit");
			return Ok(state);
		}

		tracing::info!(url, "fetching page");
		let html = self.get_as_string(url).await?;
		let state = InitialState::from_html(&html)?;
		self.cache.lock().await.insert(url, &state);
		Ok(state)
	}
}
