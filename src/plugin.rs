use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetcher::Fetcher;
use crate::item::MenuItem;
use crate::menu::Menu;
use crate::models::InitialState;
use crate::router::Route;

/// How many folders `resolve` descends through before giving up.
pub const MAX_RESOLVE_HOPS: usize = 8;

pub struct Plugin {
	config: Config,
	fetcher: Fetcher,
}

impl Plugin {
	pub fn new(config: Config) -> Result<Self> {
		let fetcher = Fetcher::new(&config)?;
		Ok(Plugin { config, fetcher })
	}

	async fn page(&self, path: &str) -> Result<InitialState> {
		self.fetcher.initial_state(&self.config.page_url(path)).await
	}

	/// Items of the menu at a plugin path such as `/shows/?category=all`.
	pub async fn list(&self, path: &str) -> Result<Vec<MenuItem>> {
		let route = Route::parse(path)?;
		self.dispatch(&route).await
	}

	pub async fn dispatch(&self, route: &Route) -> Result<Vec<MenuItem>> {
		tracing::debug!(%route, "dispatching");
		let thumb_query = self.config.thumb_query.as_deref();
		match route {
			Route::Index => {
				let state = self.page("/").await?;
				Menu::new(&state, thumb_query).index()
			}
			Route::Channels => {
				let state = self.page("/channels").await?;
				Menu::new(&state, thumb_query).channels(false)
			}
			Route::Channel { slug } => {
				let mut state = self.page("/").await?;
				if !state.has_channel(slug) {
					state = self.page(&format!("/channels/{}", slug)).await?;
				}
				Menu::new(&state, thumb_query).channel(slug)
			}
			Route::Shows { category } => {
				let state = self.page("/shows").await?;
				Menu::new(&state, thumb_query).shows(category.as_deref())
			}
			Route::Show { slug } => {
				let state = self.page(&format!("/shows/{}", slug)).await?;
				Menu::new(&state, thumb_query).show(slug)
			}
			Route::Episode { show, slug } => {
				let state = self
					.page(&format!("/shows/{}/episodes/{}", show, slug))
					.await?;
				Menu::new(&state, thumb_query).episode(show, slug)
			}
			Route::OnDemand { filter } => {
				let state = self.page("/").await?;
				Menu::new(&state, thumb_query).on_demand(filter.as_deref())
			}
			Route::OnDemandGenre { genre } => {
				let state = self.page(&format!("/on-demand/genres/{}", genre)).await?;
				Menu::new(&state, thumb_query).on_demand_genre(genre)
			}
			Route::Search { query, category } => {
				let query = query.as_deref().ok_or(Error::MissingQuery)?;
				let url = self.config.search_url(query);
				let state = self.fetcher.initial_state(&url).await?;
				Menu::new(&state, thumb_query).search(query, category.as_deref())
			}
		}
	}

	/// Stream URL reached by playing the first entry of a menu, descending into folders.
	pub async fn resolve(&self, path: &str) -> Result<String> {
		self.resolve_from(path, 0).await
	}

	#[async_recursion::async_recursion]
	async fn resolve_from(&self, path: &str, hops: usize) -> Result<String> {
		if hops >= MAX_RESOLVE_HOPS {
			return Err(Error::TooManyHops(path.to_owned()));
		}
		let items = self.list(path).await?;
		if let Some(item) = items.iter().find(|item| item.is_playable) {
			return Ok(item.path.clone());
		}
		match items.first() {
			Some(item) if item.is_internal() => {
				tracing::debug!(from = path, to = %item.path, "descending");
				self.resolve_from(&item.path, hops + 1).await
			}
			_ => Err(Error::NotPlayable(path.to_owned())),
		}
	}
}
