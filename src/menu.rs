use crate::error::{Error, Result};
use crate::item::{episode_item, sized, MenuItem};
use crate::models::{Episode, InitialState};
use crate::router::Route;
use crate::util::{humanize_slug, title_case, with_scheme};

/// The main channel's live broadcast.
pub const ON_AIR_STREAM_URL: &str = "http://broadcast.rbmaradio.net/main";

const SECTIONS: &[&str] = &["channels", "shows", "on-demand", "search"];
const ON_DEMAND_MENUS: &[(&str, &str)] = &[
	("Latest", "latest"),
	("Featured", "featured"),
	("Genres", "byGenre"),
];

pub struct Menu<'a> {
	state: &'a InitialState,
	thumb_query: Option<&'a str>,
}

impl<'a> Menu<'a> {
	pub fn new(state: &'a InitialState, thumb_query: Option<&'a str>) -> Self {
		Menu { state, thumb_query }
	}

	fn episode_item(&self, episode: &Episode, label: String, owner: &str) -> Result<MenuItem> {
		episode_item(episode, label, owner, self.thumb_query)
	}

	fn episode_image(&self, episode: &Episode, owner: &str) -> Result<String> {
		Ok(sized(episode.image_url.preferred(owner)?, self.thumb_query))
	}

	pub fn index(&self) -> Result<Vec<MenuItem>> {
		let slot = self.state.main_timeslot()?;
		let episode = self.state.episode(&slot.show_slug, &slot.episode)?;
		let owner = format!("{}/{}", slot.show_slug, slot.episode);

		let mut items = vec![MenuItem::playable("On Air", ON_AIR_STREAM_URL)
			.with_icon(self.episode_image(&episode, &owner)?)
			.with_genre(episode.genre_label())];

		for section in SECTIONS {
			items.push(MenuItem::folder(humanize_slug(section), section_route(section).to_string()));
		}

		items.extend(self.channels(true)?);
		Ok(items)
	}

	pub fn channels(&self, featured: bool) -> Result<Vec<MenuItem>> {
		let mut items = Vec::new();
		for slug in self.state.index("channel")? {
			if slug == "main" || !self.state.has_channel(&slug) {
				continue;
			}
			let channel = self.state.channel(&slug)?;
			let episode = self.state.episode(&channel.show_slug, &channel.current_episode)?;
			let owner = format!("{}/{}", channel.show_slug, channel.current_episode);

			let item = if featured {
				MenuItem::playable(format!("Channel:{}", channel.title), channel.stream_url)
			} else {
				MenuItem::folder(channel.title, Route::Channel { slug }.to_string())
			};
			items.push(
				item.with_icon(self.episode_image(&episode, &owner)?)
					.with_genre(episode.genre_label()),
			);
		}
		Ok(items)
	}

	pub fn channel(&self, slug: &str) -> Result<Vec<MenuItem>> {
		let channel = self.state.channel(slug)?;
		let current = self.state.episode(&channel.show_slug, &channel.current_episode)?;
		let owner = format!("{}/{}", channel.show_slug, channel.current_episode);
		let mut items = vec![self.episode_item(&current, format!("Current-{}", current.title), &owner)?];

		for pointer in &channel.episodes {
			if !self.state.has_episode(&pointer.show_slug, &pointer.slug) {
				continue;
			}
			let episode = self.state.episode(&pointer.show_slug, &pointer.slug)?;
			let owner = format!("{}/{}", pointer.show_slug, pointer.slug);
			let item = self.episode_item(&episode, episode.qualified_title(), &owner)?;
			if !items.contains(&item) {
				items.push(item);
			}
		}
		Ok(items)
	}

	/// Without a category: featured shows and one entry per category.
	/// `all` lists every show alphabetically.
	pub fn shows(&self, category: Option<&str>) -> Result<Vec<MenuItem>> {
		let mut featured = Vec::new();
		let mut categories: Vec<(Option<String>, Vec<MenuItem>)> = Vec::new();

		for slug in self.state.index("show")? {
			let show = self.state.show(&slug)?;
			let item = MenuItem::folder(show.title, Route::Show { slug }.to_string());
			if show.featured {
				featured.push(item.clone());
			}
			match categories.iter_mut().find(|(name, _)| *name == show.category) {
				Some((_, shows)) => shows.push(item),
				None => categories.push((show.category, vec![item])),
			}
		}

		match category {
			None => {
				let mut items: Vec<MenuItem> = featured
					.into_iter()
					.map(|mut item| {
						item.label = format!("Featured:{}", item.label);
						item
					})
					.collect();
				let names = categories
					.into_iter()
					.filter_map(|(name, _)| name)
					.chain(std::iter::once("all".to_owned()));
				for name in names {
					let label = humanize_slug(&name);
					let path = Route::Shows { category: Some(name) }.to_string();
					items.push(MenuItem::folder(label, path));
				}
				Ok(items)
			}
			Some("all") => {
				let mut items: Vec<MenuItem> = categories
					.into_iter()
					.flat_map(|(_, shows)| shows)
					.collect();
				items.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.path.cmp(&b.path)));
				items.dedup_by(|a, b| a.path == b.path);
				Ok(items)
			}
			Some(wanted) => categories
				.into_iter()
				.find(|(name, _)| name.as_deref() == Some(wanted))
				.map(|(_, shows)| shows)
				.ok_or_else(|| Error::UnknownCategory(wanted.to_owned())),
		}
	}

	pub fn show(&self, slug: &str) -> Result<Vec<MenuItem>> {
		let show = self.state.show(slug)?;
		show.previous_episodes
			.iter()
			.map(|episode_slug| {
				let episode = self.state.episode(slug, episode_slug)?;
				let owner = format!("{}/{}", slug, episode_slug);
				self.episode_item(&episode, episode.title.clone(), &owner)
			})
			.collect()
	}

	pub fn episode(&self, show: &str, slug: &str) -> Result<Vec<MenuItem>> {
		let episode = self.state.episode(show, slug)?;
		let owner = format!("{}/{}", show, slug);
		Ok(vec![self.episode_item(&episode, episode.title.clone(), &owner)?])
	}

	pub fn on_demand(&self, filter: Option<&str>) -> Result<Vec<MenuItem>> {
		match filter {
			None => Ok(ON_DEMAND_MENUS
				.iter()
				.map(|(label, menu)| {
					let path = Route::OnDemand {
						filter: Some((*menu).to_owned()),
					};
					MenuItem::folder(*label, path.to_string())
				})
				.collect()),
			Some("byGenre") => Ok(self
				.state
				.on_demand_genres()?
				.into_iter()
				.map(|genre| {
					let label = humanize_slug(&genre);
					MenuItem::folder(label, Route::OnDemandGenre { genre }.to_string())
				})
				.collect()),
			Some(filter) => self.episode_list(self.state.on_demand_episodes(filter)?),
		}
	}

	pub fn on_demand_genre(&self, genre: &str) -> Result<Vec<MenuItem>> {
		self.episode_list(self.state.genre_episodes(genre)?)
	}

	fn episode_list(&self, episodes: Vec<Episode>) -> Result<Vec<MenuItem>> {
		episodes
			.iter()
			.map(|episode| self.episode_item(episode, episode.qualified_title(), &episode.title))
			.collect()
	}

	pub fn search(&self, query: &str, category: Option<&str>) -> Result<Vec<MenuItem>> {
		let Some(category) = category else {
			return Ok(self
				.state
				.search_results()?
				.into_iter()
				.filter(|(_, hits)| !hits.is_empty())
				.map(|(name, hits)| {
					let label = format!("{} ({})", title_case(&name), hits.len());
					let path = Route::Search {
						query: Some(query.to_owned()),
						category: Some(name),
					};
					MenuItem::folder(label, path.to_string())
				})
				.collect());
		};

		Ok(self
			.state
			.search_category(category)?
			.into_iter()
			.map(|hit| {
				let show = hit.show_title.unwrap_or_else(|| title_case(category));
				let item = MenuItem::folder(format!("{}:{}", show, hit.title), hit.path);
				match hit.image.as_deref().filter(|url| !url.is_empty()) {
					Some(image) => item.with_icon(sized(with_scheme(image), self.thumb_query)),
					None => item,
				}
			})
			.collect())
	}
}

fn section_route(section: &str) -> Route {
	match section {
		"channels" => Route::Channels,
		"shows" => Route::Shows { category: None },
		"on-demand" => Route::OnDemand { filter: None },
		_ => Route::Search {
			query: None,
			category: None,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> InitialState {
		let json = include_str!("../tests/fixtures/state.json");
		InitialState::from(serde_json::from_str::<serde_json::Value>(json).unwrap())
	}

	fn labels_and_paths(items: &[MenuItem]) -> Vec<(&str, &str)> {
		items
			.iter()
			.map(|item| (item.label.as_str(), item.path.as_str()))
			.collect()
	}

	#[test]
	fn index_lists_live_stream_sections_and_featured_channels() {
		let state = state();
		let items = Menu::new(&state, None).index().unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![
				("On Air", ON_AIR_STREAM_URL),
				("Channels", "/channels"),
				("Shows", "/shows/"),
				("On Demand", "/on-demand"),
				("Search", "/search"),
				("Channel:Beats", "http://stream/beats"),
				("Channel:Talk", "http://stream/talk"),
			]
		);
		assert!(items[0].is_playable);
		assert_eq!(items[0].icon.as_deref(), Some("http://img/night-l.jpg"));
		assert!(items[1..5].iter().all(|item| !item.is_playable));
		assert!(items[5].is_playable);
		assert_eq!(items[5].info.as_ref().unwrap().genre, "Ambient, Hip-Hop");
	}

	#[test]
	fn channel_listing_links_to_channel_pages() {
		let state = state();
		let items = Menu::new(&state, None).channels(false).unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![("Beats", "/channels/beats"), ("Talk", "/channels/talk")]
		);
		assert!(items.iter().all(|item| !item.is_playable));
	}

	#[test]
	fn channel_lists_current_then_distinct_recent_episodes() {
		let state = state();
		let items = Menu::new(&state, None).channel("beats").unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![
				("Current-Sunrise", "http://audio/sunrise.mp3"),
				("Late Show:Night Shift", "http://audio/night.mp3"),
				("Late Show:After Hours", "http://audio/after.mp3"),
			]
		);
		// Each entry carries its own artwork.
		assert_eq!(items[1].icon.as_deref(), Some("http://img/night-l.jpg"));
		assert_eq!(items[2].icon.as_deref(), Some("http://img/after-p.jpg"));
	}

	#[test]
	fn shows_without_category_lists_featured_and_categories() {
		let state = state();
		let items = Menu::new(&state, None).shows(None).unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![
				("Featured:Late Show", "/shows/late-show"),
				("Music", "/shows/?category=music"),
				("Talk Radio", "/shows/?category=talk-radio"),
				("All", "/shows/?category=all"),
			]
		);
	}

	#[test]
	fn shows_in_all_categories_are_sorted() {
		let state = state();
		let items = Menu::new(&state, None).shows(Some("all")).unwrap();
		let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
		assert_eq!(labels, vec!["Aardvark Hour", "Late Show", "Morning", "Talk Time"]);
	}

	#[test]
	fn shows_of_one_category_keep_index_order() {
		let state = state();
		let menu = Menu::new(&state, None);
		let items = menu.shows(Some("music")).unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![("Late Show", "/shows/late-show"), ("Morning", "/shows/morning")]
		);
		assert!(matches!(
			menu.shows(Some("jazz")),
			Err(Error::UnknownCategory(name)) if name == "jazz"
		));
	}

	#[test]
	fn show_lists_previous_episodes() {
		let state = state();
		let items = Menu::new(&state, Some("w=300")).show("late-show").unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![
				("Night Shift", "http://audio/night.mp3"),
				("After Hours", "http://audio/after.mp3"),
			]
		);
		assert_eq!(items[0].icon.as_deref(), Some("http://img/night-l.jpg?w=300"));
		let info = items[0].info.as_ref().unwrap();
		assert_eq!(info.genre, "Techno");
		assert_eq!(info.duration, Some(3600));
		assert_eq!(info.premiered.as_deref(), Some("2017-03-01"));
	}

	#[test]
	fn episode_is_a_single_playable_item() {
		let state = state();
		let items = Menu::new(&state, None).episode("morning", "sunrise").unwrap();
		assert_eq!(labels_and_paths(&items), vec![("Sunrise", "http://audio/sunrise.mp3")]);
		assert!(items[0].is_playable);
	}

	#[test]
	fn on_demand_menus() {
		let state = state();
		let menu = Menu::new(&state, None);
		assert_eq!(
			labels_and_paths(&menu.on_demand(None).unwrap()),
			vec![
				("Latest", "/on-demand?filter=latest"),
				("Featured", "/on-demand?filter=featured"),
				("Genres", "/on-demand?filter=byGenre"),
			]
		);
		assert_eq!(
			labels_and_paths(&menu.on_demand(Some("byGenre")).unwrap()),
			vec![
				("Hip Hop", "/on-demand/genres/hip-hop"),
				("Deep House", "/on-demand/genres/deep-house"),
			]
		);
		let latest = menu.on_demand(Some("latest")).unwrap();
		assert_eq!(
			labels_and_paths(&latest),
			vec![
				("Talk Time:Chat", "http://audio/chat.mp3"),
				("Morning:Sunrise", "http://audio/sunrise.mp3"),
			]
		);
		assert_eq!(latest[0].icon.as_deref(), Some("http://img/chat-p.jpg"));
		assert!(menu.on_demand(Some("featured")).unwrap().is_empty());
	}

	#[test]
	fn on_demand_genre_lists_episodes() {
		let state = state();
		let items = Menu::new(&state, None).on_demand_genre("hip-hop").unwrap();
		assert_eq!(labels_and_paths(&items), vec![("Morning:Sunrise", "http://audio/sunrise.mp3")]);
		assert_eq!(items[0].info.as_ref().unwrap().genre, "Hip-Hop");
	}

	#[test]
	fn search_counts_non_empty_categories() {
		let state = state();
		let items = Menu::new(&state, None).search("late night", None).unwrap();
		assert_eq!(
			labels_and_paths(&items),
			vec![
				("Shows (1)", "/search?q=late+night&category=shows"),
				("Episodes (1)", "/search?q=late+night&category=episodes"),
			]
		);
	}

	#[test]
	fn search_category_lists_routable_hits() {
		let state = state();
		let menu = Menu::new(&state, None);
		let shows = menu.search("late", Some("shows")).unwrap();
		assert_eq!(labels_and_paths(&shows), vec![("Shows:Late Show", "/shows/late-show")]);
		assert_eq!(shows[0].icon.as_deref(), Some("http://img/late.jpg"));

		let episodes = menu.search("late", Some("episodes")).unwrap();
		assert_eq!(
			labels_and_paths(&episodes),
			vec![("Late Show:Night Shift", "/shows/late-show/episodes/night-shift")]
		);
		assert!(episodes[0].is_internal());
		assert!(episodes[0].icon.is_none());

		assert!(matches!(
			menu.search("late", Some("artists")),
			Err(Error::MissingKey(path)) if path == "search.results.artists"
		));
	}
}
