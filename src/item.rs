use crate::error::Result;
use crate::models::Episode;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Info {
	#[serde(skip_serializing_if = "String::is_empty")]
	pub genre: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub plot: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub premiered: Option<String>,
}

/// One entry of a menu: either a folder pointing at another route or a playable stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
	pub label: String,
	pub path: String,
	pub is_playable: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub poster: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub info_type: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub info: Option<Info>,
}

impl MenuItem {
	pub fn folder(label: impl Into<String>, path: impl Into<String>) -> Self {
		MenuItem {
			label: label.into(),
			path: path.into(),
			is_playable: false,
			icon: None,
			thumbnail: None,
			poster: None,
			info_type: None,
			info: None,
		}
	}

	pub fn playable(label: impl Into<String>, path: impl Into<String>) -> Self {
		MenuItem {
			is_playable: true,
			..Self::folder(label, path)
		}
	}

	pub fn with_icon(mut self, url: String) -> Self {
		self.thumbnail = Some(url.clone());
		self.icon = Some(url);
		self
	}

	pub fn with_genre(mut self, genre: String) -> Self {
		self.info_type = Some("music");
		self.info.get_or_insert_with(Info::default).genre = genre;
		self
	}

	pub fn is_internal(&self) -> bool {
		self.path.starts_with('/')
	}
}

pub fn sized(url: String, thumb_query: Option<&str>) -> String {
	match thumb_query {
		Some(query) if !query.is_empty() => {
			let sep = if url.contains('?') { '&' } else { '?' };
			format!("{}{}{}", url, sep, query.trim_start_matches(['?', '&']))
		}
		_ => url,
	}
}

/// Builds the playable item for an episode. `owner` names the episode in errors.
pub fn episode_item(
	episode: &Episode,
	label: impl Into<String>,
	owner: &str,
	thumb_query: Option<&str>,
) -> Result<MenuItem> {
	let image = sized(episode.image_url.preferred(owner)?, thumb_query);
	let mut item = MenuItem::playable(label, episode.audio_url.clone())
		.with_icon(image)
		.with_genre(episode.genre_label());
	item.poster = episode.image_url.portrait();
	if let Some(info) = item.info.as_mut() {
		info.duration = episode.duration.map(|secs| secs.round() as u64);
		info.plot = episode.description.clone();
		info.premiered = episode.premiere_date.clone();
	}
	Ok(item)
}
