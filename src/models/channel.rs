use super::episode::EpisodeRef;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
	pub title: String,
	pub current_episode: String,
	#[serde(rename = "streamURL")]
	pub stream_url: String,
	pub show_slug: String,
	/// Recently aired episodes, only present on the channel's own page.
	#[serde(default)]
	pub episodes: Vec<EpisodeRef>,
}

/// What the main channel is broadcasting right now.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeslot {
	pub episode: String,
	pub show_slug: String,
}
