use crate::error::{Error, Result};
use crate::util::{title_case, with_scheme};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageUrls {
	#[serde(default)]
	pub landscape: Option<String>,
	#[serde(default)]
	pub portrait: Option<String>,
}

impl ImageUrls {
	/// Picks the landscape variant, falling back to portrait. Empty strings count as absent.
	pub fn preferred(&self, owner: &str) -> Result<String> {
		self.landscape
			.as_deref()
			.filter(|url| !url.is_empty())
			.or_else(|| self.portrait.as_deref().filter(|url| !url.is_empty()))
			.map(with_scheme)
			.ok_or_else(|| Error::MissingImage(owner.to_owned()))
	}

	pub fn portrait(&self) -> Option<String> {
		self.portrait
			.as_deref()
			.filter(|url| !url.is_empty())
			.map(with_scheme)
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
	pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
	pub title: String,
	#[serde(default)]
	pub show_title: Option<String>,
	#[serde(rename = "audioURL")]
	pub audio_url: String,
	#[serde(rename = "imageURL", default)]
	pub image_url: ImageUrls,
	#[serde(default)]
	pub genres: Vec<Genre>,
	/// Seconds.
	#[serde(default)]
	pub duration: Option<f64>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub premiere_date: Option<String>,
}

impl Episode {
	/// Comma-separated, title-cased genre titles.
	pub fn genre_label(&self) -> String {
		join_genres(&self.genres)
	}

	/// "<show title>:<episode title>", or just the title when the show is unknown.
	pub fn qualified_title(&self) -> String {
		match &self.show_title {
			Some(show) => format!("{}:{}", show, self.title),
			None => self.title.clone(),
		}
	}
}

pub fn join_genres(genres: &[Genre]) -> String {
	genres
		.iter()
		.map(|genre| title_case(&genre.title))
		.collect::<Vec<_>>()
		.join(", ")
}

/// A `{showSlug, slug}` pointer into the `episodes` map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRef {
	pub show_slug: String,
	pub slug: String,
}
