use crate::error::{Error, Result};
use std::fmt::{self, Display, Formatter};
use url::form_urlencoded;

lazy_static! {
	static ref CHANNEL_ROUTE: regex::Regex = regex::Regex::new(r"^/channels/([^/]+)$").unwrap();
	static ref SHOW_ROUTE: regex::Regex = regex::Regex::new(r"^/shows/([^/]+)$").unwrap();
	static ref EPISODE_ROUTE: regex::Regex =
		regex::Regex::new(r"^/shows/([^/]+)/episodes/([^/]+)$").unwrap();
	static ref GENRE_ROUTE: regex::Regex =
		regex::Regex::new(r"^/on-demand/genres/([^/]+)$").unwrap();
}

/// A menu node, as addressed by a plugin path such as `/shows/?category=all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Index,
	Channels,
	Channel { slug: String },
	Shows { category: Option<String> },
	Show { slug: String },
	Episode { show: String, slug: String },
	OnDemand { filter: Option<String> },
	OnDemandGenre { genre: String },
	Search { query: Option<String>, category: Option<String> },
}

fn query_arg(query: &str, key: &str) -> Option<String> {
	form_urlencoded::parse(query.as_bytes())
		.find(|(k, _)| k == key)
		.map(|(_, v)| v.into_owned())
		.filter(|v| !v.is_empty())
}

impl Route {
	pub fn parse(path: &str) -> Result<Route> {
		let (path_part, query) = path.split_once('?').unwrap_or((path, ""));
		let trimmed = path_part.trim_end_matches('/');

		let route = match trimmed {
			"" => Route::Index,
			"/channels" => Route::Channels,
			"/shows" => Route::Shows {
				category: query_arg(query, "category"),
			},
			"/on-demand" => Route::OnDemand {
				filter: query_arg(query, "filter"),
			},
			"/search" => Route::Search {
				query: query_arg(query, "q"),
				category: query_arg(query, "category"),
			},
			_ => {
				if let Some(caps) = CHANNEL_ROUTE.captures(trimmed) {
					Route::Channel {
						slug: caps[1].to_owned(),
					}
				} else if let Some(caps) = EPISODE_ROUTE.captures(trimmed) {
					Route::Episode {
						show: caps[1].to_owned(),
						slug: caps[2].to_owned(),
					}
				} else if let Some(caps) = SHOW_ROUTE.captures(trimmed) {
					Route::Show {
						slug: caps[1].to_owned(),
					}
				} else if let Some(caps) = GENRE_ROUTE.captures(trimmed) {
					Route::OnDemandGenre {
						genre: caps[1].to_owned(),
					}
				} else {
					return Err(Error::UnknownRoute(path.to_owned()));
				}
			}
		};
		Ok(route)
	}
}

fn write_query(f: &mut Formatter, base: &str, args: &[(&str, &Option<String>)]) -> fmt::Result {
	let mut query = form_urlencoded::Serializer::new(String::new());
	let mut any = false;
	for (key, value) in args {
		if let Some(value) = value {
			query.append_pair(key, value);
			any = true;
		}
	}
	if any {
		write!(f, "{}?{}", base, query.finish())
	} else {
		f.write_str(base)
	}
}

impl Display for Route {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Route::Index => f.write_str("/"),
			Route::Channels => f.write_str("/channels"),
			Route::Channel { slug } => write!(f, "/channels/{}", slug),
			Route::Shows { category } => write_query(f, "/shows/", &[("category", category)]),
			Route::Show { slug } => write!(f, "/shows/{}", slug),
			Route::Episode { show, slug } => write!(f, "/shows/{}/episodes/{}", show, slug),
			Route::OnDemand { filter } => write_query(f, "/on-demand", &[("filter", filter)]),
			Route::OnDemandGenre { genre } => write!(f, "/on-demand/genres/{}", genre),
			Route::Search { query, category } => {
				write_query(f, "/search", &[("q", query), ("category", category)])
			}
		}
	}
}
