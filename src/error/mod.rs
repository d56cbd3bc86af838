pub mod ok_or_missing;

pub use ok_or_missing::OkOrMissing;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Status code was not 200 OK.\nCode: {0}")]
	Status(reqwest::StatusCode),

	#[error("JSON parsing failed: {0}")]
	Json(#[from] serde_json::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The page did not contain the embedded state script.
	#[error("Could not find {0} in page.")]
	MarkerNotFound(&'static str),

	/// A required key was absent from the initial state. Holds the dotted path.
	#[error("Missing key in initial state: {0}")]
	MissingKey(String),

	#[error("No landscape or portrait image for {0}")]
	MissingImage(String),

	#[error("Unrecognized route: {0}")]
	UnknownRoute(String),

	#[error("Unknown category: {0}")]
	UnknownCategory(String),

	#[error("Search requires a query.")]
	MissingQuery,

	#[error("Nothing playable at {0}")]
	NotPlayable(String),

	#[error("Gave up resolving {0} after too many hops.")]
	TooManyHops(String),
}
