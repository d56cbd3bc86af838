mod channel;
mod episode;
mod show;
mod state;

pub use channel::{Channel, Timeslot};
pub use episode::{join_genres, Episode, EpisodeRef, Genre, ImageUrls};
pub use show::{SearchResult, Show};
pub use state::InitialState;
