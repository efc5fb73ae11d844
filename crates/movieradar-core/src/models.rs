mod detail;
mod media;
mod watchlist;

pub use detail::{OmdbDetails, OmdbRating, TmdbCast, TmdbCredits, TmdbDetails};
pub use media::{IdentityKey, MediaItem};
pub use watchlist::WatchlistEntry;
