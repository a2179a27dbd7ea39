//=========================================================================
// Background Playlist
//=========================================================================
//
// Fixed list of background tracks with uniform random selection.
// Repeats are allowed; an empty list is a precondition violation.
//
//=========================================================================

use rand::Rng;

/// Ordered background tracks, fixed at setup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundPlaylist<T> {
    tracks: Vec<T>,
}

impl<T> BackgroundPlaylist<T> {
    pub fn new(tracks: Vec<T>) -> Self {
        Self { tracks }
    }

    /// Picks a track uniformly at random.
    ///
    /// # Panics
    ///
    /// Panics if the playlist is empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        assert!(!self.tracks.is_empty(), "Background track list must not be empty");
        &self.tracks[rng.gen_range(0..self.tracks.len())]
    }

    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl<T> Default for BackgroundPlaylist<T> {
    fn default() -> Self {
        Self { tracks: Vec::new() }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
