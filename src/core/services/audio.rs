//=========================================================================
// Audio Service
//=========================================================================

use std::path::Path;

/// Sound playback. Files are resolved through the asset service first.
pub trait AudioService {
    /// Plays a one-shot effect without waiting for completion.
    fn play_effect(&mut self, sound: &Path);

    /// Replaces the current background track and loops the new one.
    fn play_background(&mut self, track: &Path);
}
