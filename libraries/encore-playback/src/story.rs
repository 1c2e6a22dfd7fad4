//! Prompt for the "story behind the song" feature

use encore_core::types::Track;

/// Build the generative-text prompt for a track
pub fn prompt_for(track: &Track) -> String {
    format!(
        "Write a story based on the interpretation of this song, keeping faithful to its meaning, \
         avoid using the words 'flickering', 'neon' (limit to under 100 words): {} by {}",
        track.title, track.artist
    )
}
