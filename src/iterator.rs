//! Iterator: one traversal interface over two differently stored playlists.
//!
//! Run with: cargo run --bin iterator_demo

use std::collections::HashMap;
use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub artist: String,
    pub name: String,
}

impl Song {
    pub fn new(artist: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            name: name.into(),
        }
    }
}

/// A cursor that can be asked whether another song follows.
///
/// `next()` past the end yields `None`.
pub trait SongIterator<'a>: Iterator<Item = &'a Song> {
    fn has_next(&self) -> bool;
}

// =============================================================================
// Playlist backed by a keyed map
// =============================================================================

pub struct MySongs {
    songs: HashMap<usize, Song>,
}

impl MySongs {
    pub fn new() -> Self {
        let mut songs = HashMap::new();
        songs.insert(0, Song::new("Green Day", "American Idiot"));
        songs.insert(1, Song::new("AC/DC", "Highway to Hell"));
        songs.insert(2, Song::new("Bon Jovi", "Livin' On a Prayer"));
        Self { songs }
    }

    pub fn iter(&self) -> MySongsIterator<'_> {
        MySongsIterator {
            songs: &self.songs,
            key: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Default for MySongs {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MySongs {
    type Item = &'a Song;
    type IntoIter = MySongsIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the map by ascending key `0, 1, 2, ...`.
pub struct MySongsIterator<'a> {
    songs: &'a HashMap<usize, Song>,
    key: usize,
}

impl<'a> Iterator for MySongsIterator<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        // The cursor advances even when the key is absent
        let song = self.songs.get(&self.key);
        self.key += 1;
        song
    }
}

impl<'a> SongIterator<'a> for MySongsIterator<'a> {
    fn has_next(&self) -> bool {
        self.key < self.songs.len()
    }
}

// =============================================================================
// Playlist backed by an ordered sequence
// =============================================================================

pub struct YourSongs {
    songs: Vec<Song>,
}

impl YourSongs {
    pub fn new() -> Self {
        Self {
            songs: vec![
                Song::new("Britney Spears", "Hit Me Baby One More Time"),
                Song::new("Aqua", "Barbie Girl"),
                Song::new("Spice Girls", "Wannabe"),
            ],
        }
    }

    pub fn iter(&self) -> YourSongsIterator<'_> {
        YourSongsIterator {
            songs: &self.songs,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Default for YourSongs {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a YourSongs {
    type Item = &'a Song;
    type IntoIter = YourSongsIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct YourSongsIterator<'a> {
    songs: &'a [Song],
    index: usize,
}

impl<'a> Iterator for YourSongsIterator<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let song = &self.songs[self.index];
        self.index += 1;
        Some(song)
    }
}

impl<'a> SongIterator<'a> for YourSongsIterator<'a> {
    fn has_next(&self) -> bool {
        self.index < self.songs.len()
    }
}

// =============================================================================
// Client
// =============================================================================

/// Prints the two playlists side by side until either one runs out.
pub fn print_lockstep<'a>(
    mine: &mut dyn SongIterator<'a>,
    yours: &mut dyn SongIterator<'a>,
    out: &mut dyn Write,
) -> Result<usize> {
    let mut pairs = 0;
    while mine.has_next() && yours.has_next() {
        let (Some(song1), Some(song2)) = (mine.next(), yours.next()) else {
            break;
        };
        writeln!(out, "My next song is: {} by {}", song1.name, song1.artist)?;
        writeln!(out, "Your next song is: {} by {}\n", song2.name, song2.artist)?;
        pairs += 1;
    }
    Ok(pairs)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let my_list = MySongs::new();
    let your_list = YourSongs::new();

    let mut i1 = my_list.iter();
    let mut i2 = your_list.iter();

    print_lockstep(&mut i1, &mut i2, out)?;
    Ok(())
}
