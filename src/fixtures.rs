//! Synthetic library fixtures: pseudo-random opaque bytes under
//! audio-extension names, laid out `Artist_N/Album_M/Track_K.mp3`.
//!
//! The generator treats audio as opaque byte streams, so fixture files
//! only need to honor the extension contract, not be playable.

use std::fs;
use std::io;
use std::path::Path;

use rand::RngExt;
use tracing::info;
use walkdir::WalkDir;

use crate::catalog::is_audio_file;
use crate::config::LibrarySettings;

pub const DEFAULT_LIBRARY_DIR: &str = "TestFolder1";
pub const DEFAULT_MIRROR_DIR: &str = "TestFolder2";

/// Remove both fixture trees, seed `dir` fresh, then mirror a random
/// subset of it into `mirror`.
pub fn seed(
    dir: &Path,
    mirror: &Path,
    artists: u32,
    albums_per_artist: u32,
    tracks_per_album: u32,
    chance: f64,
) -> io::Result<()> {
    remove_tree(dir)?;
    remove_tree(mirror)?;

    let written = seed_library(dir, artists, albums_per_artist, tracks_per_album)?;
    info!("seeded {written} files under {}", dir.display());

    let copied = mirror_subset(dir, mirror, chance.clamp(0.0, 1.0))?;
    info!("mirrored {copied} files into {}", mirror.display());
    Ok(())
}

/// Fill `base` with `Artist_N/Album_M/Track_K.mp3` files of pseudo-random
/// length (1000-5000 bytes) and content. Returns how many were written.
pub fn seed_library(
    base: &Path,
    artists: u32,
    albums_per_artist: u32,
    tracks_per_album: u32,
) -> io::Result<u32> {
    let mut rng = rand::rng();
    let mut written = 0;

    for artist in 1..=artists {
        for album in 1..=albums_per_artist {
            let album_dir = base
                .join(format!("Artist_{artist}"))
                .join(format!("Album_{album}"));
            fs::create_dir_all(&album_dir)?;

            for track in 1..=tracks_per_album {
                let len: usize = rng.random_range(1000..=5000);
                let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
                fs::write(album_dir.join(format!("Track_{track}.mp3")), &bytes)?;
                written += 1;
            }
        }
    }

    Ok(written)
}

/// Copy each audio file under `source` into the same relative location
/// under `destination` with probability `chance`. Non-audio files are
/// never candidates. Returns how many files were copied.
pub fn mirror_subset(source: &Path, destination: &Path, chance: f64) -> io::Result<u32> {
    let settings = LibrarySettings::default();
    let mut rng = rand::rng();
    let mut copied = 0;

    for entry in WalkDir::new(source).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, &settings) {
            continue;
        }
        if !rng.random_bool(chance) {
            continue;
        }
        let Ok(rel) = path.strip_prefix(source) else {
            continue;
        };
        let target = destination.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        copied += 1;
    }

    Ok(copied)
}

/// Delete a fixture tree. An absent tree is a reported no-op; returns
/// whether anything was removed.
pub fn remove_tree(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        info!("{} does not exist, nothing to remove", path.display());
        return Ok(false);
    }
    fs::remove_dir_all(path)?;
    info!("removed {} and its contents", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn seed_library_writes_the_expected_tree() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("lib");

        let written = seed_library(&base, 2, 2, 3).unwrap();
        assert_eq!(written, 12);

        let sample = base.join("Artist_2").join("Album_1").join("Track_3.mp3");
        let len = fs::metadata(&sample).unwrap().len();
        assert!((1000..=5000).contains(&len));
    }

    #[test]
    fn mirror_subset_with_chance_one_copies_every_audio_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        seed_library(&src, 1, 2, 2).unwrap();
        fs::write(src.join("Artist_1").join("cover.jpg"), b"not audio").unwrap();

        let copied = mirror_subset(&src, &dst, 1.0).unwrap();
        assert_eq!(copied, 4);
        assert!(dst.join("Artist_1").join("Album_2").join("Track_1.mp3").exists());
        assert!(!dst.join("Artist_1").join("cover.jpg").exists());
    }

    #[test]
    fn mirror_subset_with_chance_zero_copies_nothing() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        seed_library(&src, 1, 1, 2).unwrap();

        assert_eq!(mirror_subset(&src, &dst, 0.0).unwrap(), 0);
        assert!(!dst.exists());
    }

    #[test]
    fn remove_tree_is_a_no_op_on_absent_paths() {
        let dir = tempdir().unwrap();
        let tree = dir.path().join("gone");
        assert!(!remove_tree(&tree).unwrap());

        fs::create_dir_all(tree.join("sub")).unwrap();
        assert!(remove_tree(&tree).unwrap());
        assert!(!remove_tree(&tree).unwrap());
    }
}
