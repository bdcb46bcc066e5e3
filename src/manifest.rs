//! JSON index of the generated sprite tree (`manifest.json`).
//!
//! Written next to the sprites so the game's asset loader knows what to
//! expect without scanning; also what the post-generation tree check
//! reconciles against.

use serde::{Deserialize, Serialize};

use crate::sprites::Sprite;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub sprites: Vec<ManifestEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Sprite name (file stem).
    pub name: String,
    /// Folder under the output root.
    pub folder: String,
    /// File name inside the folder.
    pub file: String,
    pub width: u32,
    pub height: u32,
}

impl Manifest {
    /// Build the manifest for a set of generated groups, in group order.
    pub fn from_groups(groups: &[(&str, Vec<Sprite>)]) -> Self {
        let sprites = groups
            .iter()
            .flat_map(|(folder, sprites)| {
                sprites.iter().map(move |s| ManifestEntry {
                    name: s.name.clone(),
                    folder: (*folder).to_string(),
                    file: format!("{}.png", s.name),
                    width: s.canvas.width(),
                    height: s.canvas.height(),
                })
            })
            .collect();
        Self { sprites }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::palette::TRANSPARENT;

    #[test]
    fn entries_carry_folder_file_and_dimensions() {
        let groups = vec![(
            "player",
            vec![Sprite::new("player_down", Canvas::new(48, 48, TRANSPARENT))],
        )];
        let m = Manifest::from_groups(&groups);
        assert_eq!(m.sprites.len(), 1);
        let e = &m.sprites[0];
        assert_eq!(e.name, "player_down");
        assert_eq!(e.folder, "player");
        assert_eq!(e.file, "player_down.png");
        assert_eq!((e.width, e.height), (48, 48));
    }

    #[test]
    fn json_round_trips() {
        let groups = vec![(
            "ui",
            vec![Sprite::new("logo", Canvas::new(128, 48, TRANSPARENT))],
        )];
        let m = Manifest::from_groups(&groups);
        let json = m.to_json().unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
