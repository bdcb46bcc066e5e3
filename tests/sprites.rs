use std::collections::HashSet;

use spriteforge::manifest::Manifest;
use spriteforge::output::{verify_tree, write_sprite};
use spriteforge::palette;
use spriteforge::png;
use spriteforge::sprites::{self, Sprite};

// ── Helpers ───────────────────────────────────────────────────────────────

fn find<'a>(groups: &'a [(&str, Vec<Sprite>)], name: &str) -> &'a Sprite {
    groups
        .iter()
        .flat_map(|(_, g)| g.iter())
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("sprite '{name}' missing from the library"))
}

// ── Registry ──────────────────────────────────────────────────────────────

#[test]
fn registry_has_every_group_in_generation_order() {
    let groups = sprites::groups();
    let folders: Vec<&str> = groups.iter().map(|(f, _)| *f).collect();
    assert_eq!(
        folders,
        ["player", "obstacles", "collectibles", "npcs", "boss", "ui"]
    );

    let counts: Vec<usize> = groups.iter().map(|(_, g)| g.len()).collect();
    assert_eq!(counts, [10, 5, 2, 8, 1, 1]);
}

#[test]
fn sprite_names_are_unique_across_all_groups() {
    let groups = sprites::groups();
    let mut seen = HashSet::new();
    for (_, group) in &groups {
        for sprite in group {
            assert!(seen.insert(sprite.name.clone()), "duplicate '{}'", sprite.name);
        }
    }
    assert_eq!(seen.len(), 27);
}

#[test]
fn every_sprite_has_its_documented_dimensions() {
    let groups = sprites::groups();
    let expect = [
        ("player_down", 48, 48),
        ("player_crash", 48, 48),
        ("avax_tree", 36, 44),
        ("blackhole", 40, 40),
        ("snowbank", 48, 32),
        ("gate_flag", 8, 28),
        ("ramp", 52, 20),
        ("avax_token", 28, 28),
        ("phar_token", 28, 28),
        ("benqi", 40, 40),
        ("pangolin", 40, 40),
        ("lfj_joe", 80, 80),
        ("skiavax_logo", 128, 48),
    ];
    for (name, w, h) in expect {
        let s = find(&groups, name);
        assert_eq!(
            (s.canvas.width(), s.canvas.height()),
            (w, h),
            "dimensions of '{name}'"
        );
    }
}

#[test]
fn right_facing_players_are_mirrors_of_the_left_facing_ones() {
    let groups = sprites::groups();
    for (left, right) in [
        ("player_left_slight", "player_right_slight"),
        ("player_left", "player_right"),
        ("player_left_fast", "player_right_fast"),
    ] {
        let l = find(&groups, left);
        let r = find(&groups, right);
        assert_eq!(
            r.canvas,
            l.canvas.mirror_horizontal(),
            "'{right}' must mirror '{left}'"
        );
        assert_ne!(r.canvas, l.canvas, "a leaning pose cannot be symmetric");
    }
}

#[test]
fn landmark_pixels_are_painted_in_layer_order() {
    let groups = sprites::groups();
    // Token: the white "A" covers the coin center, the notch does not reach it.
    assert_eq!(
        find(&groups, "avax_token").canvas.get(14, 14),
        Some(palette::WHITE)
    );
    // Boss: the eye glint is the last write at the iris center.
    assert_eq!(
        find(&groups, "lfj_joe").canvas.get(30, 18),
        Some(palette::WHITE)
    );
    // Gate: pole above the pennant, pennant over the pole where they overlap.
    let gate = &find(&groups, "gate_flag").canvas;
    assert_eq!(gate.get(3, 0), Some(palette::GREY));
    assert_eq!(gate.get(4, 8), Some(palette::AVAX_RED));
    // Ramp: leading edge dark, body brown, above the wedge transparent.
    let ramp = &find(&groups, "ramp").canvas;
    assert_eq!(ramp.get(0, 19), Some(palette::DARK_BROWN));
    assert_eq!(ramp.get(51, 19), Some(palette::BROWN));
    assert_eq!(ramp.get(0, 0), Some(palette::TRANSPARENT));
}

#[test]
fn corners_stay_transparent_on_padded_sprites() {
    let groups = sprites::groups();
    for name in ["player_down", "blackhole", "avax_token", "lfj_joe"] {
        let c = &find(&groups, name).canvas;
        let (w, h) = (c.width() as i32, c.height() as i32);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(
                c.get(x, y),
                Some(palette::TRANSPARENT),
                "corner ({x},{y}) of '{name}'"
            );
        }
    }
}

// ── Library ↔ encoder ↔ oracle ────────────────────────────────────────────

#[test]
fn every_sprite_in_the_library_round_trips_through_the_decoder() {
    for (folder, group) in sprites::groups() {
        for sprite in group {
            let bytes = png::encode(&sprite.canvas)
                .unwrap_or_else(|e| panic!("{folder}/{}: {e}", sprite.name));
            let img = image::load_from_memory(&bytes)
                .unwrap_or_else(|e| panic!("{folder}/{}: {e}", sprite.name))
                .to_rgba8();
            assert_eq!(
                img.dimensions(),
                (sprite.canvas.width(), sprite.canvas.height()),
                "{folder}/{}",
                sprite.name
            );
            for (i, px) in sprite.canvas.pixels().iter().enumerate() {
                let x = i as u32 % sprite.canvas.width();
                let y = i as u32 / sprite.canvas.width();
                assert_eq!(
                    img.get_pixel(x, y).0,
                    px.channels(),
                    "{folder}/{} pixel ({x},{y})",
                    sprite.name
                );
            }
        }
    }
}

// ── Manifest ──────────────────────────────────────────────────────────────

#[test]
fn manifest_lists_every_sprite_with_its_folder() {
    let groups = sprites::groups();
    let manifest = Manifest::from_groups(&groups);
    assert_eq!(manifest.sprites.len(), 27);

    let entry = manifest
        .sprites
        .iter()
        .find(|e| e.name == "benqi")
        .expect("benqi in manifest");
    assert_eq!(entry.folder, "npcs");
    assert_eq!(entry.file, "benqi.png");
    assert_eq!((entry.width, entry.height), (40, 40));
}

#[test]
fn manifest_json_round_trips() {
    let manifest = Manifest::from_groups(&sprites::groups());
    let back: Manifest = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
    assert_eq!(back, manifest);
}

// ── Filesystem output ─────────────────────────────────────────────────────

#[test]
fn written_tree_verifies_clean_then_reports_a_deleted_file() {
    let root = std::env::temp_dir().join(format!("spriteforge-test-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);

    let groups = vec![("collectibles", sprites::collectibles::sprites())];
    let manifest = Manifest::from_groups(&groups);

    let mut written = Vec::new();
    for (folder, group) in &groups {
        let dir = root.join(folder);
        for sprite in group {
            written.push(write_sprite(&dir, sprite).expect("write succeeds"));
        }
    }
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));

    let report = verify_tree(&root, &manifest);
    assert!(report.is_clean(), "fresh tree must verify clean: {report:?}");

    std::fs::remove_file(&written[0]).unwrap();
    let report = verify_tree(&root, &manifest);
    assert_eq!(report.missing, vec![written[0].clone()]);
    assert!(report.strays.is_empty());

    let _ = std::fs::remove_dir_all(&root);
}
