use shadegen_engine::{
    DARK_INK, DEFAULT_COLOR, Direction, LIGHT_INK, PaletteConfig, RgbColor, build_palette, hex_to_rgb, normalize_hex,
    readable_text_color, rgb_to_hex, toward_black, toward_white,
};

#[test]
fn rgb_round_trips_through_hex() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(3) {
            for b in [0u8, 1, 15, 16, 127, 128, 254, 255] {
                let hex = rgb_to_hex(r, g, b);
                assert_eq!(hex_to_rgb(&hex.to_string()), RgbColor::new(r, g, b), "{hex}");
            }
        }
    }
}

#[test]
fn normalization_is_idempotent_on_noisy_input() {
    let noise = ["", " ", "#", "##", "g", "z", "\t", "é", "0x", "-"];
    let payloads = ["1c902f", "1C902F", "abc", "abcdef0", "000000", "fFfFfF", "12 34 56"];
    for prefix in noise {
        for payload in payloads {
            for suffix in noise {
                let raw = format!("{prefix}{payload}{suffix}");
                if let Some(first) = normalize_hex(&raw) {
                    assert_eq!(normalize_hex(&first.to_string()), Some(first), "input {raw:?}");
                }
            }
        }
    }
}

#[test]
fn hex_to_rgb_never_fails_on_garbage() {
    for raw in ["", "#", "#######", "#12#34", "hello", "\u{0}\u{1}", "🎨🎨🎨🎨🎨🎨", "#GGGGGG", "   #1 2 3  "] {
        assert_eq!(hex_to_rgb(raw), RgbColor::BLACK, "input {raw:?}");
    }
}

#[test]
fn documented_examples_hold() {
    assert_eq!(normalize_hex(" 1c#90#2f ").map(|h| h.to_string()).as_deref(), Some("#1C902F"));
    assert_eq!(normalize_hex("#1C902F99").map(|h| h.to_string()).as_deref(), Some("#1C902F"));
    assert_eq!(readable_text_color(RgbColor::BLACK), LIGHT_INK);
    assert_eq!(readable_text_color(RgbColor::WHITE), DARK_INK);

    let first = toward_white(DEFAULT_COLOR.rgb(), 10)[0];
    assert_eq!(first.r, 0x33);
    assert_eq!(rgb_to_hex(first.r, first.g, first.b).to_string(), "#339B44");
}

#[test]
fn palette_rows_match_generated_shades() {
    let config = PaletteConfig::new(8, 5).unwrap();
    let palette = build_palette(DEFAULT_COLOR, &config);

    let lighter: Vec<RgbColor> = palette.lighter_tiles.iter().skip(1).map(|t| t.hex.rgb()).collect();
    let darker: Vec<RgbColor> = palette.darker_tiles.iter().skip(1).map(|t| t.hex.rgb()).collect();
    assert_eq!(lighter, toward_white(DEFAULT_COLOR.rgb(), 8));
    assert_eq!(darker, toward_black(DEFAULT_COLOR.rgb(), 5));

    assert!(palette.lighter_tiles.iter().all(|t| t.direction == Direction::Lighter));
    assert!(palette.darker_tiles.iter().all(|t| t.direction == Direction::Darker));
    for tile in palette.lighter_tiles.iter().chain(&palette.darker_tiles) {
        assert_eq!(tile.text_color, readable_text_color(tile.hex.rgb()));
    }
}
