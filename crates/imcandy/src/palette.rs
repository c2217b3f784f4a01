//! Named colors, mostly picked from uigradients.com and brand palettes.
//! Handy as endpoints for [`crate::candy::gradient2`] and [`crate::candy::gradient3`].

use eframe::egui::Color32;

pub const WHITE: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
pub const CRIMSON: Color32 = Color32::from_rgb(0xd3, 0x10, 0x27);
pub const SKY_BLUE: Color32 = Color32::from_rgb(0x20, 0xbd, 0xff);
pub const AZURE: Color32 = Color32::from_rgb(0x00, 0x72, 0xff);
pub const HOT_PINK: Color32 = Color32::from_rgb(0xff, 0x00, 0x99);
pub const CHARTREUSE: Color32 = Color32::from_rgb(0xad, 0xd1, 0x00);
pub const EMERALD: Color32 = Color32::from_rgb(0x38, 0xef, 0x7d);
pub const BUBBLEGUM: Color32 = Color32::from_rgb(0xfc, 0x67, 0xfa);
pub const TWITCH: Color32 = Color32::from_rgb(0x91, 0x46, 0xff);
pub const DISCORD: Color32 = Color32::from_rgb(0x58, 0x65, 0xf2);
pub const TWITTER: Color32 = Color32::from_rgb(0x1d, 0xa1, 0xf2);
pub const SPOTIFY: Color32 = Color32::from_rgb(0x1d, 0xb9, 0x54);
pub const GOOGLE_BLUE: Color32 = Color32::from_rgb(0x42, 0x85, 0xf4);
pub const MANGO: Color32 = Color32::from_rgb(0xff, 0xc8, 0x37);
pub const VIOLET: Color32 = Color32::from_rgb(0x95, 0x00, 0xff);
pub const COSMIC_LATTE: Color32 = Color32::from_rgb(0xff, 0xf8, 0xe7);
pub const TEAL: Color32 = Color32::from_rgb(0x50, 0xc9, 0xc3);
pub const DRACULA: Color32 = Color32::from_rgb(0x28, 0x2a, 0x36);
pub const YELLOW_2077: Color32 = Color32::from_rgb(0xfd, 0xf5, 0x00);

// Cyberpunk neon
pub const CPN_BLUE: Color32 = Color32::from_rgb(0x00, 0xe0, 0xff);
pub const CPN_VIOLET: Color32 = Color32::from_rgb(0x9c, 0x00, 0xff);
pub const CPN_PURPLE: Color32 = Color32::from_rgb(0x5d, 0x00, 0xff);
pub const CPN_DEEP: Color32 = Color32::from_rgb(0x00, 0x0a, 0x1f);

/// Every named color with a display name, in declaration order.
pub const ALL: [(&str, Color32); 24] = [
    ("White", WHITE),
    ("Black", BLACK),
    ("Crimson", CRIMSON),
    ("Sky blue", SKY_BLUE),
    ("Azure", AZURE),
    ("Hot pink", HOT_PINK),
    ("Chartreuse", CHARTREUSE),
    ("Emerald", EMERALD),
    ("Bubblegum", BUBBLEGUM),
    ("Twitch", TWITCH),
    ("Discord", DISCORD),
    ("Twitter", TWITTER),
    ("Spotify", SPOTIFY),
    ("Google blue", GOOGLE_BLUE),
    ("Mango", MANGO),
    ("Violet", VIOLET),
    ("Cosmic latte", COSMIC_LATTE),
    ("Teal", TEAL),
    ("Dracula", DRACULA),
    ("2077 yellow", YELLOW_2077),
    ("Neon blue", CPN_BLUE),
    ("Neon violet", CPN_VIOLET),
    ("Neon purple", CPN_PURPLE),
    ("Neon deep", CPN_DEEP),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn constants_match_their_hex_codes() {
        assert_eq!(Rgb::from_hex("#D31027").unwrap().to_color32(), CRIMSON);
        assert_eq!(Rgb::from_hex("#282a36").unwrap().to_color32(), DRACULA);
        assert_eq!(Rgb::from_hex("#000a1f").unwrap().to_color32(), CPN_DEEP);
    }

    #[test]
    fn all_colors_are_opaque() {
        assert!(ALL.iter().all(|(_, color)| color.a() == 255));
    }
}
