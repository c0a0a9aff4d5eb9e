//! Band colors.
//!
//! Colors are kept as strings on the bands, the way a color picker hands
//! them over, and parsed into pixels when drawing.

use std::sync::OnceLock;

use fnv::FnvHashMap;
use image::Rgba;
use rand::Rng;

/// Opaque black, used when a band color can not be parsed.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fully transparent pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Generates a random `#rrggbb` color.
pub fn random_color() -> String {
    let n: u32 = rand::rng().random_range(0..1 << 24);
    format!("#{:06x}", n)
}

/// Parses a color string.
///
/// Supports hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
/// `rgb(..)`/`rgba(..)` and named colors.
pub fn parse_color(s: &str) -> anyhow::Result<Rgba<u8>> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| anyhow::anyhow!("invalid hex color `{}`", s));
    }
    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgba(").and_then(|a| a.strip_suffix(')')) {
        return parse_rgb_args(args, true).ok_or_else(|| anyhow::anyhow!("invalid color `{}`", s));
    }
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|a| a.strip_suffix(')')) {
        return parse_rgb_args(args, false).ok_or_else(|| anyhow::anyhow!("invalid color `{}`", s));
    }
    named(&lower).ok_or_else(|| anyhow::anyhow!("unknown color `{}`", s))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {return None};
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 | 4 => {
            let mut px = [255; 4];
            for (i, ch) in px.iter_mut().enumerate().take(hex.len()) {
                *ch = digit(i)? * 17;
            }
            Some(Rgba(px))
        }
        6 | 8 => {
            let mut px = [255; 4];
            for (i, ch) in px.iter_mut().enumerate().take(hex.len() / 2) {
                *ch = pair(2 * i)?;
            }
            Some(Rgba(px))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str, alpha: bool) -> Option<Rgba<u8>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != if alpha {4} else {3} {return None};
    let mut px = [255; 4];
    for (ch, part) in px.iter_mut().zip(&parts[..3]) {
        let v: f64 = part.parse().ok()?;
        if !v.is_finite() {return None};
        *ch = v.round().clamp(0.0, 255.0) as u8;
    }
    if alpha {
        let a: f64 = parts[3].parse().ok()?;
        if !a.is_finite() {return None};
        px[3] = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    Some(Rgba(px))
}

/// Looks up a named color (lower case).
pub fn named(name: &str) -> Option<Rgba<u8>> {
    static TABLE: OnceLock<FnvHashMap<&'static str, Rgba<u8>>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        NAMED.iter().map(|&(name, rgb)| {
            (name, Rgba([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255]))
        }).collect()
    });
    if name == "transparent" {return Some(TRANSPARENT)};
    table.get(name).copied()
}

const NAMED: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff), ("antiquewhite", 0xfaebd7), ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4), ("azure", 0xf0ffff), ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4), ("black", 0x000000), ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff), ("blueviolet", 0x8a2be2), ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887), ("cadetblue", 0x5f9ea0), ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e), ("coral", 0xff7f50), ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc), ("crimson", 0xdc143c), ("cyan", 0x00ffff),
    ("darkblue", 0x00008b), ("darkcyan", 0x008b8b), ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9), ("darkgreen", 0x006400), ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b), ("darkmagenta", 0x8b008b), ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00), ("darkorchid", 0x9932cc), ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a), ("darkseagreen", 0x8fbc8f), ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f), ("darkslategrey", 0x2f4f4f), ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3), ("deeppink", 0xff1493), ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969), ("dimgrey", 0x696969), ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222), ("floralwhite", 0xfffaf0), ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff), ("gainsboro", 0xdcdcdc), ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700), ("goldenrod", 0xdaa520), ("gray", 0x808080),
    ("green", 0x008000), ("greenyellow", 0xadff2f), ("grey", 0x808080),
    ("honeydew", 0xf0fff0), ("hotpink", 0xff69b4), ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082), ("ivory", 0xfffff0), ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa), ("lavenderblush", 0xfff0f5), ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd), ("lightblue", 0xadd8e6), ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff), ("lightgoldenrodyellow", 0xfafad2), ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90), ("lightgrey", 0xd3d3d3), ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a), ("lightseagreen", 0x20b2aa), ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899), ("lightslategrey", 0x778899), ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0), ("lime", 0x00ff00), ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6), ("magenta", 0xff00ff), ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa), ("mediumblue", 0x0000cd), ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db), ("mediumseagreen", 0x3cb371), ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a), ("mediumturquoise", 0x48d1cc), ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970), ("mintcream", 0xf5fffa), ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5), ("navajowhite", 0xffdead), ("navy", 0x000080),
    ("oldlace", 0xfdf5e6), ("olive", 0x808000), ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500), ("orangered", 0xff4500), ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa), ("palegreen", 0x98fb98), ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093), ("papayawhip", 0xffefd5), ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f), ("pink", 0xffc0cb), ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6), ("purple", 0x800080), ("rebeccapurple", 0x663399),
    ("red", 0xff0000), ("rosybrown", 0xbc8f8f), ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513), ("salmon", 0xfa8072), ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57), ("seashell", 0xfff5ee), ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0), ("skyblue", 0x87ceeb), ("slateblue", 0x6a5acd),
    ("slategray", 0x708090), ("slategrey", 0x708090), ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f), ("steelblue", 0x4682b4), ("tan", 0xd2b48c),
    ("teal", 0x008080), ("thistle", 0xd8bfd8), ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0), ("violet", 0xee82ee), ("wheat", 0xf5deb3),
    ("white", 0xffffff), ("whitesmoke", 0xf5f5f5), ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(parse_color("#ff0000").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_color("#0F0").unwrap(), Rgba([0, 255, 0, 255]));
        assert_eq!(parse_color(" #00ff0080 ").unwrap(), Rgba([0, 255, 0, 128]));
        assert_eq!(parse_color("#0008").unwrap(), Rgba([0, 0, 0, 136]));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#").is_err());
    }

    #[test]
    fn functional() {
        assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Rgba([1, 2, 3, 255]));
        assert_eq!(parse_color("RGBA(10,20,300,0.5)").unwrap(), Rgba([10, 20, 255, 128]));
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgb(a, b, c)").is_err());
    }

    #[test]
    fn names() {
        assert_eq!(parse_color("Red").unwrap(), Rgba([255, 0, 0, 255]));
        assert_eq!(parse_color("rebeccapurple").unwrap(), Rgba([0x66, 0x33, 0x99, 255]));
        assert_eq!(parse_color("transparent").unwrap(), TRANSPARENT);
        assert!(parse_color("notacolor").is_err());
    }

    #[test]
    fn random() {
        for _ in 0..100 {
            let c = random_color();
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert_eq!(parse_color(&c).unwrap()[3], 255);
        }
    }
}
