//! Pure formatting helpers for timeline display

/// Hyphen-delimited category key to capitalized words:
/// `console-release` -> `Console Release`
pub fn format_category(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable date-range label for a known era key; unknown keys pass
/// through unchanged.
pub fn era_label(era: &str) -> &str {
    match era {
        "gen1-2" => "1st & 2nd Generation (1972-1983)",
        "gen3" => "3rd Generation (1983-1992)",
        "gen4" => "4th Generation (1987-1996)",
        "gen5" => "5th Generation (1993-2002)",
        "gen6" => "6th Generation (2000-2006)",
        "gen7" => "7th Generation (2005-2013)",
        "gen8" => "8th Generation (2012-2020)",
        "gen9" => "9th Generation (2020-Present)",
        other => other,
    }
}

/// Console name to a detail-page slug: lowercase, whitespace and slashes
/// become hyphens, parentheses are stripped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        match c {
            '(' | ')' => {}
            c if c.is_whitespace() || c == '/' => {
                if !slug.is_empty() {
                    pending_hyphen = true;
                }
            }
            c => {
                if pending_hyphen {
                    slug.push('-');
                    pending_hyphen = false;
                }
                slug.push(c);
            }
        }
    }

    slug
}

/// CSS-style manufacturer class: `Atari` -> `manufacturer-atari`
pub fn manufacturer_class(manufacturer: &str) -> String {
    format!("manufacturer-{}", slugify(manufacturer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category() {
        assert_eq!(format_category("console-release"), "Console Release");
        assert_eq!(format_category("handheld"), "Handheld");
        assert_eq!(format_category("add-on-release"), "Add On Release");
        assert_eq!(format_category(""), "");
    }

    #[test]
    fn test_era_label_known_keys() {
        assert_eq!(era_label("gen1-2"), "1st & 2nd Generation (1972-1983)");
        assert_eq!(era_label("gen9"), "9th Generation (2020-Present)");
    }

    #[test]
    fn test_era_label_unknown_key_passes_through() {
        assert_eq!(era_label("gen10"), "gen10");
        assert_eq!(era_label(""), "");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sega Genesis / Mega Drive"), "sega-genesis-mega-drive");
        assert_eq!(slugify("PlayStation 2"), "playstation-2");
        assert_eq!(slugify("Famicom (Family Computer)"), "famicom-family-computer");
        assert_eq!(slugify("Game Boy"), "game-boy");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("Neo  Geo"), "neo-geo");
        assert_eq!(slugify("TurboGrafx-16 / PC Engine"), "turbografx-16-pc-engine");
    }

    #[test]
    fn test_manufacturer_class() {
        assert_eq!(manufacturer_class("Nintendo"), "manufacturer-nintendo");
        assert_eq!(manufacturer_class("NEC Home Electronics"), "manufacturer-nec-home-electronics");
    }
}
