// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for parsing the CSS `font` shorthand.

use font_shorthand::{
    FontFamilyName, FontSize, FontStretch, FontStyle, FontVariant, FontWeight, GenericFamily,
    LineHeight, ParsedFont,
};

#[test]
fn shorthand_size_and_family() {
    let font = ParsedFont::parse("26px Roboto").unwrap();
    assert_eq!(font.style, FontStyle::Normal);
    assert_eq!(font.variant, FontVariant::Normal);
    assert_eq!(font.weight, FontWeight::Normal);
    assert_eq!(font.stretch, FontStretch::Normal);
    assert_eq!(font.size, FontSize::px(26.0));
    assert_eq!(font.line_height, LineHeight::Normal);
    assert_eq!(font.family, "Roboto");
}

#[test]
fn shorthand_style_weight_line_height_and_quoted_family() {
    let font = ParsedFont::parse(r#"italic bold 26px/1.2 "Open Sans", sans-serif"#).unwrap();
    assert_eq!(font.style, FontStyle::Italic);
    assert_eq!(font.weight, FontWeight::Bold);
    assert_eq!(font.size.to_string(), "26px");
    assert_eq!(font.line_height.as_str(), "1.2");
    assert_eq!(font.family, r#""Open Sans", sans-serif"#);
    assert_eq!(
        font.families().collect::<Result<Vec<_>, _>>().unwrap(),
        [
            FontFamilyName::Named("Open Sans"),
            FontFamilyName::Generic(GenericFamily::SansSerif),
        ]
    );
}

/// Every ordering of one keyword from each descriptor category.
fn permutations<const N: usize>(items: [&'static str; N]) -> Vec<Vec<&'static str>> {
    let mut out = Vec::new();
    let mut stack = vec![(Vec::new(), items.to_vec())];
    while let Some((prefix, rest)) = stack.pop() {
        if rest.is_empty() {
            out.push(prefix);
            continue;
        }
        for i in 0..rest.len() {
            let mut prefix = prefix.clone();
            let mut rest = rest.clone();
            prefix.push(rest.remove(i));
            stack.push((prefix, rest));
        }
    }
    out
}

#[test]
fn shorthand_descriptor_order_is_irrelevant() {
    let orders = permutations(["oblique", "small-caps", "600", "semi-condensed"]);
    assert_eq!(orders.len(), 24);
    for order in orders {
        let source = format!("{} 18px/2 Georgia, serif", order.join(" "));
        let font = ParsedFont::parse(&source).unwrap();
        assert_eq!(font.style, FontStyle::Oblique, "{source}");
        assert_eq!(font.variant, FontVariant::SmallCaps, "{source}");
        assert_eq!(font.weight, FontWeight::Absolute(600), "{source}");
        assert_eq!(font.stretch, FontStretch::SemiCondensed, "{source}");
        assert_eq!(font.size, FontSize::px(18.0), "{source}");
        assert_eq!(font.family, "Georgia, serif", "{source}");
    }
}

#[test]
fn shorthand_partial_descriptors_in_any_order() {
    let orders = permutations(["bolder", "italic"]);
    for order in orders {
        let source = format!("{} 12px monospace", order.join(" "));
        let font = ParsedFont::parse(&source).unwrap();
        assert_eq!(font.weight, FontWeight::Bolder, "{source}");
        assert_eq!(font.style, FontStyle::Italic, "{source}");
        assert_eq!(font.variant, FontVariant::Normal, "{source}");
    }
}

#[test]
fn shorthand_weights() {
    for (token, weight) in [
        ("bold", FontWeight::Bold),
        ("bolder", FontWeight::Bolder),
        ("lighter", FontWeight::Lighter),
        ("100", FontWeight::Absolute(100)),
        ("900", FontWeight::Absolute(900)),
    ] {
        let font = ParsedFont::parse(&format!("{token} 10px serif")).unwrap();
        assert_eq!(font.weight, weight, "{token}");
    }
    // Not a weight, and not anything else either.
    let font = ParsedFont::parse("450 10px serif").unwrap();
    assert_eq!(font.weight, FontWeight::Normal);
}

#[test]
fn shorthand_stretch_keywords() {
    for stretch in [
        "ultra-condensed",
        "extra-condensed",
        "condensed",
        "semi-condensed",
        "semi-expanded",
        "expanded",
        "extra-expanded",
        "ultra-expanded",
    ] {
        let font = ParsedFont::parse(&format!("{stretch} 10px serif")).unwrap();
        assert_eq!(font.stretch.as_str(), stretch);
    }
}

#[test]
fn shorthand_rejects_missing_size_or_family() {
    for source in ["Roboto", "bold Roboto", "26px", "/1.2 Roboto", "twenty-six px Roboto"] {
        assert_eq!(ParsedFont::parse(source), None, "{source:?}");
    }
}

#[test]
fn shorthand_display_round_trips() {
    for source in [
        "26px Roboto",
        "italic 12px serif",
        "small-caps 900 condensed 1.5em/2 'Noto Sans', sans-serif",
    ] {
        let font = ParsedFont::parse(source).unwrap();
        assert_eq!(ParsedFont::parse(&font.to_string()), Some(font), "{source}");
    }
}

#[test]
fn shorthand_default_is_canvas_default() {
    let font = ParsedFont::default();
    assert_eq!(font.to_string(), "10px sans-serif");
    assert_eq!(ParsedFont::parse("10px sans-serif"), Some(font));
}
