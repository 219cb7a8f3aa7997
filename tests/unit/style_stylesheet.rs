use super::*;

#[test]
fn default_state_produces_import_faces_and_preview_rule() {
    let state = AppState::default();
    let css = stylesheet(&state);

    assert!(css.contains(
        "@import url(\"https://fonts.googleapis.com/css2?family=Barlow:wght@500&display=swap\");"
    ));
    assert!(css.contains("font-family: \"Emoji\";"));
    assert!(css.contains("local(\"AppleColorEmoji\"), local(\"Segoe UI Emoji\"), local(\"Noto Color Emoji\")"));
    assert!(css.contains("U+1F300-1F5FF"));
    assert!(css.contains("font-family: \"Number\";"));
    assert!(css.contains("font-family: \"Emoji\", \"Number\", sans-serif;"));
    assert!(css.contains("font-size: 30px;"));
    assert!(css.contains("font-style: normal;"));
}

#[test]
fn italic_flag_switches_the_preview_style() {
    let mut state = AppState::default();
    state.is_italic = true;
    assert!(stylesheet(&state).contains("font-style: italic;"));
}

#[test]
fn rule_order_defines_the_family_stack_order() {
    let mut state = AppState::default();
    state.fonts = vec![
        FontSpec {
            fontface_name: "Second".to_string(),
            local_font_name: "Arial".to_string(),
            ..FontSpec::default()
        },
        FontSpec {
            fontface_name: "First".to_string(),
            local_font_name: "Georgia".to_string(),
            ..FontSpec::default()
        },
    ];
    assert!(stylesheet(&state).contains("font-family: \"Second\", \"First\", sans-serif;"));
}

#[test]
fn google_imports_are_deduplicated() {
    let mut state = AppState::default();
    state.fonts = vec![
        FontSpec {
            fontface_name: "A".to_string(),
            google_font_name: "Noto Sans".to_string(),
            ..FontSpec::default()
        },
        FontSpec {
            fontface_name: "B".to_string(),
            google_font_name: "Noto Sans".to_string(),
            ..FontSpec::default()
        },
    ];
    let css = stylesheet(&state);
    assert_eq!(css.matches("@import").count(), 1);
    assert!(css.contains("family=Noto+Sans"));
}

#[test]
fn rules_without_name_or_sources_emit_no_font_face() {
    let nameless = FontSpec {
        local_font_name: "Arial".to_string(),
        ..FontSpec::default()
    };
    assert_eq!(font_face(&nameless), None);

    let sourceless = FontSpec {
        fontface_name: "Ghost".to_string(),
        ..FontSpec::default()
    };
    assert_eq!(font_face(&sourceless), None);
}

#[test]
fn unparseable_characters_omit_the_unicode_range_line() {
    let rule = FontSpec {
        fontface_name: "Any".to_string(),
        local_font_name: "Arial".to_string(),
        characters: String::new(),
        ..FontSpec::default()
    };
    let block = font_face(&rule).expect("block emitted");
    assert!(!block.contains("unicode-range"));
}

#[test]
fn weight_bias_maps_to_clamped_css_weights() {
    assert_eq!(css_weight("1"), Some(500));
    assert_eq!(css_weight("-2"), Some(200));
    assert_eq!(css_weight("9"), Some(900));
    assert_eq!(css_weight("-9"), Some(100));
    assert_eq!(css_weight(""), None);
    assert_eq!(css_weight("bold"), None);
}

#[test]
fn google_only_rule_uses_the_family_as_local_source() {
    let rule = FontSpec {
        fontface_name: "Number".to_string(),
        google_font_name: "Barlow".to_string(),
        font_weight_bias: "1".to_string(),
        characters: "0123456789".to_string(),
        ..FontSpec::default()
    };
    let block = font_face(&rule).expect("block emitted");
    assert!(block.contains("src: local(\"Barlow\");"));
    assert!(block.contains("unicode-range: U+30-39;"));
    assert!(block.contains("font-weight: 500;"));
}
