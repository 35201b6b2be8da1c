use graphwalk::colors::ColorScheme;

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text intact
    assert!(colors.vertex("A").to_string().contains("A"));
    assert!(colors.success("Done").to_string().contains("Done"));
    assert!(colors.error("Error").to_string().contains("Error"));
    assert!(colors.step_number("1.").to_string().contains("1."));
    assert!(colors.discover("[discover]").to_string().contains("[discover]"));
    assert!(colors.visit("[visit]").to_string().contains("[visit]"));
    assert!(colors.number("123").to_string().contains("123"));
    assert!(colors.stats("Stats").to_string().contains("Stats"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.vertex("A").to_string(), "A");
    assert_eq!(colors.success("Done").to_string(), "Done");
    assert_eq!(colors.error("Error").to_string(), "Error");
    assert_eq!(colors.discover("[discover]").to_string(), "[discover]");
}
