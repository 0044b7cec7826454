use stylist::GlobalStyle;

use crate::config::Theme;

/// Custom properties every component stylesheet reads its colours from.
pub fn stylesheet(theme: &Theme) -> String {
    let vars = [
        ("--color-primary", &theme.primary),
        ("--color-primary-light", &theme.primary_light),
        ("--color-primary-dark", &theme.primary_dark),
        ("--color-secondary", &theme.secondary),
        ("--color-accent", &theme.accent),
        ("--color-neutral-light", &theme.neutral_light),
        ("--color-neutral", &theme.neutral),
        ("--color-neutral-dark", &theme.neutral_dark),
        ("--gradient-primary", &theme.gradient_primary),
        ("--gradient-secondary", &theme.gradient_secondary),
        ("--gradient-hero", &theme.gradient_hero),
    ];

    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        css.push_str(&format!("    {}: {};\n", name, value));
    }
    css.push_str(&format!(
        "    --font-sans: '{}', sans-serif;\n    --font-serif: '{}', serif;\n}}\n",
        theme.font_sans, theme.font_serif
    ));
    css.push_str(
        "body {\n    margin: 0;\n    font-family: var(--font-sans);\n    color: var(--color-neutral-dark);\n    background: #ffffff;\n    -webkit-font-smoothing: antialiased;\n}\n",
    );
    css
}

/// Registers the theme with the document. The style stays mounted for the
/// life of the returned handle's owner.
pub fn mount(theme: &Theme) -> Result<GlobalStyle, stylist::Error> {
    GlobalStyle::new(stylesheet(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn every_colour_token_becomes_a_custom_property() {
        let theme = SiteConfig::bundled().unwrap().theme;
        let css = stylesheet(&theme);
        for needle in [
            "--color-primary: #0284c7;",
            "--color-secondary: #f43f5e;",
            "--color-accent: #f59e0b;",
            "--color-neutral-dark: #171717;",
            "--font-sans: 'Poppins', sans-serif;",
            "--font-serif: 'Playfair Display', serif;",
        ] {
            assert!(css.contains(needle), "missing {} in\n{}", needle, css);
        }
        assert!(css.contains(&format!("--gradient-hero: {};", theme.gradient_hero)));
    }

    #[test]
    fn stylesheet_follows_the_tokens() {
        let mut theme = SiteConfig::bundled().unwrap().theme;
        theme.primary = "rebeccapurple".to_string();
        assert!(stylesheet(&theme).contains("--color-primary: rebeccapurple;"));
    }
}
