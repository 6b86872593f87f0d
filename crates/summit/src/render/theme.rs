use crate::config::SiteConfig;

const DARK: &str = "#27374D";
const LIGHT: &str = "#f7f7f7";

/// Renders the just-the-docs color scheme installed as `_sass/color_schemes/<color_scheme>.scss`.
pub fn render_color_scheme(config: &SiteConfig) -> String {
    format!(
        "$link-color: {primary};\n\
         $btn-primary-color: {primary};\n\
         $body-background-color: #ffffff;\n\
         $sidebar-color: {LIGHT};\n\
         $body-heading-color: {DARK};\n",
        primary = config.primary_color()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_color_is_used_for_links_and_buttons() {
        let scss = render_color_scheme(&SiteConfig::default());
        assert_eq!(
            scss,
            "$link-color: #4575b4;\n$btn-primary-color: #4575b4;\n$body-background-color: #ffffff;\n$sidebar-color: #f7f7f7;\n$body-heading-color: #27374D;\n"
        );
    }
}
