use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config::SITE_TITLE;

/// Served by Trunk from the `assets/` directory.
pub const LOGO_SRC: &str = "/assets/logo.png";

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum LogoVariant {
    #[default]
    Default,
    Footer,
}

impl LogoVariant {
    pub fn height(self) -> &'static str {
        match self {
            LogoVariant::Default => "var(--logo-default-height)",
            LogoVariant::Footer => "var(--logo-footer-height)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub variant: LogoVariant,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <FallbackImage
            src={LOGO_SRC}
            alt={SITE_TITLE}
            class={classes!("logo")}
            style={format!("height: {}; width: auto;", props.variant.height())}
            eager=true
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn logo_file_ships_with_the_site() {
        let relative = LOGO_SRC.trim_start_matches('/');
        let on_disk = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
        assert!(on_disk.is_file(), "missing {}", on_disk.display());

        let index = include_str!("../../index.html");
        assert!(index.contains(r#"<link data-trunk rel="copy-dir" href="assets" />"#));
    }

    #[test]
    fn variants_use_their_own_height() {
        assert_eq!(LogoVariant::default(), LogoVariant::Default);
        assert_eq!(LogoVariant::Default.height(), "var(--logo-default-height)");
        assert_eq!(LogoVariant::Footer.height(), "var(--logo-footer-height)");
    }
}
