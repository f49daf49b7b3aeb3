use log::Level;

#[cfg(debug_assertions)]
pub fn base_path() -> &'static str {
    "/"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn base_path() -> &'static str {
    "/sinaiq-landing-page/"  // GitHub Pages project path
}

#[cfg(debug_assertions)]
pub fn is_dev_build() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn is_dev_build() -> bool {
    false
}

pub fn log_level() -> Level {
    if is_dev_build() {
        Level::Debug
    } else {
        Level::Warn
    }
}

/// Resolves a static asset against the deploy base path.
pub fn asset_url(path: &str) -> String {
    format!("{}{}", base_path(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_without_double_slash() {
        let url = asset_url("/assets/mountain-cutout.webp?v=9");
        assert!(url.starts_with(base_path()));
        assert!(url.ends_with("assets/mountain-cutout.webp?v=9"));
        assert!(!url.contains("//"));
    }
}
