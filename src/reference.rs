//! Triple-slash reference directives written into `env.d.ts`.
//!
//! A reference directive is a comment of the form `/// <reference types="..." />`
//! that tells the TypeScript toolchain to pull in another type definition module.

use crate::config::ProjectConfig;

/// Name of the integration that ships its own client type definitions.
pub const IMAGE_INTEGRATION: &str = "@astrojs/image";

/// Default client types directive.
pub const CLIENT_TYPES: &str = r#"/// <reference types="astro/client" />"#;

/// Client types directive used when [`IMAGE_INTEGRATION`] is installed.
pub const IMAGE_CLIENT_TYPES: &str = r#"/// <reference types="@astrojs/image/client" />"#;

/// Pick the client types directive for the configured integrations.
///
/// Returns [`IMAGE_CLIENT_TYPES`] when an integration named exactly
/// [`IMAGE_INTEGRATION`] is present, [`CLIENT_TYPES`] otherwise.
#[must_use]
pub fn client_types_directive(config: &ProjectConfig) -> &'static str {
    if config.has_integration(IMAGE_INTEGRATION) {
        IMAGE_CLIENT_TYPES
    } else {
        CLIENT_TYPES
    }
}

/// Build a `/// <reference path="..." />` directive.
///
/// The path is emitted as a JSON string literal so quotes and backslashes
/// stay valid inside the directive.
#[must_use]
pub fn path_directive(path: &str) -> String {
    let quoted = serde_json::to_string(path).unwrap_or_else(|_| format!("\"{path}\""));
    format!("/// <reference path={quoted} />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_types_without_integrations() {
        let config = ProjectConfig::new("/site");
        assert_eq!(client_types_directive(&config), CLIENT_TYPES);
    }

    #[test]
    fn test_image_integration_switches_client_types() {
        let config =
            ProjectConfig::new("/site").with_integrations(["@astrojs/mdx", "@astrojs/image"]);

        assert_eq!(client_types_directive(&config), IMAGE_CLIENT_TYPES);
    }

    #[test]
    fn test_integration_name_must_match_exactly() {
        let config = ProjectConfig::new("/site")
            .with_integrations(["@astrojs/image-extra", "@AstroJS/Image"]);

        assert_eq!(client_types_directive(&config), CLIENT_TYPES);
    }

    #[test]
    fn test_path_directive_quotes_path() {
        assert_eq!(
            path_directive("../.astro/types.d.ts"),
            r#"/// <reference path="../.astro/types.d.ts" />"#
        );
    }

    #[test]
    fn test_path_directive_escapes_quotes() {
        assert_eq!(
            path_directive(r#"we"ird.d.ts"#),
            r#"/// <reference path="we\"ird.d.ts" />"#
        );
    }
}
