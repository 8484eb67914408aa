//! Registry retargeting for extracted image references.
//!
//! A reference is considered registry-qualified only when the segment before
//! its first `/` is a bare IP literal. Domain-name registries such as
//! `your-domain.com/app` and `host:port` prefixes are not recognized, so
//! they end up nested under the new registry. Rewriting is therefore not
//! idempotent for those inputs.

use crate::extractor::ImageRef;
use crate::text;
use std::net::IpAddr;

/// References printed by `--demo`, covering the shapes the heuristic handles.
pub const DEMO_REFERENCES: &[&str] = &[
    "image/tag:v1.0.0",
    "123.123.123.123/image/tag:v1.0.0",
    "your-domain.com/image/tag",
    "your-domain.com/image/tag:v1.1.1-patch1",
    "image/tag",
    "image",
    "image:v1.1.1-patch",
    "ubuntu@sha256:45b23dee08af5e43a7fea6c4cf9c25ccf269ee113168c19722f87876677c5cb2",
];

/// Returns the leading IP-literal registry host of `reference`, if any.
pub fn registry_host(reference: &str) -> Option<IpAddr> {
    if !reference.contains('/') {
        return None;
    }
    text::before(reference, "/").parse().ok()
}

/// Points `reference` at `new_registry`.
///
/// An IP-literal host is replaced and the rest of the path kept verbatim.
/// Anything else is treated as a bare image path and prefixed.
pub fn change_registry(reference: &str, new_registry: &str) -> String {
    let path = match registry_host(reference) {
        Some(_) => text::after_first(reference, "/"),
        None => reference,
    };
    format!("{}/{}", new_registry, path)
}

/// Fills in `rewritten` for each reference.
pub fn retarget(refs: &mut [ImageRef], new_registry: &str) {
    for image_ref in refs {
        image_ref.rewritten = Some(change_registry(&image_ref.image, new_registry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "some.domain.com";

    #[test]
    fn prefixes_bare_path() {
        assert_eq!(
            change_registry("image/tag:v1.0.0", TARGET),
            "some.domain.com/image/tag:v1.0.0"
        );
    }

    #[test]
    fn replaces_ipv4_registry() {
        assert_eq!(
            change_registry("123.123.123.123/image/tag:v1.0.0", TARGET),
            "some.domain.com/image/tag:v1.0.0"
        );
    }

    #[test]
    fn replaces_ipv6_registry() {
        assert_eq!(
            change_registry("fd00::1/team/app:v2", TARGET),
            "some.domain.com/team/app:v2"
        );
    }

    #[test]
    fn domain_registry_is_not_detected() {
        assert_eq!(
            change_registry("your-domain.com/image/tag", TARGET),
            "some.domain.com/your-domain.com/image/tag"
        );
    }

    #[test]
    fn ip_with_port_is_not_detected() {
        assert_eq!(
            change_registry("123.123.123.123:123/image/tag:v1.0.0", TARGET),
            "some.domain.com/123.123.123.123:123/image/tag:v1.0.0"
        );
    }

    #[test]
    fn digest_without_slash_is_prefixed() {
        assert_eq!(
            change_registry("ubuntu@sha256:45b2", TARGET),
            "some.domain.com/ubuntu@sha256:45b2"
        );
    }

    #[test]
    fn tag_without_slash_is_prefixed() {
        assert_eq!(
            change_registry("image:v1.1.1-patch", TARGET),
            "some.domain.com/image:v1.1.1-patch"
        );
    }

    #[test]
    fn empty_reference_becomes_registry_root() {
        assert_eq!(change_registry("", TARGET), "some.domain.com/");
    }

    #[test]
    fn rewrite_is_not_idempotent_for_domain_registries() {
        let once = change_registry("your-domain.com/image/tag", TARGET);
        let twice = change_registry(&once, TARGET);
        assert_ne!(once, twice);
        assert_eq!(
            twice,
            "some.domain.com/some.domain.com/your-domain.com/image/tag"
        );
    }

    #[test]
    fn rewrite_is_idempotent_once_target_is_an_ip() {
        let once = change_registry("10.0.0.1/app:v1", "10.0.0.2");
        assert_eq!(once, "10.0.0.2/app:v1");
        assert_eq!(change_registry(&once, "10.0.0.2"), once);
    }

    #[test]
    fn registry_host_requires_slash() {
        assert_eq!(registry_host("10.0.0.1"), None);
        assert_eq!(
            registry_host("10.0.0.1/app"),
            Some("10.0.0.1".parse().unwrap())
        );
        assert_eq!(registry_host("docker.io/library/nginx"), None);
    }

    #[test]
    fn retarget_fills_every_reference() {
        let mut refs = vec![
            ImageRef {
                line: 3,
                image: "nginx".to_string(),
                rewritten: None,
            },
            ImageRef {
                line: 7,
                image: "10.1.1.1/redis:7".to_string(),
                rewritten: None,
            },
        ];
        retarget(&mut refs, "registry.local");
        let rewritten: Vec<_> = refs.iter().map(|r| r.rewritten.as_deref()).collect();
        assert_eq!(
            rewritten,
            vec![Some("registry.local/nginx"), Some("registry.local/redis:7")]
        );
    }

    #[test]
    fn demo_references_cover_all_shapes() {
        let out: Vec<_> = DEMO_REFERENCES
            .iter()
            .map(|r| change_registry(r, TARGET))
            .collect();
        assert_eq!(out[1], "some.domain.com/image/tag:v1.0.0");
        assert_eq!(out[2], "some.domain.com/your-domain.com/image/tag");
        assert!(out.iter().all(|r| r.starts_with("some.domain.com/")));
    }
}
