use crate::config::{ServiceConfig, default_services};

pub use crate::common::net::parse_service_url;

/// Parses `id=name=url` service specs from the CLI. Invalid specs are
/// skipped, duplicate ids keep the first occurrence, and an empty result
/// falls back to the built-in fleet.
pub fn parse_service_specs(specs: &[String]) -> Vec<ServiceConfig> {
    let mut services: Vec<ServiceConfig> = Vec::new();
    for raw in specs {
        if let Some(service) = parse_service_spec(raw)
            && services.iter().all(|existing| existing.id != service.id)
        {
            services.push(service);
        }
    }
    if services.is_empty() {
        default_services()
    } else {
        services
    }
}

fn parse_service_spec(input: &str) -> Option<ServiceConfig> {
    let mut parts = input.splitn(3, '=');
    let id = parts.next()?.trim();
    let name = parts.next()?.trim();
    let url = parts.next()?.trim();
    if id.is_empty() || name.is_empty() {
        return None;
    }
    let url = parse_service_url(url)?;
    Some(ServiceConfig::new(id, name, url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_service_spec_accepts_full_form() {
        let services = parse_service_specs(&specs(&["dev=Dev Site=https://dev.example.com"]));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, "dev");
        assert_eq!(services[0].name, "Dev Site");
        assert_eq!(services[0].url.as_str(), "https://dev.example.com/");
    }

    #[test]
    fn parse_service_spec_defaults_scheme() {
        let services = parse_service_specs(&specs(&["home=Home=example.com"]));
        assert_eq!(services[0].url.scheme(), "https");
        assert_eq!(services[0].url.host_str(), Some("example.com"));
    }

    #[test]
    fn invalid_specs_are_skipped() {
        let services = parse_service_specs(&specs(&[
            "missing-parts",
            "=NoId=https://example.com",
            "ok=Works=https://example.com",
        ]));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, "ok");
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let services = parse_service_specs(&specs(&[
            "dev=First=https://one.example.com",
            "dev=Second=https://two.example.com",
        ]));
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "First");
    }

    #[test]
    fn empty_specs_fall_back_to_builtin_fleet() {
        let services = parse_service_specs(&[]);
        assert!(!services.is_empty());
        assert!(services.iter().any(|s| s.id == "home"));
    }

    #[test]
    fn all_invalid_specs_fall_back_to_builtin_fleet() {
        let services = parse_service_specs(&specs(&["nonsense"]));
        assert!(services.iter().any(|s| s.id == "home"));
    }

    #[test]
    fn parse_service_url_requires_content() {
        assert!(parse_service_url("   ").is_none());
        let url = parse_service_url("localhost:8080").expect("url");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port_or_known_default(), Some(8080));
    }

    #[test]
    fn url_with_query_keeps_equals_signs() {
        let services =
            parse_service_specs(&specs(&["s=Search=https://example.com/?q=a=b"]));
        assert_eq!(services[0].url.query(), Some("q=a=b"));
    }
}
