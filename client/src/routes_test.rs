use super::*;

#[test]
fn every_route_resolves_from_its_own_path() {
    for route in SiteRoute::ALL {
        assert_eq!(SiteRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_tolerates_trailing_slash() {
    assert_eq!(SiteRoute::from_path("/portfolio/"), Some(SiteRoute::Portfolio));
    assert_eq!(SiteRoute::from_path("/"), Some(SiteRoute::Home));
}

#[test]
fn from_path_rejects_unknown_paths() {
    assert_eq!(SiteRoute::from_path("/pricing"), None);
    assert_eq!(SiteRoute::from_path("/services/extra"), None);
    assert_eq!(SiteRoute::from_path(""), None);
}

#[test]
fn segment_is_path_without_leading_slash() {
    for route in SiteRoute::ALL {
        assert_eq!(format!("/{}", route.segment()), route.path());
    }
}

#[test]
fn paths_are_distinct() {
    for (i, a) in SiteRoute::ALL.iter().enumerate() {
        for b in SiteRoute::ALL.iter().skip(i + 1) {
            assert_ne!(a.path(), b.path());
        }
    }
}

#[test]
fn waitlist_label_uses_product_name() {
    assert_eq!(SiteRoute::AiWaitlist.label(), "CashCue AI");
    assert_eq!(SiteRoute::AiWaitlist.path(), "/ai-waitlist");
}

#[test]
fn page_key_strips_leading_slash() {
    assert_eq!(page_key("/contact"), "contact");
    assert_eq!(page_key("/ai-waitlist"), "ai-waitlist");
}

#[test]
fn page_key_maps_root_to_home() {
    assert_eq!(page_key("/"), "home");
    assert_eq!(page_key(""), "home");
}
