use super::*;

// =============================================================
// Portfolio filter
// =============================================================

#[test]
fn fintech_filter_returns_single_project() {
    let projects = catalog().projects_in("Fintech");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Crypto Trading App");
}

#[test]
fn all_filter_returns_every_project() {
    let projects = catalog().projects_in(ALL_CATEGORIES);
    assert_eq!(projects.len(), catalog().projects.len());
    assert_eq!(projects.len(), 6);
}

#[test]
fn filter_is_exact_match() {
    assert!(catalog().projects_in("fintech").is_empty());
    assert!(catalog().projects_in("Fin").is_empty());
    assert!(catalog().projects_in("").is_empty());
}

#[test]
fn every_non_all_category_matches_exactly_one_project() {
    for category in PORTFOLIO_CATEGORIES.iter().skip(1) {
        let projects = catalog().projects_in(category);
        assert_eq!(projects.len(), 1, "category {category:?}");
        assert!(projects.iter().all(|p| p.category == *category));
    }
}

#[test]
fn filter_preserves_catalog_order() {
    let ids: Vec<u32> = catalog().projects_in(ALL_CATEGORIES).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

// =============================================================
// Catalog shape
// =============================================================

#[test]
fn catalog_ids_are_unique() {
    let c = catalog();
    for (i, a) in c.services.iter().enumerate() {
        assert!(c.services.iter().skip(i + 1).all(|b| b.id != a.id));
    }
    for (i, a) in c.projects.iter().enumerate() {
        assert!(c.projects.iter().skip(i + 1).all(|b| b.id != a.id));
    }
    for (i, a) in c.testimonials.iter().enumerate() {
        assert!(c.testimonials.iter().skip(i + 1).all(|b| b.id != a.id));
    }
}

#[test]
fn testimonial_ratings_are_within_five_stars() {
    assert!(catalog().testimonials.iter().all(|t| (1..=5).contains(&t.rating)));
}

#[test]
fn service_icons_cover_every_service() {
    assert_eq!(SERVICE_ICONS.len(), catalog().services.len());
}

#[test]
fn both_forms_post_to_formspree() {
    let company = &catalog().company;
    assert!(company.contact.endpoint.starts_with("https://formspree.io/f/"));
    assert_eq!(company.contact.endpoint, company.ai_waitlist.endpoint);
}

#[test]
fn skill_percentages_are_bounded() {
    assert!(SKILLS.iter().all(|s| s.percentage <= 100));
}

#[test]
fn select_options_start_with_empty_placeholder() {
    assert_eq!(PROJECT_TYPES[0].0, "");
    assert_eq!(BUDGETS[0].0, "");
}

// =============================================================
// WhatsApp link
// =============================================================

#[test]
fn whatsapp_link_keeps_digits_only() {
    assert_eq!(whatsapp_link("+1 (316) 236-8103"), "https://wa.me/13162368103");
}

#[test]
fn whatsapp_link_for_company_number() {
    assert_eq!(whatsapp_link(catalog().company.contact.whatsapp), "https://wa.me/13162368103");
}
