//! Fallback copy for optional descriptive fields.
//!
//! All templates derive text from the entity's canonical name or title so
//! that two renders of the same record always agree.

/// Returns the value if it holds something other than whitespace.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn industry_hero_title(name: &str) -> String {
    format!("{name} Staffing Solutions")
}

pub fn industry_hero_description(name: &str) -> String {
    format!("Specialized solutions for {name} businesses")
}

pub fn industry_bullet_points(name: &str) -> Vec<String> {
    vec![
        format!("Experienced {name} recruiters"),
        format!("Pre-screened {name} professionals"),
        format!("Flexible {name} hiring models"),
    ]
}

pub fn offering_hero_description(title: &str) -> String {
    format!("Specialized {title} solutions for your business")
}

/// Always exactly three entries, each naming the service.
pub fn offering_bullet_points(title: &str) -> Vec<String> {
    vec![
        format!("Tailored {title} for your hiring goals"),
        format!("Dedicated {title} specialists"),
        format!("Proven {title} results"),
    ]
}
