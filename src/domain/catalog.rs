//! Local content catalog.
//!
//! A compiled-in copy of the industry pages. It is always available, never
//! touches the network, and backs the industry service when the remote store
//! cannot be reached.

use std::sync::LazyLock;

use crate::domain::entities::{ApproachItem, Industry, RawBulletPoints};

static INDUSTRIES: LazyLock<Vec<Industry>> = LazyLock::new(build_industries);

/// All catalog industries in display order.
pub fn industries() -> &'static [Industry] {
    &INDUSTRIES
}

/// Looks up a catalog industry by slug without consulting the remote store.
pub fn industry_by_slug(slug: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.slug == slug)
}

fn bullets(items: &[&str]) -> Option<RawBulletPoints> {
    Some(RawBulletPoints::List(
        items.iter().map(|s| s.to_string()).collect(),
    ))
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[allow(clippy::too_many_arguments)]
fn industry(
    id: i64,
    name: &str,
    slug: &str,
    description: &str,
    image: &str,
    bullet_points: &[&str],
    hero_title: &str,
    hero_description: &str,
    approach: &[(&str, &str)],
) -> Industry {
    Industry {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        image: text(image),
        bullet_points: bullets(bullet_points),
        is_active: true,
        order_index: id as i32,
        hero_title: text(hero_title),
        hero_description: text(hero_description),
        hero_industry_label: text(name),
        approach_items: approach
            .iter()
            .map(|(title, description)| ApproachItem::new(*title, *description))
            .collect(),
    }
}

fn build_industries() -> Vec<Industry> {
    vec![
        industry(
            1,
            "Healthcare",
            "healthcare",
            "Clinical and non-clinical staffing for hospitals, clinics and care providers.",
            "/landing/pexels-tiger-lily-7109063.jpg",
            &[
                "Registered nurses and allied health professionals",
                "Credential verification before placement",
                "Locum and permanent contracts",
            ],
            "Healthcare Recruitment",
            "Qualified clinicians placed quickly, with compliance handled end to end.",
            &[
                (
                    "Understand the ward",
                    "We map shift patterns, specialisms and licensing needs first.",
                ),
                (
                    "Verify every credential",
                    "Licences and references are checked before a candidate is introduced.",
                ),
                (
                    "Stay on call",
                    "A dedicated consultant covers urgent and out-of-hours requests.",
                ),
            ],
        ),
        industry(
            2,
            "Technology",
            "technology",
            "Engineers, data specialists and IT leaders for product and platform teams.",
            "/landing/pexels-technology-3861969.jpg",
            &[
                "Software, cloud and data engineering",
                "Technical screening by practitioners",
                "Contract and permanent hiring",
            ],
            "Technology Talent",
            "Builders who ship, screened by people who have shipped.",
            &[
                (
                    "Define the stack",
                    "We agree on the technologies and seniority that matter.",
                ),
                (
                    "Screen technically",
                    "Candidates complete a practical review before your interview loop.",
                ),
            ],
        ),
        industry(
            3,
            "Finance & Banking",
            "finance",
            "Accounting, risk and compliance professionals for financial institutions.",
            "/landing/pexels-finance-6801648.jpg",
            &[
                "Audit, tax and advisory roles",
                "Regulatory and compliance specialists",
                "Interim finance leadership",
            ],
            "Finance Recruitment",
            "Trusted professionals for regulated environments.",
            &[(
                "Respect the regulator",
                "Background and regulatory checks are part of every shortlist.",
            )],
        ),
        industry(
            4,
            "Manufacturing",
            "manufacturing",
            "Skilled trades, production and engineering staff for plants and workshops.",
            "/landing/pexels-manufacturing-3862627.jpg",
            &[
                "Production operators and technicians",
                "Maintenance and quality engineers",
                "Shift-ready temporary crews",
            ],
            "Manufacturing Workforce",
            "Keep lines running with reliable, safety-trained people.",
            &[(
                "Plan the shifts",
                "Rosters are built around your production calendar.",
            )],
        ),
        industry(
            5,
            "Hospitality",
            "hospitality",
            "Front-of-house, kitchen and management staff for hotels and restaurants.",
            "/landing/pexels-hospitality-941861.jpg",
            &[
                "Chefs, cooks and kitchen porters",
                "Front desk and guest services",
                "Seasonal and event staffing",
            ],
            "Hospitality Staffing",
            "Service-minded people for every season.",
            &[],
        ),
        industry(
            6,
            "Logistics & Supply Chain",
            "logistics",
            "Drivers, warehouse teams and planners for distribution networks.",
            "/landing/pexels-logistics-4481259.jpg",
            &[
                "Licensed drivers and forklift operators",
                "Warehouse supervisors",
                "Supply chain planners",
            ],
            "Logistics Recruitment",
            "People who keep goods moving on time.",
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_slugs_unique_and_present() {
        let slugs: HashSet<&str> = industries().iter().map(|i| i.slug.as_str()).collect();

        assert_eq!(slugs.len(), industries().len());
        assert!(slugs.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_catalog_is_active_and_ordered() {
        assert!(industries().iter().all(|i| i.is_active));
        assert!(
            industries()
                .windows(2)
                .all(|w| w[0].order_index < w[1].order_index)
        );
    }

    #[test]
    fn test_industry_by_slug() {
        let healthcare = industry_by_slug("healthcare").unwrap();
        assert_eq!(healthcare.name, "Healthcare");
        assert!(industry_by_slug("aerospace").is_none());
    }
}
