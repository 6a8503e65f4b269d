//! Conversion of stored records into presentation views.
//!
//! This is the only place where raw list encodings are decoded, missing copy
//! is synthesized, and image references are resolved.

use crate::application::defaults::{self, present};
use crate::application::images::ImageResolver;
use crate::application::views::{ContentSource, IndustryView, JobView, OfferingView, TestimonialView};
use crate::domain::entities::{Industry, Job, Offering, RawBulletPoints, Testimonial};

/// Decodes an optional list field. Absent and malformed both give `[]`.
pub fn normalize_list(raw: Option<RawBulletPoints>) -> Vec<String> {
    raw.map(RawBulletPoints::into_list).unwrap_or_default()
}

fn list_or_else(raw: Option<RawBulletPoints>, default: impl FnOnce() -> Vec<String>) -> Vec<String> {
    let items = normalize_list(raw);
    if items.is_empty() { default() } else { items }
}

pub fn assemble_industry(
    industry: Industry,
    source: ContentSource,
    images: &ImageResolver,
) -> IndustryView {
    let image = images.resolve(industry.image.as_deref(), Some(industry.slug.as_str()));
    let name = industry.name;

    IndustryView {
        id: industry.id,
        bullet_points: list_or_else(industry.bullet_points, || {
            defaults::industry_bullet_points(&name)
        }),
        hero_title: present(industry.hero_title)
            .unwrap_or_else(|| defaults::industry_hero_title(&name)),
        hero_description: present(industry.hero_description)
            .unwrap_or_else(|| defaults::industry_hero_description(&name)),
        hero_industry_label: present(industry.hero_industry_label)
            .unwrap_or_else(|| name.clone()),
        slug: industry.slug,
        description: industry.description,
        image,
        order_index: industry.order_index,
        approach_items: industry.approach_items,
        source,
        name,
    }
}

pub fn assemble_offering(offering: Offering, images: &ImageResolver) -> OfferingView {
    let hero_image = images.resolve(offering.hero_image.as_deref(), Some(offering.slug.as_str()));
    let title = offering.title;

    let hero_description = present(offering.hero_description)
        .or_else(|| present(Some(offering.description.clone())))
        .unwrap_or_else(|| defaults::offering_hero_description(&title));

    OfferingView {
        id: offering.id,
        hero_bulletpoints: list_or_else(offering.hero_bulletpoints, || {
            defaults::offering_bullet_points(&title)
        }),
        hero_title: present(offering.hero_title).unwrap_or_else(|| title.clone()),
        hero_description,
        hero_image,
        slug: offering.slug,
        description: offering.description,
        order_index: offering.order_index,
        title,
    }
}

/// `position` is the testimonial's place in the rendered list; it picks the
/// placeholder portrait when the stored image cannot be resolved.
pub fn assemble_testimonial(
    testimonial: Testimonial,
    position: usize,
    images: &ImageResolver,
) -> TestimonialView {
    TestimonialView {
        id: testimonial.id,
        image: images.resolve_indexed(testimonial.image.as_deref(), None, position),
        text: testimonial.text,
        name: testimonial.name,
        role: testimonial.role,
        company: present(testimonial.company),
        is_featured: testimonial.is_featured,
        created_at: testimonial.created_at,
    }
}

pub fn assemble_job(job: Job) -> JobView {
    JobView {
        id: job.id,
        title: job.title,
        slug: job.slug,
        location: present(job.location),
        employment_type: present(job.employment_type),
        description: job.description,
        requirements: normalize_list(job.requirements),
        order_index: job.order_index,
        created_at: job.created_at,
    }
}
