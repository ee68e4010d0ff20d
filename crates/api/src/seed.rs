//! Idempotent demo-content population.
//!
//! Invoked only by `POST /api/seed`, never on a schedule. Each collection is
//! guarded by an explicit emptiness check, so running the routine twice
//! never duplicates data.

use bson::ser::serialize_to_document;
use bson::Document;
use serde::Serialize;

use agency_core::error::CoreError;
use agency_core::project::{self, Project};
use agency_core::service::{self, Service};
use agency_core::testimonial::{self, Testimonial};
use agency_db::DocumentStore;

/// Seed every content collection that is currently empty.
pub async fn run(store: &dyn DocumentStore) -> Result<(), CoreError> {
    seed_collection(store, project::COLLECTION, &demo_projects()).await?;
    seed_collection(store, testimonial::COLLECTION, &demo_testimonials()).await?;
    seed_collection(store, service::COLLECTION, &demo_services()).await?;
    Ok(())
}

/// Insert `records` into `collection` unless it already holds documents.
async fn seed_collection<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &'static str,
    records: &[T],
) -> Result<(), CoreError> {
    if store.count(collection, Document::new()).await? > 0 {
        tracing::debug!(collection, "Collection already populated, skipping seed");
        return Ok(());
    }

    for record in records {
        let document =
            serialize_to_document(record).map_err(|e| CoreError::Storage(e.to_string()))?;
        store.insert(collection, document).await?;
    }

    tracing::info!(collection, count = records.len(), "Seeded demo content");
    Ok(())
}

// ---------------------------------------------------------------------------
// Fixed demo records
// ---------------------------------------------------------------------------

pub fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            title: "SaaS Analytics Dashboard".to_string(),
            description: "Real-time metrics, role-based access, and stunning UI.".to_string(),
            tags: vec![
                "React".to_string(),
                "Tailwind".to_string(),
                "FastAPI".to_string(),
            ],
            url: Some("https://example.com".to_string()),
            image: Some("/projects/saas.png".to_string()),
            highlight: true,
        },
        Project {
            title: "E-commerce Storefront".to_string(),
            description: "High-converting storefront with checkout and CMS.".to_string(),
            tags: vec![
                "Next.js".to_string(),
                "Stripe".to_string(),
                "Sanity".to_string(),
            ],
            url: None,
            image: Some("/projects/store.png".to_string()),
            highlight: false,
        },
    ]
}

pub fn demo_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Ava Patel".to_string(),
            role: Some("COO, Nimbus Labs".to_string()),
            quote: "They delivered ahead of schedule with exceptional quality.".to_string(),
            avatar: Some("/avatars/ava.png".to_string()),
        },
        Testimonial {
            name: "Marcus Lee".to_string(),
            role: Some("Founder, Drift.io".to_string()),
            quote: "Our conversion rate jumped 37% after launch.".to_string(),
            avatar: Some("/avatars/marcus.png".to_string()),
        },
    ]
}

pub fn demo_services() -> Vec<Service> {
    vec![
        Service {
            name: "Product Strategy".to_string(),
            description: "From idea to roadmap with business outcomes.".to_string(),
            icon: Some("Lightbulb".to_string()),
        },
        Service {
            name: "Design & Frontend".to_string(),
            description: "Beautiful, accessible UI with motion.".to_string(),
            icon: Some("Palette".to_string()),
        },
        Service {
            name: "Web Apps & APIs".to_string(),
            description: "Robust backends with integrations.".to_string(),
            icon: Some("Server".to_string()),
        },
    ]
}
