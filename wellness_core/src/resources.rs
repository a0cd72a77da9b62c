//! Built-in self-help resources and urgent-help contacts.
//!
//! The catalog is static content; front-ends pick from it by category or
//! by the mood recorded for the day.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Cached default catalog, built once
static DEFAULT_CATALOG: Lazy<ResourceCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static ResourceCatalog {
    &DEFAULT_CATALOG
}

/// Topic a resource addresses
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Meditation,
    Exercise,
    Sleep,
    Stress,
    Emergency,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 5] = [
        ResourceCategory::Meditation,
        ResourceCategory::Exercise,
        ResourceCategory::Sleep,
        ResourceCategory::Stress,
        ResourceCategory::Emergency,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceCategory::Meditation => "meditation",
            ResourceCategory::Exercise => "exercise",
            ResourceCategory::Sleep => "sleep",
            ResourceCategory::Stress => "stress",
            ResourceCategory::Emergency => "emergency",
        };
        f.write_str(name)
    }
}

/// A self-help article, technique or hotline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub link: String,
}

/// Someone to contact in a crisis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UrgentContact {
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Complete set of resources and urgent contacts
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub resources: Vec<Resource>,
    pub urgent_contacts: Vec<UrgentContact>,
}

impl ResourceCatalog {
    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn by_category(&self, category: ResourceCategory) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Resources suited to the given mood score, in catalog order.
    ///
    /// Very low moods surface emergency lines first among calming
    /// material; good moods get activity and sleep material.
    pub fn for_mood(&self, mood: u8) -> Vec<&Resource> {
        use ResourceCategory::*;

        let wanted: &[ResourceCategory] = match mood {
            0..=2 => &[Emergency, Meditation, Stress],
            3..=4 => &[Meditation, Stress, Exercise],
            _ => &[Exercise, Sleep],
        };

        self.resources
            .iter()
            .filter(|r| wanted.contains(&r.category))
            .collect()
    }

    /// Check ids are unique and every resource has a link
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for resource in &self.resources {
            if !seen.insert(resource.id.as_str()) {
                errors.push(format!("Duplicate resource id: {}", resource.id));
            }
            if resource.link.trim().is_empty() {
                errors.push(format!("Resource {} has no link", resource.id));
            }
        }

        for contact in &self.urgent_contacts {
            if contact.link.trim().is_empty() {
                errors.push(format!("Urgent contact {} has no link", contact.name));
            }
        }

        errors
    }
}

/// Resources suited to `mood` from the default catalog
pub fn resources_for_mood(mood: u8) -> Vec<&'static Resource> {
    default_catalog().for_mood(mood)
}

fn resource(
    id: &str,
    title: &str,
    description: &str,
    category: ResourceCategory,
    link: &str,
) -> Resource {
    Resource {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        link: link.into(),
    }
}

/// Builds the built-in catalog
pub fn build_default_catalog() -> ResourceCatalog {
    use ResourceCategory::*;

    let resources = vec![
        resource(
            "1",
            "Guided Meditation for Beginners",
            "A gentle introduction to mindfulness meditation for reducing stress and anxiety.",
            Meditation,
            "https://positivepsychology.com/meditation-techniques-beginners/",
        ),
        resource(
            "2",
            "Breathing Exercises",
            "Deep breathing techniques to calm the mind and release physical tension.",
            Stress,
            "https://positivepsychology.com/breathing-exercises/",
        ),
        resource(
            "3",
            "Exercise Routine for Mental Wellbeing",
            "How regular exercise lifts mood and reduces symptoms of depression.",
            Exercise,
            "https://positivepsychology.com/physical-activity-mental-health/",
        ),
        resource(
            "4",
            "Sleep Hygiene",
            "Strategies for better sleep quality and healthy bedtime routines.",
            Sleep,
            "https://positivepsychology.com/sleep-hygiene/",
        ),
        resource(
            "5",
            "Gratitude Journal",
            "How keeping a gratitude journal can shift your outlook and emotional wellbeing.",
            Meditation,
            "https://positivepsychology.com/gratitude-journal/",
        ),
        resource(
            "6",
            "Managing Academic Stress",
            "Techniques for students dealing with academic pressure.",
            Stress,
            "https://conecta.tec.mx/es/noticias/aguascalientes/salud/encuentra-tu-balance-5-tips-para-manejar-el-estres-academico",
        ),
        resource(
            "7",
            "24/7 Helplines",
            "If you need to talk to someone right now, these lines offer confidential support.",
            Emergency,
            "tel:*4141",
        ),
        resource(
            "8",
            "Gentle Physical Activity",
            "Yoga and stretching to improve physical and mental wellbeing.",
            Exercise,
            "https://positivepsychology.com/yoga-therapy/",
        ),
    ];

    let urgent_contacts = vec![
        UrgentContact {
            name: "Health helpline".into(),
            description: "Health guidance and support 24 hours a day, 365 days a year.".into(),
            link: "tel:6003607777".into(),
        },
        UrgentContact {
            name: "Ambulance".into(),
            description: "For an ambulance or immediate medical help after physical harm.".into(),
            link: "tel:131".into(),
        },
        UrgentContact {
            name: "Nearest emergency care".into(),
            description: "Find psychiatric emergency services or the closest hospital.".into(),
            link: "https://maps.google.com/?q=urgencia+psicologica".into(),
        },
    ];

    ResourceCatalog {
        resources,
        urgent_contacts,
    }
}
