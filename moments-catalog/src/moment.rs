use serde::{Deserialize, Serialize};

/// A bookable experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form, e.g. "2 hours".
    pub duration: String,
    /// Whole currency units.
    pub price: u32,
    pub city: String,
    pub category: String,
}

/// Read-only list of moments, built once at start-up.
#[derive(Debug, Clone)]
pub struct Catalog {
    moments: Vec<Moment>,
}

impl Catalog {
    pub fn new(moments: Vec<Moment>) -> Self {
        Self { moments }
    }

    pub fn all(&self) -> &[Moment] {
        &self.moments
    }

    pub fn find(&self, id: &str) -> Option<&Moment> {
        self.moments.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.moments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            moment(
                "1",
                "Sunset Rooftop Coffee",
                "Enjoy a serene evening with premium coffee while watching the sunset from a beautiful rooftop location. Perfect for unwinding after a long day.",
                "1 hour",
                25,
                "Dubai",
                "Relaxation",
            ),
            moment(
                "2",
                "BMW M2 Ride",
                "Experience the thrill of driving a powerful BMW M2 sports car. Feel the adrenaline rush as you navigate through scenic routes with this high-performance machine.",
                "2 hours",
                150,
                "Los Angeles",
                "Adventure",
            ),
            moment(
                "3",
                "Superbike Pillion Ride",
                "Hold on tight for an exhilarating pillion ride on a high-speed superbike. Experience the rush of wind and speed as you cruise through the city streets.",
                "1.5 hours",
                80,
                "Tokyo",
                "Adventure",
            ),
        ])
    }
}

fn moment(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    price: u32,
    city: &str,
    category: &str,
) -> Moment {
    Moment {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        price,
        city: city.to_string(),
        category: category.to_string(),
    }
}
