//! Static sample content substituted when a fetch fails.
//!
//! Already display-shaped: the views swap these in as-is so the page stays
//! visually complete even with the CMS unreachable.

use crate::display::{GalleryItemDisplay, TestimonialDisplay};
use crate::models::GalleryCategory;

pub fn gallery_items() -> Vec<GalleryItemDisplay> {
    vec![
        GalleryItemDisplay {
            id: 1,
            title: "Melbourne Dance Exchange 2023".to_string(),
            description: String::new(),
            category: GalleryCategory::Performance,
            image: "/uploads/melbourne-dance-exchange.png".to_string(),
            tags: Vec::new(),
        },
        GalleryItemDisplay {
            id: 2,
            title: "Ballet Class Excellence".to_string(),
            description: String::new(),
            category: GalleryCategory::Class,
            image: "/uploads/ballet-class-excellence.png".to_string(),
            tags: Vec::new(),
        },
    ]
}

pub fn testimonials() -> Vec<TestimonialDisplay> {
    vec![
        TestimonialDisplay {
            id: 1,
            name: "Sarah Chen".to_string(),
            role: "Parent of Emma, Age 8".to_string(),
            content: "The academy has transformed my shy daughter into a confident performer. \
                      The teachers are exceptional and truly care about each child's progress."
                .to_string(),
            rating: 5,
            avatar: String::new(),
        },
        TestimonialDisplay {
            id: 2,
            name: "Michael Tan".to_string(),
            role: "Parent of Lucas, Age 12".to_string(),
            content: "Outstanding instruction and facilities. My son has developed incredible \
                      discipline and artistry. The recitals are professionally produced and \
                      showcase real talent."
                .to_string(),
            rating: 5,
            avatar: String::new(),
        },
        TestimonialDisplay {
            id: 3,
            name: "Priya Patel".to_string(),
            role: "Parent of Aria, Age 6".to_string(),
            content: "We've tried several dance schools, but none compare to the quality and \
                      care here. The trial class sold us immediately."
                .to_string(),
            rating: 5,
            avatar: String::new(),
        },
    ]
}
