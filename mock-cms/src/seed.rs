//! Fixed dance-academy dataset the mock serves.
//!
//! Relations are embedded in wire shape (`{"data": …}` envelopes) so the
//! store can answer populated queries without join logic. Upcoming events
//! are dated far in the future so "starts after now" tests stay stable.

use serde_json::{json, Value};

use crate::Store;

fn media(id: u64, name: &str, url: &str) -> Value {
    json!({ "data": { "id": id, "attributes": {
        "name": name,
        "alternativeText": name,
        "width": 1280,
        "height": 853,
        "hash": format!("{}_{id:03x}", name.trim_end_matches(".png").replace('-', "_")),
        "ext": ".png",
        "mime": "image/png",
        "size": 214.6,
        "url": url,
        "provider": "local",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    } } })
}

fn no_media() -> Value {
    json!({ "data": null })
}

fn category_entity(id: u64, name: &str, slug: &str, color: &str, posts: &[(u64, &str, &str)]) -> Value {
    json!({ "id": id, "attributes": {
        "name": name,
        "slug": slug,
        "color": color,
        "blog_posts": { "data": posts.iter().map(|(id, title, slug)| json!({
            "id": id, "attributes": { "title": title, "slug": slug }
        })).collect::<Vec<_>>() }
    } })
}

pub fn seed() -> Store {
    let mut store = Store::default();

    // Taxonomy shared by the blog posts below.
    let training = (1u64, "Training", "training");
    let performance = (2u64, "Performance", "performance");
    let posts = [
        (1u64, "Five Stretches Before Class", "five-stretches"),
        (2u64, "Choosing Your First Pointe Shoes", "first-pointe-shoes"),
        (3u64, "Backstage at the Winter Recital", "winter-recital-backstage"),
    ];

    store.collections.insert(
        "categories".to_string(),
        vec![
            category_entity(training.0, training.1, training.2, "#aa3355", &posts[..2]),
            category_entity(performance.0, performance.1, performance.2, "#3355aa", &posts[2..]),
        ],
    );

    store.collections.insert(
        "authors".to_string(),
        vec![
            json!({ "id": 1, "attributes": {
                "name": "Elena Petrova",
                "slug": "elena-petrova",
                "bio": "Principal ballet instructor, ex-corps de ballet.",
                "email": "elena@example.com",
                "avatar": media(31, "elena.png", "/uploads/elena.png"),
                "blog_posts": { "data": [
                    { "id": 1, "attributes": { "title": posts[0].1, "slug": posts[0].2 } },
                    { "id": 3, "attributes": { "title": posts[2].1, "slug": posts[2].2 } }
                ] }
            } }),
            json!({ "id": 2, "attributes": {
                "name": "Marcus Lee",
                "slug": "marcus-lee",
                "avatar": no_media(),
                "blog_posts": { "data": [
                    { "id": 2, "attributes": { "title": posts[1].1, "slug": posts[1].2 } }
                ] }
            } }),
        ],
    );

    store.collections.insert(
        "tags".to_string(),
        vec![
            json!({ "id": 1, "attributes": {
                "name": "Ballet", "slug": "ballet", "color": "#ffffff",
                "blog_posts": { "data": [
                    { "id": 1, "attributes": { "title": posts[0].1, "slug": posts[0].2 } },
                    { "id": 2, "attributes": { "title": posts[1].1, "slug": posts[1].2 } }
                ] }
            } }),
            json!({ "id": 2, "attributes": {
                "name": "Recital", "slug": "recital", "color": "#eeddcc",
                "blog_posts": { "data": [
                    { "id": 3, "attributes": { "title": posts[2].1, "slug": posts[2].2 } }
                ] }
            } }),
        ],
    );

    let category_rel = |(id, name, slug): (u64, &str, &str), color: &str| {
        json!({ "data": { "id": id, "attributes": { "name": name, "slug": slug, "color": color } } })
    };
    let author_rel = |id: u64, name: &str, slug: &str| {
        json!({ "data": { "id": id, "attributes": { "name": name, "slug": slug } } })
    };
    let tag_rel = |entries: &[(u64, &str, &str)]| {
        json!({ "data": entries.iter().map(|(id, name, slug)| json!({
            "id": id, "attributes": { "name": name, "slug": slug, "color": "#ffffff" }
        })).collect::<Vec<_>>() })
    };

    store.collections.insert(
        "blog-posts".to_string(),
        vec![
            json!({ "id": 1, "attributes": {
                "title": posts[0].1,
                "slug": posts[0].2,
                "excerpt": "Warm up right before barre.",
                "content": "A slow, deliberate warm-up protects knees and ankles...",
                "readTime": "4 min",
                "publishDate": "2024-03-01T09:00:00Z",
                "featured": true,
                "featuredImage": media(11, "stretches.png", "/uploads/stretches.png"),
                "category": category_rel(training, "#aa3355"),
                "author": author_rel(1, "Elena Petrova", "elena-petrova"),
                "tags": tag_rel(&[(1, "Ballet", "ballet")])
            } }),
            json!({ "id": 2, "attributes": {
                "title": posts[1].1,
                "slug": posts[1].2,
                "excerpt": "Fit matters more than brand.",
                "content": "Every foot is different; a proper fitting takes an hour...",
                "readTime": "6 min",
                "publishDate": "2024-02-10T09:00:00Z",
                "featured": false,
                "featuredImage": no_media(),
                "category": category_rel(training, "#aa3355"),
                "author": author_rel(2, "Marcus Lee", "marcus-lee"),
                "tags": tag_rel(&[(1, "Ballet", "ballet")])
            } }),
            json!({ "id": 3, "attributes": {
                "title": posts[2].1,
                "slug": posts[2].2,
                "excerpt": "What the audience never sees.",
                "content": "Quick changes, rosin boxes and whispered counts...",
                "readTime": "5 min",
                "publishDate": "2024-01-20T09:00:00Z",
                "featured": false,
                "featuredImage": media(12, "backstage.png", "/uploads/backstage.png"),
                "category": category_rel(performance, "#3355aa"),
                "author": author_rel(1, "Elena Petrova", "elena-petrova"),
                "tags": tag_rel(&[(2, "Recital", "recital")])
            } }),
        ],
    );

    store.collections.insert(
        "testimonials".to_string(),
        vec![
            json!({ "id": 1, "attributes": {
                "name": "Sarah Chen",
                "role": "Parent of Emma, Age 8",
                "content": "The academy has transformed my shy daughter into a confident performer.",
                "rating": 5,
                "featured": true,
                "order": 2,
                "createdAt": "2024-01-10T00:00:00Z",
                "avatar": no_media()
            } }),
            json!({ "id": 2, "attributes": {
                "name": "Michael Tan",
                "role": "Parent of Lucas, Age 12",
                "content": "Outstanding instruction and facilities.",
                "rating": 5,
                "featured": true,
                "order": 1,
                "createdAt": "2024-01-05T00:00:00Z",
                "avatar": media(41, "michael.png", "/uploads/michael.png")
            } }),
            json!({ "id": 3, "attributes": {
                "name": "Priya Patel",
                "role": "Parent of Aria, Age 6",
                "content": "The trial class sold us immediately.",
                "rating": 5,
                "featured": true,
                "order": 1,
                "createdAt": "2024-02-01T00:00:00Z",
                "avatar": no_media()
            } }),
            json!({ "id": 4, "attributes": {
                "name": "Dana Wright",
                "role": "Adult student",
                "content": "Evening jazz classes are the highlight of my week.",
                "rating": 4,
                "featured": false,
                "order": 4,
                "createdAt": "2024-03-01T00:00:00Z",
                "avatar": no_media()
            } }),
        ],
    );

    store.collections.insert(
        "events".to_string(),
        vec![
            json!({ "id": 1, "attributes": {
                "title": "Melbourne Dance Exchange",
                "slug": "melbourne-dance-exchange",
                "description": "Two days of open classes and showcases.",
                "shortDescription": "Open classes and showcases.",
                "startDate": "2023-08-12T09:00:00Z",
                "endDate": "2023-08-13T18:00:00Z",
                "location": "Melbourne Arts Centre",
                "eventType": "competition",
                "price": 35.0,
                "registrationUrl": "https://example.com/mdx",
                "featured": true,
                "featuredImage": media(21, "mdx.png", "/uploads/mdx.png"),
                "gallery": { "data": [] }
            } }),
            json!({ "id": 2, "attributes": {
                "title": "Winter Recital",
                "slug": "winter-recital",
                "description": "Full-school recital across all disciplines.",
                "startDate": "2030-06-20T18:30:00Z",
                "location": "Grand Hall",
                "eventType": "recital",
                "featured": true,
                "featuredImage": media(22, "recital.png", "/uploads/recital.png"),
                "gallery": { "data": [] }
            } }),
            json!({ "id": 3, "attributes": {
                "title": "Contemporary Masterclass",
                "slug": "contemporary-masterclass",
                "description": "Guest choreographer masterclass, intermediate and up.",
                "startDate": "2031-02-02T10:00:00Z",
                "eventType": "masterclass",
                "price": 20.0,
                "featured": false,
                "featuredImage": no_media(),
                "gallery": { "data": [] }
            } }),
        ],
    );

    store.collections.insert(
        "gallery-items".to_string(),
        vec![
            json!({ "id": 1, "attributes": {
                "title": "Melbourne Dance Exchange 2023",
                "image": media(51, "mdx-stage.png", "/uploads/mdx-stage.png"),
                "category": "performance",
                "featured": true,
                "order": 2,
                "createdAt": "2024-01-15T00:00:00Z"
            } }),
            json!({ "id": 2, "attributes": {
                "title": "Ballet Class Excellence",
                "description": "Tuesday intermediate barre.",
                "image": media(52, "barre.png", "/uploads/barre.png"),
                "category": "class",
                "featured": true,
                "order": 1,
                "createdAt": "2024-01-20T00:00:00Z"
            } }),
            json!({ "id": 3, "attributes": {
                "title": "Winter Recital Finale",
                "image": media(53, "finale.png", "/uploads/finale.png"),
                "category": "performance",
                "featured": true,
                "order": 3,
                "createdAt": "2024-02-05T00:00:00Z",
                "tags": ["recital", "finale"]
            } }),
            json!({ "id": 4, "attributes": {
                "title": "Costume Workshop",
                "image": media(54, "costumes.png", "/uploads/costumes.png"),
                "category": "behind-scenes",
                "featured": false,
                "order": 9,
                "createdAt": "2024-02-10T00:00:00Z"
            } }),
        ],
    );

    store.hero = Some(json!({ "id": 1, "attributes": {
        "title": "Where Dancers Are Made",
        "subtitle": "Classical and contemporary training for every age.",
        "backgroundImage": media(61, "hero.png", "/uploads/hero.png"),
        "backgroundVideo": no_media(),
        "primaryButton": {
            "text": "Book a trial class",
            "url": "/trial",
            "variant": "primary",
            "size": "lg",
            "openInNewTab": false
        },
        "secondaryButton": {
            "text": "View timetable",
            "url": "/timetable",
            "variant": "outline",
            "size": "md",
            "openInNewTab": false
        },
        "features": ["RAD-certified instructors", "Purpose-built studios", "Annual recital"]
    } }));

    store
}
