//! litelens/crates/ll-fixtures/src/lib.rs
//!
//! Seeded sample data standing in for a real backend: users, the two fixed
//! post sets the refresh simulation swaps between, seed comments per post,
//! and the seeded notification. Timestamps are fixed constants so tests
//! stay deterministic.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use ll_core::{
    Comment, ExifData, ImageAsset, Notification, NotificationKind, Post, PostCatalog, User,
};
use once_cell::sync::Lazy;

/// The instant all fixture records claim to be created at.
pub fn seed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 18, 9, 30, 0).unwrap()
}

fn image(id: &str, url: &str, width: u32, height: u32) -> ImageAsset {
    ImageAsset {
        id: id.into(),
        url: url.into(),
        width,
        height,
    }
}

static SAMPLE_IMAGES: Lazy<Vec<ImageAsset>> = Lazy::new(|| {
    vec![
        image(
            "img-1",
            "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1200&q=80",
            4000,
            2667,
        ),
        image(
            "img-2",
            "https://images.unsplash.com/photo-1516031190212-da133013de50?auto=format&fit=crop&w=1200&q=80",
            3840,
            2560,
        ),
        image(
            "img-3",
            "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&w=1200&q=80",
            4000,
            2250,
        ),
        image(
            "img-4",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1200&q=80",
            4000,
            2667,
        ),
        image(
            "img-5",
            "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?auto=format&fit=crop&w=1200&q=80",
            4000,
            2667,
        ),
    ]
});

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "u-1".into(),
            username: "streetframe".into(),
            display_name: "Maya Ortiz".into(),
            avatar_url: None,
            bio: Some("Street and documentary photographer chasing light and quiet stories.".into()),
            location: Some("Barcelona, Spain".into()),
            styles: vec!["street".into(), "documentary".into()],
        },
        User {
            id: "u-2".into(),
            username: "portraitsbyleo".into(),
            display_name: "Leo Park".into(),
            avatar_url: None,
            bio: Some("Portraits with natural light and honest expressions.".into()),
            location: Some("Seoul, South Korea".into()),
            styles: vec!["portrait".into()],
        },
        User {
            id: "u-3".into(),
            username: "nocturnescapes".into(),
            display_name: "Aya Nakamura".into(),
            avatar_url: None,
            bio: Some("Night cityscapes and neon reflections.".into()),
            location: Some("Tokyo, Japan".into()),
            styles: vec!["night".into(), "city".into()],
        },
        User {
            id: "u-4".into(),
            username: "mountainlight".into(),
            display_name: "Jonas Keller".into(),
            avatar_url: None,
            bio: Some("Alpine sunrises and long hikes for one frame.".into()),
            location: Some("Zermatt, Switzerland".into()),
            styles: vec!["landscape".into()],
        },
    ]
});

static POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post {
            id: "p-1".into(),
            author: USERS[0].clone(),
            title: "Crossing at dusk".into(),
            description: Some(
                "Waiting for the last bit of blue hour to catch this quiet moment at the intersection."
                    .into(),
            ),
            images: vec![SAMPLE_IMAGES[0].clone()],
            tags: vec!["street".into(), "blue-hour".into(), "city".into()],
            gear: vec!["Fujifilm X100V".into()],
            exif: Some(ExifData {
                camera: Some("Fujifilm X100V".into()),
                lens: None,
                focal_length: Some("23mm".into()),
                aperture: Some("f/2".into()),
                shutter_speed: Some("1/125s".into()),
                iso: Some(800),
            }),
            location: Some("Barcelona".into()),
            created_at: seed_time(),
            appreciations_count: 42,
            comments_count: 7,
        },
        Post {
            id: "p-2".into(),
            author: USERS[1].clone(),
            title: "Window light portrait".into(),
            description: Some(
                "Soft side light and a simple background to keep the focus on expression.".into(),
            ),
            images: vec![SAMPLE_IMAGES[1].clone(), SAMPLE_IMAGES[2].clone()],
            tags: vec!["portrait".into(), "natural-light".into()],
            gear: vec!["Sony A7III".into(), "Zeiss 55mm".into()],
            exif: Some(ExifData {
                camera: Some("Sony A7III".into()),
                lens: Some("Zeiss 55mm".into()),
                focal_length: Some("55mm".into()),
                aperture: Some("f/1.8".into()),
                shutter_speed: Some("1/200s".into()),
                iso: Some(400),
            }),
            location: Some("Seoul".into()),
            created_at: seed_time(),
            appreciations_count: 88,
            comments_count: 15,
        },
        Post {
            id: "p-3".into(),
            author: USERS[2].clone(),
            title: "Neon alley".into(),
            description: Some("Layered reflections in a narrow alley just after the rain.".into()),
            images: vec![SAMPLE_IMAGES[2].clone()],
            tags: vec!["night".into(), "city".into(), "neon".into()],
            gear: vec!["Sony A7R IV".into(), "FE 24-70mm f/2.8 GM".into()],
            exif: Some(ExifData {
                camera: Some("Sony A7R IV".into()),
                lens: Some("FE 24-70mm f/2.8 GM".into()),
                focal_length: Some("35mm".into()),
                aperture: Some("f/2.8".into()),
                shutter_speed: Some("1/250s".into()),
                iso: Some(800),
            }),
            location: Some("Tokyo".into()),
            created_at: seed_time(),
            appreciations_count: 64,
            comments_count: 9,
        },
        Post {
            id: "p-4".into(),
            author: USERS[3].clone(),
            title: "First light on the ridge".into(),
            description: Some("A cold morning waiting for the first light to hit the peaks.".into()),
            images: vec![SAMPLE_IMAGES[4].clone()],
            tags: vec!["landscape".into(), "mountain".into(), "sunrise".into()],
            gear: vec!["Nikon Z7 II".into(), "24-70mm f/4".into()],
            exif: Some(ExifData {
                camera: Some("Nikon Z7 II".into()),
                lens: Some("NIKKOR Z 24-70mm f/4 S".into()),
                focal_length: Some("28mm".into()),
                aperture: Some("f/8".into()),
                shutter_speed: Some("1/160s".into()),
                iso: Some(200),
            }),
            location: Some("Zermatt".into()),
            created_at: seed_time(),
            appreciations_count: 51,
            comments_count: 6,
        },
    ]
});

/// The set a pull-to-refresh swaps in: fresh posts by the same authors.
static ALTERNATE_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post {
            id: "p-5".into(),
            author: USERS[0].clone(),
            title: "Market morning".into(),
            description: Some("Vendors setting up before the first customers arrive.".into()),
            images: vec![SAMPLE_IMAGES[3].clone()],
            tags: vec!["street".into(), "documentary".into(), "morning".into()],
            gear: vec!["Fujifilm X100V".into()],
            exif: Some(ExifData {
                camera: Some("Fujifilm X100V".into()),
                lens: None,
                focal_length: Some("23mm".into()),
                aperture: Some("f/4".into()),
                shutter_speed: Some("1/250s".into()),
                iso: Some(320),
            }),
            location: Some("Barcelona".into()),
            created_at: seed_time(),
            appreciations_count: 23,
            comments_count: 3,
        },
        Post {
            id: "p-6".into(),
            author: USERS[1].clone(),
            title: "Golden hour profile".into(),
            description: Some("Backlit at the end of the day, nothing staged.".into()),
            images: vec![SAMPLE_IMAGES[1].clone()],
            tags: vec!["portrait".into(), "golden-hour".into()],
            gear: vec!["Sony A7III".into(), "Zeiss 55mm".into()],
            exif: Some(ExifData {
                camera: Some("Sony A7III".into()),
                lens: Some("Zeiss 55mm".into()),
                focal_length: Some("55mm".into()),
                aperture: Some("f/2".into()),
                shutter_speed: Some("1/320s".into()),
                iso: Some(100),
            }),
            location: Some("Seoul".into()),
            created_at: seed_time(),
            appreciations_count: 31,
            comments_count: 4,
        },
        Post {
            id: "p-7".into(),
            author: USERS[2].clone(),
            title: "Last train home".into(),
            description: Some("Empty platform, wet tiles, one long exposure.".into()),
            images: vec![SAMPLE_IMAGES[2].clone()],
            tags: vec!["night".into(), "city".into(), "long-exposure".into()],
            gear: vec!["Sony A7R IV".into(), "FE 24-70mm f/2.8 GM".into()],
            exif: Some(ExifData {
                camera: Some("Sony A7R IV".into()),
                lens: Some("FE 24-70mm f/2.8 GM".into()),
                focal_length: Some("24mm".into()),
                aperture: Some("f/8".into()),
                shutter_speed: Some("2s".into()),
                iso: Some(100),
            }),
            location: Some("Tokyo".into()),
            created_at: seed_time(),
            appreciations_count: 47,
            comments_count: 5,
        },
        Post {
            id: "p-8".into(),
            author: USERS[3].clone(),
            title: "Cloud sea below the hut".into(),
            description: Some("Woke up above the weather for once.".into()),
            images: vec![SAMPLE_IMAGES[4].clone()],
            tags: vec!["landscape".into(), "mountain".into(), "clouds".into()],
            gear: vec!["Nikon Z7 II".into(), "24-70mm f/4".into()],
            exif: Some(ExifData {
                camera: Some("Nikon Z7 II".into()),
                lens: Some("NIKKOR Z 24-70mm f/4 S".into()),
                focal_length: Some("35mm".into()),
                aperture: Some("f/11".into()),
                shutter_speed: Some("1/100s".into()),
                iso: Some(64),
            }),
            location: Some("Zermatt".into()),
            created_at: seed_time(),
            appreciations_count: 39,
            comments_count: 2,
        },
    ]
});

/// The local account performing every action in this core.
pub fn current_user() -> User {
    User {
        id: "current-user".into(),
        username: "you".into(),
        display_name: "You".into(),
        avatar_url: None,
        bio: None,
        location: None,
        styles: vec![],
    }
}

pub fn users() -> Vec<User> {
    USERS.clone()
}

pub fn posts() -> Vec<Post> {
    POSTS.clone()
}

pub fn alternate_posts() -> Vec<Post> {
    ALTERNATE_POSTS.clone()
}

/// Catalog spanning both post sets, so dispatcher lookups resolve no matter
/// which set the feed currently shows.
pub fn catalog() -> PostCatalog {
    PostCatalog::new([posts(), alternate_posts()])
}

fn seed_comment(id: &str, author: &User, body: &str) -> Comment {
    Comment {
        id: id.into(),
        author: author.clone(),
        body: body.into(),
        is_critique: false,
        created_at: seed_time(),
    }
}

/// One conversation starter per primary post.
pub fn seed_comments() -> HashMap<String, Vec<Comment>> {
    HashMap::from([
        (
            "p-1".to_string(),
            vec![seed_comment(
                "c-seed-1",
                &USERS[1],
                "Love how calm this feels even though it is a busy crossing.",
            )],
        ),
        (
            "p-2".to_string(),
            vec![seed_comment(
                "c-seed-2",
                &USERS[0],
                "Beautiful use of window light – the catchlights are great.",
            )],
        ),
        (
            "p-3".to_string(),
            vec![seed_comment(
                "c-seed-3",
                &USERS[1],
                "That reflection layering is so good – feels like a frame from a film.",
            )],
        ),
        (
            "p-4".to_string(),
            vec![seed_comment(
                "c-seed-4",
                &USERS[0],
                "Worth the early wake up – love the separation between the peaks.",
            )],
        ),
    ])
}

/// The notification the activity feed starts with.
pub fn seed_notifications() -> Vec<Notification> {
    vec![Notification {
        id: "n-seed-1".into(),
        kind: NotificationKind::Follow,
        actor_name: "Maya Ortiz".into(),
        target_user_name: Some("You".into()),
        target_post_title: None,
        message: "Maya Ortiz started following you.".into(),
        created_at: seed_time(),
        is_read: false,
    }]
}
