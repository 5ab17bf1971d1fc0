//! Static activity and theme catalogs.
//!
//! The catalog is immutable reference data: an ordered list of activity
//! definitions the browser, wizard, and suggestion views read from, plus the
//! fixed set of weekend themes. Nothing here is ever mutated; the scheduling
//! store copies activities out of the catalog when the user adds them.

use std::sync::OnceLock;

use crate::models::{
    Activity, ActivityFilter, Category, CostTier, Location, Mood, TimeOfDay, WeekendTheme,
};

/// The full activity catalog, in display order.
pub fn activities() -> &'static [Activity] {
    static ACTIVITIES: OnceLock<Vec<Activity>> = OnceLock::new();
    ACTIVITIES.get_or_init(build_activities)
}

/// The fixed set of weekend themes, in display order.
pub fn themes() -> &'static [WeekendTheme] {
    static THEMES: OnceLock<Vec<WeekendTheme>> = OnceLock::new();
    THEMES.get_or_init(build_themes)
}

/// Looks up a catalog activity by id.
pub fn activity(id: &str) -> Option<&'static Activity> {
    activities().iter().find(|activity| activity.id == id)
}

/// Looks up a theme by id.
pub fn theme(id: &str) -> Option<&'static WeekendTheme> {
    themes().iter().find(|theme| theme.id == id)
}

/// Catalog activities passing the given filter, in catalog order.
pub fn filter_activities(filter: &ActivityFilter) -> Vec<&'static Activity> {
    activities()
        .iter()
        .filter(|activity| filter.matches(activity))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    category: Category,
    duration: f64,
    description: &str,
    mood: Mood,
    cost: CostTier,
    time_of_day: TimeOfDay,
    location: Option<Location>,
) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        category,
        duration,
        description: description.to_string(),
        image: format!("/images/activities/{id}.jpg"),
        mood,
        cost,
        time_of_day,
        location,
    }
}

fn venue(name: &str, address: &str, latitude: f64, longitude: f64) -> Option<Location> {
    Some(Location {
        name: name.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
    })
}

#[allow(clippy::too_many_lines)]
fn build_activities() -> Vec<Activity> {
    vec![
        entry(
            "farmers-market",
            "Farmers Market Stroll",
            Category::Food,
            2.0,
            "Wander the stalls, sample local produce, and pick up fresh flowers.",
            Mood::Social,
            CostTier::Low,
            TimeOfDay::Morning,
            venue(
                "Pike Place Market",
                "85 Pike St",
                47.6097,
                -122.3422,
            ),
        ),
        entry(
            "sunrise-hike",
            "Sunrise Hike",
            Category::Outdoor,
            3.0,
            "Beat the crowds with an early trail and a view worth the alarm.",
            Mood::Energetic,
            CostTier::Free,
            TimeOfDay::Morning,
            venue(
                "Discovery Park Loop Trail",
                "3801 Discovery Park Blvd",
                47.6573,
                -122.4057,
            ),
        ),
        entry(
            "brunch-cafe",
            "Long Brunch",
            Category::Food,
            1.5,
            "Bottomless coffee, eggs benedict, and absolutely no agenda.",
            Mood::Relaxed,
            CostTier::Medium,
            TimeOfDay::Morning,
            venue(
                "Portage Bay Cafe",
                "391 Terry Ave N",
                47.6221,
                -122.3365,
            ),
        ),
        entry(
            "kayak-tour",
            "Kayak Tour",
            Category::Outdoor,
            2.5,
            "Paddle the bay with a guide and spot seals along the shoreline.",
            Mood::Adventurous,
            CostTier::Medium,
            TimeOfDay::Afternoon,
            venue(
                "Agua Verde Paddle Club",
                "1303 NE Boat St",
                47.6525,
                -122.3148,
            ),
        ),
        entry(
            "art-museum",
            "Art Museum Visit",
            Category::Culture,
            2.0,
            "Take in the current exhibition at your own pace.",
            Mood::Relaxed,
            CostTier::Low,
            TimeOfDay::Any,
            venue(
                "Seattle Art Museum",
                "1300 First Ave",
                47.6072,
                -122.3381,
            ),
        ),
        entry(
            "spa-afternoon",
            "Spa Afternoon",
            Category::Wellness,
            3.0,
            "Sauna, massage, and a robe you will not want to give back.",
            Mood::Relaxed,
            CostTier::High,
            TimeOfDay::Afternoon,
            venue(
                "Banya 5",
                "217 9th Ave N",
                47.6187,
                -122.3404,
            ),
        ),
        entry(
            "board-game-night",
            "Board Game Night",
            Category::Social,
            3.0,
            "Gather friends, stack snacks, and settle old scores over cardboard.",
            Mood::Social,
            CostTier::Low,
            TimeOfDay::Evening,
            None,
        ),
        entry(
            "live-music",
            "Live Music Show",
            Category::Entertainment,
            2.5,
            "Catch a local act at an intimate venue.",
            Mood::Energetic,
            CostTier::Medium,
            TimeOfDay::Evening,
            venue(
                "The Crocodile",
                "2505 1st Ave",
                47.6154,
                -122.3459,
            ),
        ),
        entry(
            "botanical-garden",
            "Botanical Garden Walk",
            Category::Outdoor,
            1.5,
            "A slow loop through the seasonal beds and the conservatory.",
            Mood::Relaxed,
            CostTier::Free,
            TimeOfDay::Any,
            venue(
                "Washington Park Arboretum",
                "2300 Arboretum Dr E",
                47.6396,
                -122.2943,
            ),
        ),
        entry(
            "cooking-class",
            "Hands-On Cooking Class",
            Category::Food,
            2.5,
            "Learn a new cuisine and eat your homework.",
            Mood::Social,
            CostTier::High,
            TimeOfDay::Evening,
            venue(
                "Hot Stove Society",
                "2000 4th Ave",
                47.6132,
                -122.3394,
            ),
        ),
        entry(
            "yoga-in-the-park",
            "Yoga in the Park",
            Category::Wellness,
            1.0,
            "A free outdoor flow session, all levels welcome.",
            Mood::Relaxed,
            CostTier::Free,
            TimeOfDay::Morning,
            venue(
                "Green Lake Park",
                "7201 E Green Lake Dr N",
                47.6806,
                -122.3293,
            ),
        ),
        entry(
            "night-market",
            "Night Market",
            Category::Social,
            2.0,
            "Street food, vintage stalls, and live DJs after dark.",
            Mood::Social,
            CostTier::Low,
            TimeOfDay::Evening,
            venue(
                "Chinatown-International District",
                "600 5th Ave S",
                47.5980,
                -122.3270,
            ),
        ),
        entry(
            "pottery-workshop",
            "Pottery Workshop",
            Category::Culture,
            2.0,
            "Throw a bowl on the wheel; keep whatever survives the kiln.",
            Mood::Relaxed,
            CostTier::Medium,
            TimeOfDay::Afternoon,
            venue(
                "Seward Park Clay Studio",
                "5900 Lake Washington Blvd S",
                47.5512,
                -122.2534,
            ),
        ),
        entry(
            "trivia-night",
            "Pub Trivia Night",
            Category::Entertainment,
            2.0,
            "Six rounds, one tiebreaker, and a team name you will regret.",
            Mood::Social,
            CostTier::Low,
            TimeOfDay::Evening,
            None,
        ),
    ]
}

fn theme_entry(
    id: &str,
    name: &str,
    description: &str,
    color: &str,
    icon: &str,
    suggested: &[&str],
) -> WeekendTheme {
    WeekendTheme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        suggested_activities: suggested.iter().map(|id| (*id).to_string()).collect(),
    }
}

fn build_themes() -> Vec<WeekendTheme> {
    vec![
        theme_entry(
            "lazy",
            "Lazy Weekend",
            "Slow mornings, good food, and zero obligations.",
            "bg-amber-100 text-amber-800",
            "😴",
            &["brunch-cafe", "botanical-garden", "spa-afternoon"],
        ),
        theme_entry(
            "adventurous",
            "Adventure Weekend",
            "Get outside and earn your dinner.",
            "bg-emerald-100 text-emerald-800",
            "🧗",
            &["sunrise-hike", "kayak-tour", "night-market"],
        ),
        theme_entry(
            "family",
            "Family Weekend",
            "Plans everyone from six to sixty can enjoy.",
            "bg-sky-100 text-sky-800",
            "👨‍👩‍👧‍👦",
            &["farmers-market", "botanical-garden", "board-game-night"],
        ),
        theme_entry(
            "romantic",
            "Romantic Weekend",
            "A weekend built for two.",
            "bg-rose-100 text-rose-800",
            "💐",
            &["cooking-class", "live-music", "spa-afternoon"],
        ),
        theme_entry(
            "cultural",
            "Culture Weekend",
            "Galleries, workshops, and a show to finish.",
            "bg-violet-100 text-violet-800",
            "🎭",
            &["art-museum", "pottery-workshop", "live-music"],
        ),
    ]
}
