use serde::Serialize;

/// Muscle-group category a catalog exercise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Push,
    Pull,
    Legs,
    Core,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Push => "Push",
            Category::Pull => "Pull",
            Category::Legs => "Legs",
            Category::Core => "Core",
            Category::Other => "Other",
        }
    }
}

/// The fixed exercise catalog. Held in process memory; never persisted.
/// The logging form also accepts free-text exercises, which fall outside
/// the catalog and map to `Category::Other` in breakdowns.
pub const EXERCISE_CATALOG: [(&str, Category); 17] = [
    ("Squat", Category::Legs),
    ("Front Squat", Category::Legs),
    ("Leg Press", Category::Legs),
    ("Lunge", Category::Legs),
    ("Romanian Deadlift", Category::Legs),
    ("Calf Raise", Category::Legs),
    ("Bench Press", Category::Push),
    ("Incline Bench Press", Category::Push),
    ("Overhead Press", Category::Push),
    ("Dip", Category::Push),
    ("Push-up", Category::Push),
    ("Deadlift", Category::Pull),
    ("Barbell Row", Category::Pull),
    ("Pull-up", Category::Pull),
    ("Lat Pulldown", Category::Pull),
    ("Biceps Curl", Category::Pull),
    ("Plank", Category::Core),
];

/// Look an exercise up in the catalog. Exact match only; anything not in
/// the catalog (free-text entries included) is `Other`.
pub fn category_for(exercise: &str) -> Category {
    EXERCISE_CATALOG
        .iter()
        .find(|(name, _)| *name == exercise)
        .map(|(_, cat)| *cat)
        .unwrap_or(Category::Other)
}
