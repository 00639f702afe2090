//! Fixed tag vocabularies and per-category tag recommendations

use serde::Serialize;

/// A color tag with its display swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTag {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

/// A season or occasion tag with its icon key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconTag {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Seasons and occasions suggested for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagRecommendation {
    pub seasons: &'static [&'static str],
    pub occasions: &'static [&'static str],
}

static COLORS: [ColorTag; 12] = [
    color("black", "黑色", "#000000"),
    color("white", "白色", "#FFFFFF"),
    color("gray", "灰色", "#808080"),
    color("navy", "深蓝", "#000080"),
    color("blue", "蓝色", "#4169E1"),
    color("red", "红色", "#DC143C"),
    color("pink", "粉色", "#FFB6C1"),
    color("orange", "橙色", "#FFA500"),
    color("yellow", "黄色", "#FFD700"),
    color("green", "绿色", "#228B22"),
    color("purple", "紫色", "#800080"),
    color("brown", "棕色", "#8B4513"),
];

static SEASONS: [IconTag; 4] = [
    icon("spring", "春季"),
    icon("summer", "夏季"),
    icon("autumn", "秋季"),
    icon("winter", "冬季"),
];

static OCCASIONS: [IconTag; 6] = [
    icon("casual", "休闲"),
    icon("work", "通勤"),
    icon("date", "约会"),
    icon("sports", "运动"),
    icon("formal", "正式"),
    icon("party", "派对"),
];

const ALL_SEASONS: &[&str] = &["spring", "summer", "autumn", "winter"];

const fn color(id: &'static str, name: &'static str, hex: &'static str) -> ColorTag {
    ColorTag { id, name, hex }
}

// Icon keys match the tag ids
const fn icon(id: &'static str, name: &'static str) -> IconTag {
    IconTag { id, name, icon: id }
}

pub fn color_tags() -> &'static [ColorTag] {
    &COLORS
}

pub fn season_tags() -> &'static [IconTag] {
    &SEASONS
}

pub fn occasion_tags() -> &'static [IconTag] {
    &OCCASIONS
}

/// Recommended seasons and occasions for a category key
///
/// Unknown categories get every season with casual and work occasions.
pub fn recommend_tags(category: &str) -> TagRecommendation {
    match category {
        "tops" => recommend(
            &["spring", "summer", "autumn"],
            &["casual", "work", "date", "formal"],
        ),
        "bottoms" => recommend(ALL_SEASONS, &["casual", "work", "date", "formal"]),
        "dresses" => recommend(
            &["spring", "summer", "autumn"],
            &["date", "party", "formal", "work"],
        ),
        "outerwear" => recommend(&["spring", "autumn", "winter"], &["casual", "work"]),
        "shoes" => recommend(ALL_SEASONS, &["casual", "work", "sports", "formal"]),
        "accessories" => recommend(ALL_SEASONS, &["casual", "work", "date", "party"]),
        _ => recommend(ALL_SEASONS, &["casual", "work"]),
    }
}

fn recommend(
    seasons: &'static [&'static str],
    occasions: &'static [&'static str],
) -> TagRecommendation {
    TagRecommendation { seasons, occasions }
}
