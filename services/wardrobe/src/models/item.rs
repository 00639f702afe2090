//! Wardrobe item model and category handling

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clothing category of a wardrobe item
///
/// Six categories are known; any other raw value is kept verbatim in
/// [`Category::Other`] so nothing a caller stores is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    Other(String),
}

impl Category {
    /// The six fixed categories, in display order
    pub const KNOWN: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    /// Storage key of the category
    pub fn key(&self) -> &str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Other(raw) => raw,
        }
    }

    /// Display name; unknown categories display their raw value
    pub fn display_name(&self) -> &str {
        match self {
            Category::Tops => "上衣",
            Category::Bottoms => "裤子",
            Category::Dresses => "裙子",
            Category::Outerwear => "外套",
            Category::Shoes => "鞋子",
            Category::Accessories => "配饰",
            Category::Other(raw) => raw,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "tops" => Category::Tops,
            "bottoms" => Category::Bottoms,
            "dresses" => Category::Dresses,
            "outerwear" => Category::Outerwear,
            "shoes" => Category::Shoes,
            "accessories" => Category::Accessories,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.key().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Category selector where `all` matches every item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(value))
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// A catalogued clothing or accessory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub category_name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WardrobeItem {
    /// Merge the provided fields of `patch` over this record
    ///
    /// `category_name` is only replaced when the patch carries one; a new
    /// `category` alone leaves the old display name in place.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(category_name) = patch.category_name {
            self.category_name = category_name;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(tags) = patch.tags {
            self.tags = Some(tags);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(brand) = patch.brand {
            self.brand = Some(brand);
        }
    }
}

/// New wardrobe item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image: String::new(),
            tags: None,
            color: None,
            brand: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

/// Wardrobe item update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Item counts, overall and per fixed category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStats {
    pub total: usize,
    pub by_category: Vec<(Category, usize)>,
}

impl ItemStats {
    /// Count for one category, zero when it is not tracked
    pub fn count_for(&self, category: &Category) -> usize {
        self.by_category
            .iter()
            .find(|(tracked, _)| tracked == category)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
