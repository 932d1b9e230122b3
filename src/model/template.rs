//! Label print templates.
//!
//! Three built-in templates always exist and cannot be changed. Organizations may add their
//! own templates, which are identified by a UUID string.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Template selected when nothing else is
pub const DEFAULT_TEMPLATE_ID: &str = "standard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum TemplateLayout {
    Standard,
    Compact,
    Detailed,
}

impl TemplateLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateLayout::Standard => "standard",
            TemplateLayout::Compact => "compact",
            TemplateLayout::Detailed => "detailed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(TemplateLayout::Standard),
            "compact" => Some(TemplateLayout::Compact),
            "detailed" => Some(TemplateLayout::Detailed),
            _ => None,
        }
    }
}

/// Font sizes in points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FontSizesDto {
    pub product: i32,
    pub details: i32,
    pub small: i32,
}

/// Colors as `#rrggbb` hex strings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TemplateColorsDto {
    pub background: String,
    pub text: String,
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LabelTemplateDto {
    pub id: String,
    pub name: String,
    /// Width in millimeters
    pub width: i32,
    /// Height in millimeters
    pub height: i32,
    pub font_size: FontSizesDto,
    pub show_qr: bool,
    /// QR code size in pixels
    pub qr_size: i32,
    pub layout: TemplateLayout,
    pub colors: TemplateColorsDto,
    pub built_in: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// Body of a template create or update request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SaveTemplateDto {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub font_size: FontSizesDto,
    pub show_qr: bool,
    pub qr_size: i32,
    pub layout: TemplateLayout,
    pub colors: TemplateColorsDto,
}

impl From<LabelTemplateDto> for SaveTemplateDto {
    fn from(template: LabelTemplateDto) -> Self {
        Self {
            name: template.name,
            width: template.width,
            height: template.height,
            font_size: template.font_size,
            show_qr: template.show_qr,
            qr_size: template.qr_size,
            layout: template.layout,
            colors: template.colors,
        }
    }
}

impl SaveTemplateDto {
    /// Unsaved template with this content, for previewing edits
    pub fn to_preview(&self) -> LabelTemplateDto {
        LabelTemplateDto {
            id: String::new(),
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            font_size: self.font_size.clone(),
            show_qr: self.show_qr,
            qr_size: self.qr_size,
            layout: self.layout,
            colors: self.colors.clone(),
            built_in: false,
            created_at: None,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn built_in(
    id: &str,
    name: &str,
    (width, height): (i32, i32),
    (product, details, small): (i32, i32, i32),
    qr_size: i32,
    layout: TemplateLayout,
    accent: &str,
) -> LabelTemplateDto {
    LabelTemplateDto {
        id: id.to_string(),
        name: name.to_string(),
        width,
        height,
        font_size: FontSizesDto {
            product,
            details,
            small,
        },
        show_qr: true,
        qr_size,
        layout,
        colors: TemplateColorsDto {
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            accent: accent.to_string(),
        },
        built_in: true,
        created_at: None,
    }
}

/// The built-in templates, `standard` first.
pub fn default_templates() -> Vec<LabelTemplateDto> {
    vec![
        built_in(
            "standard",
            "Standard",
            (70, 40),
            (16, 12, 10),
            64,
            TemplateLayout::Standard,
            "#3b82f6",
        ),
        built_in(
            "compact",
            "Compact",
            (50, 30),
            (14, 10, 8),
            48,
            TemplateLayout::Compact,
            "#ef4444",
        ),
        built_in(
            "detailed",
            "Detailed",
            (80, 50),
            (18, 14, 12),
            80,
            TemplateLayout::Detailed,
            "#10b981",
        ),
    ]
}

pub fn is_built_in(template_id: &str) -> bool {
    matches!(template_id, "standard" | "compact" | "detailed")
}

pub fn find_template<'a>(
    templates: &'a [LabelTemplateDto],
    template_id: &str,
) -> Option<&'a LabelTemplateDto> {
    templates.iter().find(|t| t.id == template_id)
}

/// Selection to keep after deleting `deleted_id`.
///
/// Deleting the selected template falls back to [`DEFAULT_TEMPLATE_ID`].
pub fn selection_after_delete<'a>(selected_id: &'a str, deleted_id: &str) -> &'a str {
    if selected_id == deleted_id {
        DEFAULT_TEMPLATE_ID
    } else {
        selected_id
    }
}
