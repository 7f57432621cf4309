//! Slide edit operations sent through `batchUpdate`.
//!
//! Each variant serializes to the Google Slides request object of the same
//! name, e.g. `{"createSlide": {...}}`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideEdit {
    CreateSlide(CreateSlide),
    UpdatePageProperties(UpdatePageProperties),
    CreateShape(CreateShape),
    InsertText(InsertText),
    UpdateTextStyle(UpdateTextStyle),
    UpdateShapeProperties(UpdateShapeProperties),
}

impl SlideEdit {
    /// Request name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            SlideEdit::CreateSlide(_) => "createSlide",
            SlideEdit::UpdatePageProperties(_) => "updatePageProperties",
            SlideEdit::CreateShape(_) => "createShape",
            SlideEdit::InsertText(_) => "insertText",
            SlideEdit::UpdateTextStyle(_) => "updateTextStyle",
            SlideEdit::UpdateShapeProperties(_) => "updateShapeProperties",
        }
    }

    /// Object the edit creates or targets.
    pub fn object_id(&self) -> &str {
        match self {
            SlideEdit::CreateSlide(edit) => &edit.object_id,
            SlideEdit::UpdatePageProperties(edit) => &edit.object_id,
            SlideEdit::CreateShape(edit) => &edit.object_id,
            SlideEdit::InsertText(edit) => &edit.object_id,
            SlideEdit::UpdateTextStyle(edit) => &edit.object_id,
            SlideEdit::UpdateShapeProperties(edit) => &edit.object_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlide {
    pub object_id: String,
    pub insertion_index: usize,
    pub slide_layout_reference: LayoutReference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReference {
    pub predefined_layout: PredefinedLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredefinedLayout {
    Blank,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageProperties {
    pub object_id: String,
    pub page_properties: PageProperties,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProperties {
    pub page_background_fill: BackgroundFill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundFill {
    pub solid_fill: SolidFill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidFill {
    pub color: OpaqueColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueColor {
    pub rgb_color: RgbColor,
}

/// Color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RgbColor {
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f32::from(red) / 255.0,
            green: f32::from(green) / 255.0,
            blue: f32::from(blue) / 255.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShape {
    pub object_id: String,
    pub shape_type: ShapeType,
    pub element_properties: ElementProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    TextBox,
    Rectangle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProperties {
    pub page_object_id: String,
    pub size: Size,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn pt(magnitude: f64) -> Self {
        Self { magnitude, unit: Unit::Pt }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "PT")]
    Pt,
}

/// Affine transform restricted to translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub unit: Unit,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self { scale_x: 1.0, scale_y: 1.0, translate_x: x, translate_y: y, unit: Unit::Pt }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    pub object_id: String,
    pub insertion_index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyle {
    pub object_id: String,
    pub style: TextStyle,
    pub text_range: TextRange,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: Dimension,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRange {
    #[serde(rename = "type")]
    pub kind: RangeType,
}

impl TextRange {
    pub fn all() -> Self {
        Self { kind: RangeType::All }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeType {
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShapeProperties {
    pub object_id: String,
    pub shape_properties: ShapeProperties,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProperties {
    pub outline: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub outline_fill: BackgroundFill,
    pub weight: Dimension,
    pub dash_style: DashStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashStyle {
    Solid,
    Dash,
}
