//! Fixed slide layout for a 5C deck.
//!
//! Geometry is in points on a 720x405 page. Boxes never grow with their
//! content; long text overflows.

use crate::domain::slides::edits::{
    BackgroundFill, CreateShape, CreateSlide, DashStyle, Dimension, ElementProperties, InsertText,
    LayoutReference, OpaqueColor, Outline, PageProperties, PredefinedLayout, RgbColor,
    ShapeProperties, ShapeType, Size, SlideEdit, SolidFill, TextRange, TextStyle, Transform,
    UpdatePageProperties, UpdateShapeProperties, UpdateTextStyle,
};
use crate::domain::{AnalysisRequest, SectionContent};

/// Title slide plus one slide per section.
pub const SLIDE_COUNT: usize = 6;

const TITLE_FONT: &str = "Unbounded";
const BODY_FONT: &str = "Arial";
const TITLE_FONT_SIZE: f64 = 24.0;
const HEADER_FONT_SIZE: f64 = 18.0;
const BODY_FONT_SIZE: f64 = 12.0;
const BULLET_OFFSET: f64 = 45.0;
const PLACEHOLDER_TEXT: &str = "Image Placeholder";

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Frame {
    const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    fn shifted_down(self, dy: f64) -> Self {
        Self { y: self.y + dy, ..self }
    }
}

const DECK_TITLE: Frame = Frame::new(50.0, 120.0, 420.0, 60.0);
const DECK_DESCRIPTION: Frame = Frame::new(50.0, 190.0, 420.0, 120.0);
const SECTION_HEADER: Frame = Frame::new(40.0, 40.0, 320.0, 40.0);
const SECTION_BODY: Frame = Frame::new(40.0, 90.0, 320.0, 270.0);
const SECTION_BULLET: Frame = Frame::new(40.0, 90.0, 320.0, 40.0);
const IMAGE_PLACEHOLDER: Frame = Frame::new(400.0, 90.0, 280.0, 250.0);

#[derive(Debug, Clone, Copy)]
struct Font {
    family: &'static str,
    size: f64,
    bold: bool,
}

const TITLE: Font = Font { family: TITLE_FONT, size: TITLE_FONT_SIZE, bold: true };
const HEADER: Font = Font { family: TITLE_FONT, size: HEADER_FONT_SIZE, bold: true };
const BODY: Font = Font { family: BODY_FONT, size: BODY_FONT_SIZE, bold: false };

fn background_color() -> RgbColor {
    RgbColor::from_rgb8(255, 241, 226)
}

fn placeholder_outline_color() -> RgbColor {
    RgbColor::from_rgb8(128, 128, 128)
}

/// Title of the remote presentation.
pub fn presentation_title(brand_name: &str) -> String {
    format!("5C Analysis: {brand_name}")
}

/// Object id of the slide at `index` (0 is the title slide).
pub fn slide_id(index: usize) -> String {
    format!("fivec_slide_{index}")
}

/// Ids of all slides created by `structure_edits`.
pub fn slide_ids() -> Vec<String> {
    (0..SLIDE_COUNT).map(slide_id).collect()
}

/// Blank slides with the deck background, no content.
pub fn structure_edits() -> Vec<SlideEdit> {
    let mut edits = Vec::with_capacity(SLIDE_COUNT * 2);
    for index in 0..SLIDE_COUNT {
        edits.push(SlideEdit::CreateSlide(CreateSlide {
            object_id: slide_id(index),
            insertion_index: index,
            slide_layout_reference: LayoutReference { predefined_layout: PredefinedLayout::Blank },
        }));
        edits.push(SlideEdit::UpdatePageProperties(UpdatePageProperties {
            object_id: slide_id(index),
            page_properties: PageProperties { page_background_fill: fill(background_color()) },
            fields: "pageBackgroundFill.solidFill.color".to_string(),
        }));
    }
    edits
}

/// Text boxes and placeholders for every slide.
///
/// `sections` is expected in `SectionLabel::ALL` order; section `n` lands on
/// slide `n + 1`.
pub fn content_edits(request: &AnalysisRequest, sections: &[SectionContent]) -> Vec<SlideEdit> {
    let mut edits = Vec::new();

    let title_slide = slide_id(0);
    edits.extend(text_box(
        &title_slide,
        element_id(0, "title"),
        DECK_TITLE,
        &presentation_title(request.brand_name()),
        TITLE,
    ));
    edits.extend(text_box(
        &title_slide,
        element_id(0, "description"),
        DECK_DESCRIPTION,
        request.brand_description(),
        BODY,
    ));

    for (offset, section) in sections.iter().enumerate() {
        let index = offset + 1;
        let page = slide_id(index);

        edits.extend(text_box(
            &page,
            element_id(index, "header"),
            SECTION_HEADER,
            section.label.as_str(),
            HEADER,
        ));

        if section.label.is_bulleted() {
            for (line_no, line) in section.bullet_lines().into_iter().enumerate() {
                edits.extend(text_box(
                    &page,
                    element_id(index, &format!("bullet_{line_no}")),
                    SECTION_BULLET.shifted_down(BULLET_OFFSET * line_no as f64),
                    line,
                    BODY,
                ));
            }
        } else {
            edits.extend(text_box(&page, element_id(index, "body"), SECTION_BODY, &section.text, BODY));
        }

        edits.extend(image_placeholder(&page, element_id(index, "image")));
    }

    edits
}

fn element_id(slide: usize, name: &str) -> String {
    format!("fivec_s{slide}_{name}")
}

fn fill(color: RgbColor) -> BackgroundFill {
    BackgroundFill { solid_fill: SolidFill { color: OpaqueColor { rgb_color: color } } }
}

fn shape(page: &str, object_id: &str, shape_type: ShapeType, frame: Frame) -> SlideEdit {
    SlideEdit::CreateShape(CreateShape {
        object_id: object_id.to_string(),
        shape_type,
        element_properties: ElementProperties {
            page_object_id: page.to_string(),
            size: Size { width: Dimension::pt(frame.width), height: Dimension::pt(frame.height) },
            transform: Transform::translate(frame.x, frame.y),
        },
    })
}

fn styled_text(object_id: &str, text: &str, font: Font) -> [SlideEdit; 2] {
    [
        SlideEdit::InsertText(InsertText {
            object_id: object_id.to_string(),
            insertion_index: 0,
            text: text.to_string(),
        }),
        SlideEdit::UpdateTextStyle(UpdateTextStyle {
            object_id: object_id.to_string(),
            style: TextStyle {
                font_family: font.family.to_string(),
                font_size: Dimension::pt(font.size),
                bold: font.bold,
            },
            text_range: TextRange::all(),
            fields: "fontFamily,fontSize,bold".to_string(),
        }),
    ]
}

// Empty text gets the box only: the service rejects zero-length insertions.
fn text_box(page: &str, object_id: String, frame: Frame, text: &str, font: Font) -> Vec<SlideEdit> {
    let mut edits = vec![shape(page, &object_id, ShapeType::TextBox, frame)];
    if !text.is_empty() {
        edits.extend(styled_text(&object_id, text, font));
    }
    edits
}

fn image_placeholder(page: &str, object_id: String) -> Vec<SlideEdit> {
    let mut edits = vec![
        shape(page, &object_id, ShapeType::Rectangle, IMAGE_PLACEHOLDER),
        SlideEdit::UpdateShapeProperties(UpdateShapeProperties {
            object_id: object_id.clone(),
            shape_properties: ShapeProperties {
                outline: Outline {
                    outline_fill: fill(placeholder_outline_color()),
                    weight: Dimension::pt(2.0),
                    dash_style: DashStyle::Dash,
                },
            },
            fields: "outline".to_string(),
        }),
    ];
    edits.extend(styled_text(&object_id, PLACEHOLDER_TEXT, BODY));
    edits
}
